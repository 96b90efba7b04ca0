use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::modal::ModalOverlay;
use crate::table::Row;

/// Confirmation dialog shown before a destructive delete.
#[component]
pub fn ConfirmDeleteModal(
    row: Row,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<String>,
    on_cancel: EventHandler<()>,
) -> Element {
    let id = row.id.clone();
    let name = row.display_name();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div { class: "p-6",
                h2 { class: "text-lg font-semibold mb-2", "Delete record" }
                p { class: "text-sm text-gray-600 mb-6",
                    "Are you sure you want to delete \"{name}\"? This action cannot be undone."
                }
                div { class: "flex justify-end gap-2",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        disabled: busy,
                        onclick: move |_| on_confirm.call(id.clone()),
                        if busy { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}
