use dioxus::prelude::*;

/// Dismissible error banner with a retry affordance, shown above a table
/// when a fetch fails. Retrying is always user-initiated.
#[component]
pub fn ErrorBanner(
    message: String,
    on_retry: EventHandler<()>,
    #[props(default)] on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between gap-4 px-4 py-3 mb-4 bg-red-50 border border-red-200 rounded text-red-700",
            span { class: "text-sm", "{message}" }
            div {
                class: "flex items-center gap-2",
                button {
                    class: "px-3 py-1 text-sm border border-red-300 rounded hover:bg-red-100 cursor-pointer",
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
                button {
                    class: "text-sm font-bold cursor-pointer",
                    onclick: move |_| on_dismiss.call(()),
                    "\u{2715}"
                }
            }
        }
    }
}
