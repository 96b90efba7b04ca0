//! Generic record editor rendered over a table row.
//!
//! Field kinds are decided per key: dropdown fields render a select over
//! fixed options, date fields take DD/MM/YYYY text and are validated on
//! save, the assignment field renders an operator multi-select, and
//! everything else is a plain text input. Non-editable fields still show,
//! read-only, so the user sees the whole record while editing.

use std::collections::HashMap;

use api::ApiClient;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label};
use crate::dates;
use crate::modal::ModalOverlay;
use crate::table::{column_label, CellValue, DropdownField, Row};

const ASSIGN_FIELD: &str = "assignedTo";

fn default_editable(row: &Row) -> Vec<String> {
    row.keys()
        .filter(|key| !matches!(*key, "id" | "title" | "description"))
        .map(str::to_string)
        .collect()
}

/// Modal for editing a single row. Emits the edited row through `on_save`;
/// the caller maps it back onto its typed update payload.
#[component]
pub fn EditModal(
    row: Row,
    /// Fields the user may change; empty means the default rule.
    #[props(default)]
    editable_fields: Vec<String>,
    #[props(default)] dropdown_fields: Vec<DropdownField>,
    #[props(default = vec!["dueDate".to_string()])] date_fields: Vec<String>,
    #[props(default)] can_assign: bool,
    #[props(default)] busy: bool,
    on_save: EventHandler<Row>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editable = if editable_fields.is_empty() {
        default_editable(&row)
    } else {
        editable_fields
    };

    // Draft starts from the row, with ISO timestamps shown as DD/MM/YYYY.
    let mut draft = use_signal({
        let row = row.clone();
        let date_fields = date_fields.clone();
        move || {
            let mut draft = row.clone();
            for field in &date_fields {
                let text = draft.get_text(field);
                if let Some(dmy) = dates::iso_to_dmy(&text) {
                    draft.set(field, CellValue::text(dmy));
                }
            }
            draft
        }
    });
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let wants_operators = can_assign && editable.iter().any(|field| field == ASSIGN_FIELD);
    let client = use_context::<ApiClient>();
    let operators = use_resource(move || {
        let client = client.clone();
        async move {
            if wants_operators {
                client.operators(false).await.unwrap_or_default()
            } else {
                Vec::new()
            }
        }
    });

    let date_fields_for_save = date_fields.clone();
    let save = move |_| {
        let mut out = draft();
        let mut errors = HashMap::new();
        for field in &date_fields_for_save {
            if !out.get_text(field).is_empty() {
                match dates::dmy_to_iso(&out.get_text(field)) {
                    Ok(iso) => out.set(field, CellValue::text(iso)),
                    Err(err) => {
                        errors.insert(field.clone(), err.to_string());
                    }
                }
            }
        }
        if errors.is_empty() {
            field_errors.set(HashMap::new());
            on_save.call(out);
        } else {
            field_errors.set(errors);
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div { class: "p-6",
                h2 { class: "text-lg font-semibold mb-4", "Edit record" }
                div { class: "flex flex-col gap-4",
                    for key in row.keys().map(str::to_string).filter(|key| key != "id") {
                        {
                            let is_editable = editable.iter().any(|field| field == &key);
                            let dropdown = dropdown_fields.iter().find(|d| d.field == key).cloned();
                            let is_date = date_fields.iter().any(|field| field == &key);
                            let error = field_errors().get(&key).cloned();
                            let value = draft().get_text(&key);
                            let field_key = key.clone();
                            rsx! {
                                div {
                                    Label { html_for: "edit-{key}", {column_label(&key)} }
                                    if !is_editable {
                                        Input { id: "edit-{key}", value, disabled: true }
                                    } else if let Some(dropdown) = dropdown {
                                        select {
                                            id: "edit-{key}",
                                            class: "w-full p-2 border rounded bg-white",
                                            value: "{value}",
                                            onchange: {
                                                let field_key = field_key.clone();
                                                move |evt: FormEvent| {
                                                    draft.write().set(&field_key, CellValue::text(evt.value()));
                                                }
                                            },
                                            for option in dropdown.options {
                                                option { value: "{option.value}", "{option.label}" }
                                            }
                                        }
                                    } else if key == ASSIGN_FIELD && can_assign {
                                        OperatorPicker {
                                            selected: draft().get(ASSIGN_FIELD)
                                                .map(CellValue::list_values)
                                                .unwrap_or_default(),
                                            names: operators().unwrap_or_default()
                                                .into_iter()
                                                .map(|op| op.name)
                                                .collect::<Vec<_>>(),
                                            on_toggle: move |name: String| {
                                                let mut current = draft()
                                                    .get(ASSIGN_FIELD)
                                                    .map(CellValue::list_values)
                                                    .unwrap_or_default();
                                                if let Some(pos) = current.iter().position(|n| n == &name) {
                                                    current.remove(pos);
                                                } else {
                                                    current.push(name);
                                                }
                                                draft.write().set(ASSIGN_FIELD, CellValue::list(current));
                                            },
                                        }
                                    } else {
                                        Input {
                                            id: "edit-{key}",
                                            value,
                                            placeholder: if is_date { "DD/MM/YYYY".to_string() } else { String::new() },
                                            oninput: {
                                                let field_key = field_key.clone();
                                                move |evt: FormEvent| {
                                                    draft.write().set(&field_key, CellValue::text(evt.value()));
                                                }
                                            },
                                        }
                                        if let Some(error) = error {
                                            p { class: "text-sm text-red-600 mt-1", "{error}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "flex justify-end gap-2 mt-6",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        disabled: busy,
                        onclick: save,
                        if busy { "Saving..." } else { "Save changes" }
                    }
                }
            }
        }
    }
}

#[component]
fn OperatorPicker(
    selected: Vec<String>,
    names: Vec<String>,
    on_toggle: EventHandler<String>,
) -> Element {
    rsx! {
        if names.is_empty() {
            p { class: "text-sm text-gray-500", "Loading operators..." }
        } else {
            div { class: "flex flex-wrap gap-2",
                for name in names {
                    {
                        let is_selected = selected.iter().any(|n| n == &name);
                        let classes = if is_selected {
                            "px-3 py-1 rounded-full text-sm bg-[#1B3A6A] text-white cursor-pointer"
                        } else {
                            "px-3 py-1 rounded-full text-sm bg-gray-100 text-gray-700 hover:bg-gray-200 cursor-pointer"
                        };
                        rsx! {
                            button {
                                r#type: "button",
                                class: "{classes}",
                                onclick: move |_| on_toggle.call(name.clone()),
                                "{name}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_editable_excludes_identity_and_text_body() {
        let row = Row::new("7")
            .with("title", CellValue::text("Ship it"))
            .with("description", CellValue::text("..."))
            .with("priority", CellValue::text("High"))
            .with("dueDate", CellValue::text("2025-07-23T00:00:00.000Z"));
        let editable = default_editable(&row);
        assert_eq!(editable, vec!["priority", "dueDate"]);
    }
}
