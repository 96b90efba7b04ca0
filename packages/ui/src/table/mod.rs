//! Searchable, paginated data table with inline dropdown cells and
//! edit/delete modals.
//!
//! The table is schema-less: columns come from the first row's fields,
//! so a view hands it plain [`Row`]s and gets the whole CRUD surface.
//! Mutations are optimistic: the local copy updates first, then the
//! parent callback runs the request and refreshes on its own schedule.

mod row;
mod state;

pub use row::{badge_color, column_label, derive_columns, CellValue, Column, Row};
pub use state::TableState;

use std::collections::HashSet;

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input};
use crate::confirm_modal::ConfirmDeleteModal;
use crate::dates;
use crate::edit_modal::EditModal;

/// One option in a dropdown cell or dropdown edit field.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A field rendered as an inline dropdown in table cells (and as a select
/// in the edit modal).
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownField {
    pub field: String,
    pub options: Vec<DropdownOption>,
}

/// A single-field change emitted from an inline dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub id: String,
    pub field: String,
    pub value: String,
}

#[component]
pub fn SimpleTable(
    rows: ReadOnlySignal<Vec<Row>>,
    #[props(default = 5)] page_size: usize,
    /// Restrict search to these fields; empty means search everything.
    #[props(default)]
    search_fields: Vec<String>,
    /// Fields whose text values render as colored badge pills.
    #[props(default = vec!["status".to_string(), "priority".to_string()])]
    badge_fields: Vec<String>,
    #[props(default)] dropdown_fields: Vec<DropdownField>,
    #[props(default = vec!["dueDate".to_string()])] date_fields: Vec<String>,
    #[props(default = true)] show_actions: bool,
    #[props(default)] can_assign: bool,
    /// Fields the edit modal lets the user change; empty means its default
    /// rule (everything except id, title, and description).
    #[props(default)]
    editable_fields: Vec<String>,
    #[props(default)] on_edit: EventHandler<Row>,
    #[props(default)] on_delete: EventHandler<String>,
    #[props(default)] on_field_change: EventHandler<FieldChange>,
) -> Element {
    let mut state = use_signal({
        let search_fields = search_fields.clone();
        move || TableState::new(page_size, search_fields)
    });
    // Keep the local copy in step with the parent's rows.
    use_effect(move || {
        let next = rows();
        state.write().set_rows(next);
    });

    let open_dropdowns = use_signal(HashSet::<String>::new);
    let mut edit_target = use_signal(|| Option::<Row>::None);
    let mut delete_target = use_signal(|| Option::<Row>::None);

    let columns = state.read().columns();
    let page_rows = state.read().page_rows();
    let total_pages = state.read().total_pages();
    let page = state.read().page();
    let search = state.read().search().to_string();
    let has_prev = state.read().has_prev();
    let has_next = state.read().has_next();

    rsx! {
        div { class: "bg-white rounded-lg shadow",
            div { class: "p-4 border-b",
                Input {
                    placeholder: "Search...",
                    value: search,
                    oninput: move |evt: FormEvent| state.write().set_search(evt.value()),
                }
            }
            div { class: "overflow-x-auto",
                table { class: "min-w-full divide-y divide-gray-200",
                    thead { class: "bg-gray-50",
                        tr {
                            for column in columns.iter() {
                                th {
                                    class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
                                    "{column.label}"
                                }
                            }
                            if show_actions {
                                th { class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
                                    "Actions"
                                }
                            }
                        }
                    }
                    tbody { class: "divide-y divide-gray-200",
                        if page_rows.is_empty() {
                            tr {
                                td {
                                    colspan: (columns.len() + usize::from(show_actions)) as i64,
                                    class: "px-4 py-8 text-center text-gray-500",
                                    "No records found."
                                }
                            }
                        }
                        for table_row in page_rows {
                            tr { key: "{table_row.id}", class: "hover:bg-gray-50",
                                for column in columns.iter() {
                                    {
                                        let cell_row = table_row.clone();
                                        let dropdown = dropdown_fields
                                            .iter()
                                            .find(|d| d.field == column.key)
                                            .cloned();
                                        rsx! {
                                            td { class: "px-4 py-3 text-sm",
                                                Cell {
                                                    row: cell_row,
                                                    field: column.key.clone(),
                                                    dropdown,
                                                    is_badge: badge_fields.contains(&column.key),
                                                    is_date: date_fields.contains(&column.key),
                                                    open_dropdowns,
                                                    on_change: move |change: FieldChange| {
                                                        state.write().update_field(
                                                            &change.id,
                                                            &change.field,
                                                            CellValue::text(change.value.clone()),
                                                        );
                                                        on_field_change.call(change);
                                                    },
                                                }
                                            }
                                        }
                                    }
                                }
                                if show_actions {
                                    td { class: "px-4 py-3 text-sm",
                                        div { class: "flex gap-2",
                                            {
                                                let edit_row = table_row.clone();
                                                let delete_row = table_row.clone();
                                                rsx! {
                                                    button {
                                                        class: "text-blue-600 hover:text-blue-800 cursor-pointer",
                                                        onclick: move |_| edit_target.set(Some(edit_row.clone())),
                                                        "Edit"
                                                    }
                                                    button {
                                                        class: "text-red-600 hover:text-red-800 cursor-pointer",
                                                        onclick: move |_| delete_target.set(Some(delete_row.clone())),
                                                        "Delete"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "flex items-center justify-between p-4 border-t",
                span { class: "text-sm text-gray-600", "Page {page} of {total_pages}" }
                div { class: "flex gap-2",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: !has_prev,
                        onclick: move |_| {
                            let current = state.read().page();
                            state.write().set_page(current.saturating_sub(1));
                        },
                        "Previous"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: !has_next,
                        onclick: move |_| {
                            let current = state.read().page();
                            state.write().set_page(current + 1);
                        },
                        "Next"
                    }
                }
            }
        }

        if let Some(editing) = edit_target() {
            EditModal {
                row: editing,
                editable_fields: editable_fields.clone(),
                dropdown_fields: dropdown_fields.clone(),
                date_fields: date_fields.clone(),
                can_assign,
                on_save: move |edited: Row| {
                    state.write().update_row(edited.clone());
                    edit_target.set(None);
                    on_edit.call(edited);
                },
                on_cancel: move |_| edit_target.set(None),
            }
        }
        if let Some(deleting) = delete_target() {
            ConfirmDeleteModal {
                row: deleting,
                on_confirm: move |id: String| {
                    state.write().remove(&id);
                    delete_target.set(None);
                    on_delete.call(id);
                },
                on_cancel: move |_| delete_target.set(None),
            }
        }
    }
}

/// One table cell. Dropdown fields render as a pill button that opens an
/// option list; list values render as pills; date fields render short.
#[component]
fn Cell(
    row: Row,
    field: String,
    #[props(!optional)] dropdown: Option<DropdownField>,
    #[props(default)] is_badge: bool,
    #[props(default)] is_date: bool,
    open_dropdowns: Signal<HashSet<String>>,
    on_change: EventHandler<FieldChange>,
) -> Element {
    let mut open_dropdowns = open_dropdowns;
    let value = row.get_text(&field);
    let dropdown_key = format!("{}-{}", row.id, field);

    if let Some(dropdown) = dropdown {
        let is_open = open_dropdowns.read().contains(&dropdown_key);
        let toggle_key = dropdown_key.clone();
        let close_key = dropdown_key.clone();
        return rsx! {
            div { class: "relative",
                button {
                    class: "px-2 py-1 rounded-full text-xs font-medium cursor-pointer {badge_color(&value)}",
                    onclick: move |_| {
                        let mut open = open_dropdowns.write();
                        if !open.remove(&toggle_key) {
                            open.insert(toggle_key.clone());
                        }
                    },
                    "{value} ▾"
                }
                if is_open {
                    div {
                        class: "absolute mt-1 bg-white border rounded shadow-lg",
                        style: "z-index: 1000",
                        for option in dropdown.options {
                            {
                                let row_id = row.id.clone();
                                let field = field.clone();
                                let close_key = close_key.clone();
                                let option_value = option.value.clone();
                                rsx! {
                                    button {
                                        class: "block w-full text-left px-3 py-1.5 text-sm hover:bg-gray-100 cursor-pointer",
                                        onclick: move |_| {
                                            open_dropdowns.write().remove(&close_key);
                                            on_change.call(FieldChange {
                                                id: row_id.clone(),
                                                field: field.clone(),
                                                value: option_value.clone(),
                                            });
                                        },
                                        "{option.label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        };
    }

    match row.get(&field) {
        Some(CellValue::List(items)) if !items.is_empty() => rsx! {
            div { class: "flex flex-wrap gap-1",
                for item in items.clone() {
                    span { class: "px-2 py-0.5 rounded-full text-xs bg-gray-100 text-gray-700", "{item}" }
                }
            }
        },
        Some(CellValue::List(_)) => rsx! {
            span { class: "text-gray-400", "Unassigned" }
        },
        _ if is_badge => rsx! {
            span { class: "px-2 py-1 rounded-full text-xs font-medium {badge_color(&value)}", "{value}" }
        },
        _ if is_date => rsx! {
            span { "{dates::display_short_date(&value)}" }
        },
        _ => rsx! {
            span { "{value}" }
        },
    }
}
