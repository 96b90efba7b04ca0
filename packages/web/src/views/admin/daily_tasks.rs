//! Admin management of today's daily tasks, instantiated from default
//! task templates and assigned to operators.

use api::{ApiClient, CreateDailyTask, Priority, Role, Status, UpdateDailyTask};
use dioxus::prelude::*;
use ui::{
    use_auth, use_notices, Button, CellValue, ErrorBanner, Label, LoadingIndicator,
    ModalOverlay, Row, SimpleTable,
};

use crate::views::support::{
    daily_task_row, operator_ids_for_names, priority_dropdown, priority_options, report_failure,
    row_priority, row_status, status_dropdown, status_options,
};
use crate::views::{DashboardShell, Protected};

#[component]
pub fn AdminDailyTasks() -> Element {
    rsx! {
        Protected { role: Role::Admin,
            DashboardShell { role: Role::Admin, title: "Daily Tasks",
                DailyTasksSection {}
            }
        }
    }
}

#[component]
fn DailyTasksSection() -> Element {
    let client = use_context::<ApiClient>();
    let notices = use_notices();
    let auth = use_auth();
    let mut show_add = use_signal(|| false);

    let mut tasks = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.daily_tasks(false).await }
        }
    });
    let operators = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.operators(false).await.unwrap_or_default() }
        }
    });

    // A plain signal rather than a memo: after a rejected mutation the
    // refetch can return rows identical to the last good set, and the
    // table must still be told to drop its optimistic edit.
    let mut rows = use_signal(Vec::new);
    let mut error_dismissed = use_signal(|| false);
    use_effect(move || {
        // Each load outcome, success or failure, clears a prior dismissal.
        error_dismissed.set(false);
        let next = match &*tasks.read() {
            Some(Ok(tasks)) => tasks.iter().map(daily_task_row).collect::<Vec<_>>(),
            _ => Vec::new(),
        };
        rows.set(next);
    });

    // A typed task looked up by id, so partial edits keep the rest intact.
    let current_task = move |id: &str| match &*tasks.read_unchecked() {
        Some(Ok(tasks)) => tasks.iter().find(|task| task.id == id).cloned(),
        _ => None,
    };

    let on_edit = {
        let client = client.clone();
        move |row: Row| {
            let Some(task) = current_task(&row.id) else {
                return;
            };
            let known_operators = operators
                .read_unchecked()
                .as_ref()
                .cloned()
                .unwrap_or_default();
            let assigned = row
                .get("assignedTo")
                .map(CellValue::list_values)
                .unwrap_or_default();
            let mut operator_ids = operator_ids_for_names(&known_operators, &assigned);
            if operator_ids.is_empty() {
                operator_ids = task.operator_ids.clone();
            }
            let update = UpdateDailyTask {
                priority: row_priority(&row, task.priority),
                status: row_status(&row, task.status),
                operator_ids,
            };
            let client = client.clone();
            spawn(async move {
                match client.update_daily_task(&row.id, update).await {
                    Ok(()) => tasks.restart(),
                    Err(err) => {
                        client.invalidate_daily_tasks();
                        tasks.restart();
                        report_failure(notices, auth, &client, "daily-update", "Update", err);
                    }
                }
            });
        }
    };

    // Inline dropdown change: one field over the task's current values.
    let on_field_change = {
        let client = client.clone();
        move |change: ui::FieldChange| {
            let Some(task) = current_task(&change.id) else {
                return;
            };
            let update = UpdateDailyTask {
                priority: if change.field == "priority" {
                    Priority::from_label(&change.value).unwrap_or(task.priority)
                } else {
                    task.priority
                },
                status: if change.field == "status" {
                    Status::from_label(&change.value).unwrap_or(task.status)
                } else {
                    task.status
                },
                operator_ids: task.operator_ids.clone(),
            };
            let client = client.clone();
            spawn(async move {
                match client.update_daily_task(&change.id, update).await {
                    Ok(()) => tasks.restart(),
                    Err(err) => {
                        client.invalidate_daily_tasks();
                        tasks.restart();
                        report_failure(notices, auth, &client, "daily-update", "Update", err);
                    }
                }
            });
        }
    };

    let on_delete = {
        let client = client.clone();
        move |id: String| {
            let client = client.clone();
            spawn(async move {
                match client.delete_daily_task(&id).await {
                    Ok(()) => tasks.restart(),
                    Err(err) => {
                        client.invalidate_daily_tasks();
                        tasks.restart();
                        report_failure(notices, auth, &client, "daily-delete", "Delete", err);
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "flex justify-end mb-4",
            Button { onclick: move |_| show_add.set(true), "Add daily task" }
        }
        match &*tasks.read_unchecked() {
            None => rsx! {
                LoadingIndicator {}
            },
            Some(Err(err)) => rsx! {
                if !error_dismissed() {
                    ErrorBanner {
                        message: "Could not load daily tasks: {err}",
                        on_retry: move |_| tasks.restart(),
                        on_dismiss: move |_| error_dismissed.set(true),
                    }
                }
            },
            Some(Ok(_)) => rsx! {
                SimpleTable {
                    rows,
                    dropdown_fields: vec![priority_dropdown(), status_dropdown()],
                    can_assign: true,
                    on_edit,
                    on_delete,
                    on_field_change,
                }
            },
        }
        if show_add() {
            AddDailyTaskModal {
                on_created: move |_| {
                    show_add.set(false);
                    tasks.restart();
                },
                on_cancel: move |_| show_add.set(false),
            }
        }
    }
}

#[component]
fn AddDailyTaskModal(on_created: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let client = use_context::<ApiClient>();
    let notices = use_notices();
    let auth = use_auth();

    let defaults = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.default_tasks(false).await.unwrap_or_default() }
        }
    });
    let operators = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.operators(false).await.unwrap_or_default() }
        }
    });

    let mut default_task_id = use_signal(String::new);
    let mut selected_operators = use_signal(Vec::<String>::new);
    let mut priority = use_signal(|| Priority::Medium);
    let mut status = use_signal(|| Status::Pending);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        if default_task_id.read().is_empty() {
            error.set(Some("Pick a default task.".to_string()));
            return;
        }
        if selected_operators.read().is_empty() {
            error.set(Some("Assign at least one operator.".to_string()));
            return;
        }
        busy.set(true);
        let client = client.clone();
        spawn(async move {
            let task = CreateDailyTask {
                default_task_id: default_task_id(),
                operator_ids: selected_operators(),
                priority: priority(),
                status: status(),
            };
            match client.create_daily_task(task).await {
                Ok(()) => on_created.call(()),
                Err(err) => report_failure(notices, auth, &client, "daily-create", "Create", err),
            }
            busy.set(false);
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div { class: "p-6",
                h2 { class: "text-lg font-semibold mb-4", "Add daily task" }
                if let Some(message) = error() {
                    p { class: "text-sm text-red-600 mb-3", "{message}" }
                }
                div { class: "mb-4",
                    Label { html_for: "daily-template", "Default task" }
                    select {
                        id: "daily-template",
                        class: "w-full p-2 border rounded bg-white",
                        onchange: move |evt: FormEvent| default_task_id.set(evt.value()),
                        option { value: "", "Select a template..." }
                        for template in defaults().unwrap_or_default() {
                            option { value: "{template.id}", "{template.title}" }
                        }
                    }
                }
                div { class: "mb-4",
                    Label { "Assign to" }
                    match operators().as_deref() {
                        None | Some([]) => rsx! {
                            p { class: "text-sm text-gray-500", "Loading operators..." }
                        },
                        Some(operators) => rsx! {
                            div { class: "flex flex-wrap gap-2",
                                for operator in operators.iter().cloned() {
                                    {
                                        let selected = selected_operators.read().contains(&operator.id);
                                        let classes = if selected {
                                            "px-3 py-1 rounded-full text-sm bg-[#1B3A6A] text-white cursor-pointer"
                                        } else {
                                            "px-3 py-1 rounded-full text-sm bg-gray-100 text-gray-700 hover:bg-gray-200 cursor-pointer"
                                        };
                                        rsx! {
                                            button {
                                                r#type: "button",
                                                class: "{classes}",
                                                onclick: move |_| {
                                                    let mut current = selected_operators.write();
                                                    if let Some(pos) =
                                                        current.iter().position(|id| id == &operator.id)
                                                    {
                                                        current.remove(pos);
                                                    } else {
                                                        current.push(operator.id.clone());
                                                    }
                                                },
                                                "{operator.name}"
                                            }
                                        }
                                    }
                                }
                            }
                        },
                    }
                }
                div { class: "mb-4",
                    Label { html_for: "daily-priority", "Priority" }
                    select {
                        id: "daily-priority",
                        class: "w-full p-2 border rounded bg-white",
                        onchange: move |evt: FormEvent| {
                            if let Some(p) = Priority::from_label(&evt.value()) {
                                priority.set(p);
                            }
                        },
                        for option in priority_options() {
                            option {
                                value: "{option.value}",
                                selected: option.value == priority().label(),
                                "{option.label}"
                            }
                        }
                    }
                }
                div { class: "mb-6",
                    Label { html_for: "daily-status", "Status" }
                    select {
                        id: "daily-status",
                        class: "w-full p-2 border rounded bg-white",
                        onchange: move |evt: FormEvent| {
                            if let Some(s) = Status::from_label(&evt.value()) {
                                status.set(s);
                            }
                        },
                        for option in status_options() {
                            option {
                                value: "{option.value}",
                                selected: option.value == status().label(),
                                "{option.label}"
                            }
                        }
                    }
                }
                div { class: "flex justify-end gap-2",
                    Button {
                        variant: ui::ButtonVariant::Outline,
                        disabled: busy(),
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        disabled: busy(),
                        onclick: submit,
                        if busy() { "Creating..." } else { "Create" }
                    }
                }
            }
        }
    }
}
