//! Admin management of default (template) tasks.

use api::{ApiClient, CreateDefaultTask, Role, UpdateDefaultTask};
use dioxus::prelude::*;
use ui::{
    use_auth, use_notices, Button, ErrorBanner, Input, Label, LoadingIndicator, ModalOverlay,
    Row, SimpleTable,
};

use crate::views::support::{default_task_row, report_failure};
use crate::views::{DashboardShell, Protected};

#[component]
pub fn AdminDefaultTasks() -> Element {
    rsx! {
        Protected { role: Role::Admin,
            DashboardShell { role: Role::Admin, title: "Default Tasks",
                DefaultTasksSection {}
            }
        }
    }
}

#[component]
fn DefaultTasksSection() -> Element {
    let client = use_context::<ApiClient>();
    let notices = use_notices();
    let auth = use_auth();
    let mut show_add = use_signal(|| false);

    let mut tasks = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.default_tasks(false).await }
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
            Some(Ok(tasks)) => tasks.iter().map(default_task_row).collect::<Vec<_>>(),
            _ => Vec::new(),
        };
        rows.set(next);
    });

    let on_edit = {
        let client = client.clone();
        move |row: Row| {
            let client = client.clone();
            spawn(async move {
                let update = UpdateDefaultTask {
                    title: row.get_text("title"),
                    description: row.get_text("description"),
                };
                match client.update_default_task(&row.id, update).await {
                    Ok(()) => tasks.restart(),
                    Err(err) => {
                        client.invalidate_default_tasks();
                        tasks.restart();
                        report_failure(notices, auth, &client, "default-update", "Update", err);
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
                match client.delete_default_task(&id).await {
                    Ok(()) => tasks.restart(),
                    Err(err) => {
                        client.invalidate_default_tasks();
                        tasks.restart();
                        report_failure(notices, auth, &client, "default-delete", "Delete", err);
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "flex justify-end mb-4",
            Button { onclick: move |_| show_add.set(true), "Add default task" }
        }
        match &*tasks.read_unchecked() {
            None => rsx! {
                LoadingIndicator {}
            },
            Some(Err(err)) => rsx! {
                if !error_dismissed() {
                    ErrorBanner {
                        message: "Could not load default tasks: {err}",
                        on_retry: move |_| tasks.restart(),
                        on_dismiss: move |_| error_dismissed.set(true),
                    }
                }
            },
            Some(Ok(_)) => rsx! {
                SimpleTable {
                    rows,
                    editable_fields: vec!["title".to_string(), "description".to_string()],
                    on_edit,
                    on_delete,
                }
            },
        }
        if show_add() {
            AddDefaultTaskModal {
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
fn AddDefaultTaskModal(on_created: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let client = use_context::<ApiClient>();
    let notices = use_notices();
    let auth = use_auth();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        if title.read().trim().is_empty() {
            error.set(Some("Title is required.".to_string()));
            return;
        }
        busy.set(true);
        let client = client.clone();
        let admin_id = auth.state.read().user.as_ref().map(|user| user.id.clone());
        spawn(async move {
            let task = CreateDefaultTask {
                title: title.read().trim().to_string(),
                description: description.read().trim().to_string(),
                admin_id,
            };
            match client.create_default_task(task).await {
                Ok(()) => on_created.call(()),
                Err(err) => {
                    report_failure(notices, auth, &client, "default-create", "Create", err);
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div { class: "p-6",
                h2 { class: "text-lg font-semibold mb-4", "Add default task" }
                if let Some(message) = error() {
                    p { class: "text-sm text-red-600 mb-3", "{message}" }
                }
                div { class: "mb-4",
                    Label { html_for: "default-title", "Title" }
                    Input {
                        id: "default-title",
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                }
                div { class: "mb-6",
                    Label { html_for: "default-description", "Description" }
                    Input {
                        id: "default-description",
                        value: description(),
                        oninput: move |evt: FormEvent| description.set(evt.value()),
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
