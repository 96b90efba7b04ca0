//! Operator view of assigned one-off tasks, status-only mutation.

use api::{ApiClient, Role, Status};
use dioxus::prelude::*;
use ui::{use_auth, use_notices, ErrorBanner, FieldChange, LoadingIndicator, SimpleTable};

use crate::views::support::{new_task_row, report_failure, status_dropdown};
use crate::views::{DashboardShell, Protected};

#[component]
pub fn OperationNewTasks() -> Element {
    rsx! {
        Protected { role: Role::Operation,
            DashboardShell { role: Role::Operation, title: "New Tasks",
                OperatorNewTasksSection {}
            }
        }
    }
}

#[component]
fn OperatorNewTasksSection() -> Element {
    let client = use_context::<ApiClient>();
    let notices = use_notices();
    let auth = use_auth();

    let mut tasks = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.operator_new_tasks(false).await }
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
            Some(Ok(tasks)) => tasks.iter().map(new_task_row).collect::<Vec<_>>(),
            _ => Vec::new(),
        };
        rows.set(next);
    });

    let on_field_change = {
        let client = client.clone();
        move |change: FieldChange| {
            let Some(status) = Status::from_label(&change.value) else {
                return;
            };
            let client = client.clone();
            spawn(async move {
                match client.operator_update_new_status(&change.id, status).await {
                    Ok(()) => tasks.restart(),
                    Err(err) => {
                        client.invalidate_operator_caches();
                        tasks.restart();
                        report_failure(notices, auth, &client, "op-new-status", "Status update", err);
                    }
                }
            });
        }
    };

    rsx! {
        match &*tasks.read_unchecked() {
            None => rsx! {
                LoadingIndicator {}
            },
            Some(Err(err)) => rsx! {
                if !error_dismissed() {
                    ErrorBanner {
                        message: "Could not load your tasks: {err}",
                        on_retry: move |_| tasks.restart(),
                        on_dismiss: move |_| error_dismissed.set(true),
                    }
                }
            },
            Some(Ok(_)) => rsx! {
                SimpleTable {
                    rows,
                    dropdown_fields: vec![status_dropdown()],
                    show_actions: false,
                    on_field_change,
                }
            },
        }
    }
}
