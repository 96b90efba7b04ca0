//! Admin overview: organization-wide task metrics.

use api::{ApiClient, Role};
use dioxus::prelude::*;
use ui::{ErrorBanner, LoadingIndicator};

use crate::views::metrics::{MetricCard, MetricSection};
use crate::views::{DashboardShell, Protected};

#[component]
pub fn AdminOverview() -> Element {
    rsx! {
        Protected { role: Role::Admin,
            DashboardShell { role: Role::Admin, title: "Overview",
                OverviewPanels {}
            }
        }
    }
}

#[component]
fn OverviewPanels() -> Element {
    let client = use_context::<ApiClient>();

    let totals = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let total = client.total_tasks(false).await?;
                let status = client.status_count(false).await?;
                let priority = client.priority_count(false).await?;
                let workload = client.assignee_workload(false).await?;
                Ok::<_, api::ApiError>((total, status, priority, workload))
            }
        }
    });

    let mut error_dismissed = use_signal(|| false);

    let retry = {
        let client = client.clone();
        let mut totals = totals;
        move |_| {
            error_dismissed.set(false);
            client.invalidate_overview();
            totals.restart();
        }
    };

    match &*totals.read_unchecked() {
        None => rsx! {
            LoadingIndicator {}
        },
        Some(Err(err)) => rsx! {
            if !error_dismissed() {
                ErrorBanner {
                    message: "Could not load the overview: {err}",
                    on_retry: retry,
                    on_dismiss: move |_| error_dismissed.set(true),
                }
            }
        },
        Some(Ok((total, status, priority, workload))) => rsx! {
            MetricSection { title: "Totals",
                MetricCard { label: "Total tasks", value: "{total}" }
            }
            MetricSection { title: "Daily tasks by status",
                MetricCard {
                    label: "Pending",
                    value: "{status.pending}",
                    accent: "text-yellow-600",
                }
                MetricCard {
                    label: "In Progress",
                    value: "{status.in_progress}",
                    accent: "text-blue-600",
                }
                MetricCard {
                    label: "Completed",
                    value: "{status.completed}",
                    accent: "text-green-600",
                }
            }
            MetricSection { title: "Tasks by priority",
                MetricCard { label: "Low", value: "{priority.low}", accent: "text-green-600" }
                MetricCard {
                    label: "Medium",
                    value: "{priority.medium}",
                    accent: "text-yellow-600",
                }
                MetricCard { label: "High", value: "{priority.high}", accent: "text-red-600" }
            }
            section { class: "mb-8",
                h2 { class: "text-lg font-medium text-gray-700 mb-3", "Workload by assignee" }
                if workload.is_empty() {
                    p { class: "text-gray-500", "No assignments yet." }
                } else {
                    div { class: "bg-white rounded-lg shadow divide-y",
                        for entry in workload.iter() {
                            div { class: "flex justify-between px-6 py-3",
                                span { class: "text-gray-800", "{entry.name}" }
                                span { class: "text-gray-500", "{entry.task_count} tasks" }
                            }
                        }
                    }
                }
            }
        },
    }
}
