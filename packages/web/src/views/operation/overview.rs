//! Operator overview: metrics scoped to the signed-in operator's tasks.

use api::{ApiClient, Role};
use dioxus::prelude::*;
use ui::{ErrorBanner, LoadingIndicator};

use crate::views::metrics::{MetricCard, MetricSection};
use crate::views::{DashboardShell, Protected};

#[component]
pub fn OperationOverview() -> Element {
    rsx! {
        Protected { role: Role::Operation,
            DashboardShell { role: Role::Operation, title: "Overview",
                OperatorPanels {}
            }
        }
    }
}

#[component]
fn OperatorPanels() -> Element {
    let client = use_context::<ApiClient>();

    let metrics = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let priority = client.operator_priority_count(false).await?;
                let status = client.operator_status_count(false).await?;
                let completion = client.operator_completion_rate(false).await?;
                Ok::<_, api::ApiError>((priority, status, completion))
            }
        }
    });

    let mut error_dismissed = use_signal(|| false);

    let retry = {
        let client = client.clone();
        let mut metrics = metrics;
        move |_| {
            error_dismissed.set(false);
            client.invalidate_operator_caches();
            metrics.restart();
        }
    };

    match &*metrics.read_unchecked() {
        None => rsx! {
            LoadingIndicator {}
        },
        Some(Err(err)) => rsx! {
            if !error_dismissed() {
                ErrorBanner {
                    message: "Could not load your overview: {err}",
                    on_retry: retry,
                    on_dismiss: move |_| error_dismissed.set(true),
                }
            }
        },
        Some(Ok((priority, status, completion))) => rsx! {
            MetricSection { title: "Completion",
                MetricCard {
                    label: "Completion rate",
                    value: format!("{:.0}%", completion.completion_rate),
                    accent: "text-green-600",
                }
                MetricCard { label: "Completed", value: "{completion.completed_tasks}" }
                MetricCard { label: "Total assigned", value: "{completion.total_tasks}" }
            }
            MetricSection { title: "Your daily tasks by status",
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
            MetricSection { title: "Your tasks by priority",
                MetricCard { label: "Low", value: "{priority.low}", accent: "text-green-600" }
                MetricCard {
                    label: "Medium",
                    value: "{priority.medium}",
                    accent: "text-yellow-600",
                }
                MetricCard { label: "High", value: "{priority.high}", accent: "text-red-600" }
            }
        },
    }
}
