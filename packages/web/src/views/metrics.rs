//! Metric panels for the overview pages.

use dioxus::prelude::*;

#[component]
pub fn MetricCard(label: String, value: String, accent: Option<String>) -> Element {
    let accent = accent.unwrap_or_else(|| "text-gray-900".to_string());
    rsx! {
        div { class: "bg-white rounded-lg shadow p-6",
            p { class: "text-sm text-gray-500 mb-1", "{label}" }
            p { class: "text-3xl font-semibold {accent}", "{value}" }
        }
    }
}

/// A labeled group of metric cards.
#[component]
pub fn MetricSection(title: String, children: Element) -> Element {
    rsx! {
        section { class: "mb-8",
            h2 { class: "text-lg font-medium text-gray-700 mb-3", "{title}" }
            div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4",
                {children}
            }
        }
    }
}
