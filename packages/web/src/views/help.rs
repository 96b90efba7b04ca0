//! Help & Support pages: contact cards plus a role-specific FAQ list.

use api::Role;
use dioxus::prelude::*;

use crate::views::{DashboardShell, Protected};

struct ContactCard {
    title: &'static str,
    description: &'static str,
    action: &'static str,
}

struct Faq {
    question: &'static str,
    answer: &'static str,
}

const CONTACT_CARDS: &[ContactCard] = &[
    ContactCard {
        title: "Phone Support",
        description: "Call us during business hours (9 AM - 6 PM)",
        action: "Call Now",
    },
    ContactCard {
        title: "Email Support",
        description: "Send us your queries via email",
        action: "Send Email",
    },
];

fn faqs(role: Role) -> &'static [Faq] {
    match role {
        Role::Admin => &[
            Faq {
                question: "How do I use the Overview section?",
                answer: "The Overview section provides a comprehensive dashboard showing \
                         system-wide analytics, employee performance metrics, and key \
                         statistics. You can view total tasks, completion rates, and get \
                         real-time insight into task management status.",
            },
            Faq {
                question: "How do I create and manage Default Tasks?",
                answer: "Navigate to the 'Default Tasks' tab to create reusable task \
                         templates with a title and description. These templates serve as \
                         standardized tasks for recurring activities.",
            },
            Faq {
                question: "How do I assign Daily Tasks to employees?",
                answer: "Use the 'Daily Tasks' tab to assign tasks for the day. Select \
                         operators, set a priority and status, and the table tracks \
                         completion in real time.",
            },
            Faq {
                question: "How do I create New Tasks for employees?",
                answer: "The 'New Tasks' tab is for custom, one-time tasks outside your \
                         default templates. Fill out the form with a title, description, \
                         assignees, due date, priority, and status; the task is assigned \
                         and tracked immediately.",
            },
            Faq {
                question: "What information is available in the Help section?",
                answer: "The Help section contains FAQs for all admin screens, with \
                         step-by-step guidance for each tab and contact information for \
                         technical support.",
            },
            Faq {
                question: "How can I monitor employee performance?",
                answer: "The Overview shows aggregate metrics, including per-assignee \
                         workload, while Daily Tasks and New Tasks show assignment \
                         patterns and status per task. Use these to balance assignments.",
            },
        ],
        Role::Operation => &[
            Faq {
                question: "How can I view my assigned tasks?",
                answer: "Navigate to the 'Daily Tasks' or 'New Tasks' section from the \
                         navigation bar. You'll see a table listing your tasks with \
                         title, description, priority, due date, and who assigned them.",
            },
            Faq {
                question: "Can I update the status of a task?",
                answer: "Yes. Use the dropdown in the status column to switch a task \
                         between 'Pending', 'In Progress', and 'Completed' directly from \
                         the table.",
            },
            Faq {
                question: "What's the difference between Daily Tasks and New Tasks?",
                answer: "'Daily Tasks' are your ongoing tasks that need regular \
                         attention, while 'New Tasks' are recently assigned items that \
                         haven't been addressed yet.",
            },
            Faq {
                question: "What information is shown for each task?",
                answer: "Each task includes Title, Description, Priority (Low, Medium, \
                         High), Due Date, Assigned By, and Current Status.",
            },
            Faq {
                question: "Where can I see a summary of my progress?",
                answer: "Go to the 'Overview' section for an analytical summary: \
                         completed versus pending tasks, priority breakdowns, and your \
                         completion rate.",
            },
            Faq {
                question: "How can I get help if I'm stuck?",
                answer: "This page lists the most common questions; for anything else, \
                         use the contact options above to reach support.",
            },
        ],
    }
}

#[component]
pub fn AdminHelp() -> Element {
    rsx! {
        Protected { role: Role::Admin,
            DashboardShell { role: Role::Admin, title: "Help & Support",
                HelpSection { role: Role::Admin }
            }
        }
    }
}

#[component]
pub fn OperationHelp() -> Element {
    rsx! {
        Protected { role: Role::Operation,
            DashboardShell { role: Role::Operation, title: "Help & Support",
                HelpSection { role: Role::Operation }
            }
        }
    }
}

#[component]
fn HelpSection(role: Role) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 sm:grid-cols-2 gap-4 mb-8",
            for card in CONTACT_CARDS {
                div { class: "bg-white rounded-lg shadow p-6",
                    h3 { class: "font-medium text-gray-900 mb-1", {card.title} }
                    p { class: "text-sm text-gray-500 mb-3", {card.description} }
                    button {
                        class: "text-sm px-3 py-1.5 rounded bg-[#1B3A6A] text-white cursor-pointer",
                        {card.action}
                    }
                }
            }
        }
        section { class: "bg-white rounded-lg shadow divide-y divide-gray-100",
            h2 { class: "text-lg font-medium text-gray-700 px-6 py-4",
                "Frequently asked questions"
            }
            for faq in faqs(role) {
                details { class: "px-6 py-4",
                    summary { class: "font-medium text-gray-900 cursor-pointer",
                        {faq.question}
                    }
                    p { class: "text-sm text-gray-600 mt-2", {faq.answer} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_role_gets_its_own_faq_list() {
        let admin = faqs(Role::Admin);
        let operation = faqs(Role::Operation);
        assert!(!admin.is_empty());
        assert!(!operation.is_empty());
        assert!(admin
            .iter()
            .any(|faq| faq.question.contains("Default Tasks")));
        assert!(operation
            .iter()
            .any(|faq| faq.question.contains("my assigned tasks")));
    }
}
