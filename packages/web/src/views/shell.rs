//! Shared dashboard chrome: top bar with navigation, user identity, and
//! sign-out.

use api::{ApiClient, Role};
use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

fn nav_links(role: Role) -> Vec<(&'static str, Route)> {
    match role {
        Role::Admin => vec![
            ("Overview", Route::AdminOverview {}),
            ("Default Tasks", Route::AdminDefaultTasks {}),
            ("Daily Tasks", Route::AdminDailyTasks {}),
            ("New Tasks", Route::AdminNewTasks {}),
            ("Help", Route::AdminHelp {}),
        ],
        Role::Operation => vec![
            ("Overview", Route::OperationOverview {}),
            ("Daily Tasks", Route::OperationDailyTasks {}),
            ("New Tasks", Route::OperationNewTasks {}),
            ("Help", Route::OperationHelp {}),
        ],
    }
}

#[component]
pub fn DashboardShell(role: Role, title: String, children: Element) -> Element {
    let auth = use_auth();
    let client = use_context::<ApiClient>();
    let nav = use_navigator();
    let user_name = auth
        .state
        .read()
        .user
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "min-h-screen bg-gray-100",
            header { class: "bg-[#1B3A6A] text-white",
                div { class: "max-w-7xl mx-auto px-4 py-3 flex items-center justify-between",
                    div { class: "flex items-center gap-6",
                        span { class: "font-semibold text-lg", "Taskboard" }
                        nav { class: "flex gap-4",
                            for (label, route) in nav_links(role) {
                                Link {
                                    to: route,
                                    class: "text-sm text-gray-200 hover:text-white",
                                    {label}
                                }
                            }
                        }
                    }
                    div { class: "flex items-center gap-4",
                        span { class: "text-sm text-gray-200", "{user_name}" }
                        button {
                            class: "text-sm px-3 py-1.5 rounded bg-white/10 hover:bg-white/20 cursor-pointer",
                            onclick: move |_| {
                                let client = client.clone();
                                let nav = nav;
                                spawn(async move {
                                    auth.logout(client).await;
                                    nav.replace(Route::Landing {});
                                });
                            },
                            "Sign out"
                        }
                    }
                }
            }
            main { class: "max-w-7xl mx-auto px-4 py-6",
                h1 { class: "text-2xl font-semibold text-gray-800 mb-6", "{title}" }
                {children}
            }
        }
    }
}
