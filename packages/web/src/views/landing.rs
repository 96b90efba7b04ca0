use dioxus::prelude::*;

use crate::Route;

/// Public landing page with the role chooser.
#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center bg-gray-100 px-4",
            h1 { class: "text-3xl font-bold text-gray-800 mb-2", "Taskboard" }
            p { class: "text-gray-600 mb-8", "Sign in to manage and track your team's tasks." }
            div { class: "flex flex-col sm:flex-row gap-4 w-full max-w-md",
                Link {
                    to: Route::AdminLogin {},
                    class: "flex-1 text-center px-6 py-3 bg-[#1B3A6A] text-white rounded-lg hover:bg-[#486AA0] transition-colors",
                    "Admin sign in"
                }
                Link {
                    to: Route::OperationLogin {},
                    class: "flex-1 text-center px-6 py-3 border border-[#1B3A6A] text-[#1B3A6A] rounded-lg hover:bg-gray-50 transition-colors",
                    "Operations sign in"
                }
            }
        }
    }
}
