use dioxus::prelude::*;
use ui::use_auth;

use crate::route_access::home_route;
use crate::Route;

/// Landing page for signed-in users who opened a screen their role does
/// not permit.
#[component]
pub fn Unauthorized() -> Element {
    let auth = use_auth();
    let home = auth.state.read().user.as_ref().map(|user| home_route(user.role));

    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center bg-gray-100 px-4",
            h1 { class: "text-3xl font-bold text-gray-800 mb-2", "Access denied" }
            p { class: "text-gray-600 mb-6",
                "Your account does not have permission to view that page."
            }
            if let Some(home) = home {
                Link {
                    to: home,
                    class: "px-6 py-3 bg-[#1B3A6A] text-white rounded-lg hover:bg-[#486AA0]",
                    "Back to your dashboard"
                }
            } else {
                Link {
                    to: Route::Landing {},
                    class: "px-6 py-3 bg-[#1B3A6A] text-white rounded-lg hover:bg-[#486AA0]",
                    "Back to sign in"
                }
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center bg-gray-100 px-4",
            h1 { class: "text-3xl font-bold text-gray-800 mb-2", "Page not found" }
            p { class: "text-gray-600 mb-6", "No page at \"/{path}\"." }
            Link {
                to: Route::Landing {},
                class: "px-6 py-3 bg-[#1B3A6A] text-white rounded-lg hover:bg-[#486AA0]",
                "Go home"
            }
        }
    }
}
