use api::ApiClient;
use dioxus::prelude::*;

use ui::{AuthProvider, NoticeProvider};
use views::{
    AdminDailyTasks, AdminDefaultTasks, AdminHelp, AdminNewTasks, AdminOverview, Landing, Login,
    NotFound, OperationDailyTasks, OperationHelp, OperationNewTasks, OperationOverview,
    Unauthorized,
};

mod route_access;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/auth/login/admin")]
    AdminLogin {},
    #[route("/auth/login/operation")]
    OperationLogin {},
    #[route("/dashboard/admin")]
    AdminOverview {},
    #[route("/dashboard/admin/defaulttasks")]
    AdminDefaultTasks {},
    #[route("/dashboard/admin/dailytasks")]
    AdminDailyTasks {},
    #[route("/dashboard/admin/newtasks")]
    AdminNewTasks {},
    #[route("/dashboard/admin/help")]
    AdminHelp {},
    #[route("/dashboard/admin/unauthorized")]
    Unauthorized {},
    #[route("/dashboard/operation")]
    OperationOverview {},
    #[route("/dashboard/operation/dailytasks")]
    OperationDailyTasks {},
    #[route("/dashboard/operation/newtasks")]
    OperationNewTasks {},
    #[route("/dashboard/operation/help")]
    OperationHelp {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn AdminLogin() -> Element {
    rsx! {
        Login { role: api::Role::Admin }
    }
}

#[component]
fn OperationLogin() -> Element {
    rsx! {
        Login { role: api::Role::Operation }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ApiClient::from_env);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/tailwindcss@2/dist/tailwind.min.css" }

        AuthProvider {
            NoticeProvider {
                Router::<Route> {}
            }
        }
    }
}
