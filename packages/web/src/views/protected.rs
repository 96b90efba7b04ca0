//! Access-guard wrapper for dashboard views.

use api::Role;
use dioxus::prelude::*;
use ui::{use_auth, use_notices, GuardOutcome, LoadingIndicator};

use crate::route_access::{login_route, unauthorized_route};

/// Renders its children only when the session satisfies `role`.
///
/// While the session check is in flight, a spinner. Unauthenticated users
/// get one "Please Login First" notice and a redirect to the role's login
/// page; wrong-role users get one "Access Denied" notice and land on the
/// unauthorized page. The latch signal keeps a guarded view that stays
/// mounted through state flickers from firing the redirect twice.
#[component]
pub fn Protected(role: Role, children: Element) -> Element {
    let auth = use_auth();
    let mut notices = use_notices();
    let nav = use_navigator();
    let mut redirected = use_signal(|| false);

    let outcome = ui::guard::evaluate(&auth.state.read(), role);
    match outcome {
        GuardOutcome::Loading => rsx! {
            LoadingIndicator {}
        },
        GuardOutcome::Unauthenticated => {
            if !redirected() {
                redirected.set(true);
                notices.error("login-required", "Please Login First");
                nav.replace(login_route(role));
            }
            rsx! {}
        }
        GuardOutcome::RoleMismatch => {
            if !redirected() {
                redirected.set(true);
                notices.error("access-denied", "Access Denied: Insufficient permissions");
                nav.replace(unauthorized_route());
            }
            rsx! {}
        }
        GuardOutcome::Authorized => {
            if redirected() {
                redirected.set(false);
            }
            rsx! {
                {children}
            }
        }
    }
}
