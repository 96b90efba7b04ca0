//! Credential login page, shared by both roles.

use api::{ApiClient, ApiError, Role};
use dioxus::prelude::*;
use ui::{use_auth, Button, Input, Label};

use crate::route_access::home_route;

fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Unauthorized => "Invalid email or password.".to_string(),
        ApiError::Forbidden => {
            "Access denied: this account cannot sign in with that role.".to_string()
        }
        ApiError::Rejected(message) => message.clone(),
        _ => "Login failed. Please check your connection and try again.".to_string(),
    }
}

#[component]
pub fn Login(role: Role) -> Element {
    let auth = use_auth();
    let client = use_context::<ApiClient>();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Already signed in with the right role: straight to the dashboard.
    {
        let state = auth.state.read();
        if state.is_authenticated && state.user.as_ref().map(|u| u.role) == Some(role) {
            nav.replace(home_route(role));
        }
    }

    let title = match role {
        Role::Admin => "Admin sign in",
        Role::Operation => "Operations sign in",
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        if email.read().trim().is_empty() || password.read().is_empty() {
            error.set(Some("Email and password are required.".to_string()));
            return;
        }
        submitting.set(true);
        error.set(None);
        let client = client.clone();
        let nav = nav;
        let email_value = email.read().trim().to_string();
        let password_value = password();
        spawn(async move {
            match auth.login(client, &email_value, &password_value, role).await {
                Ok(user) => {
                    tracing::info!(name = %user.name, ?role, "signed in");
                    nav.replace(home_route(role));
                }
                Err(err) => {
                    error.set(Some(login_error_message(&err)));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gray-100 px-4",
            div { class: "bg-white rounded-lg shadow p-8 w-full max-w-md",
                h1 { class: "text-2xl font-semibold text-gray-800 mb-6", "{title}" }
                if let Some(message) = error() {
                    div { class: "mb-4 p-3 rounded bg-red-50 text-red-700 text-sm", "{message}" }
                }
                form { onsubmit: submit,
                    div { class: "mb-4",
                        Label { html_for: "email", "Email" }
                        Input {
                            id: "email",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    div { class: "mb-6",
                        Label { html_for: "password", "Password" }
                        Input {
                            id: "password",
                            r#type: "password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    Button {
                        r#type: "submit",
                        class: "w-full",
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_distinguish_credentials_from_role() {
        assert_eq!(
            login_error_message(&ApiError::Unauthorized),
            "Invalid email or password."
        );
        assert!(login_error_message(&ApiError::Forbidden).contains("Access denied"));
        assert_ne!(
            login_error_message(&ApiError::Forbidden),
            login_error_message(&ApiError::Unauthorized)
        );
        assert_eq!(
            login_error_message(&ApiError::Rejected("Account disabled".to_string())),
            "Account disabled"
        );
        assert!(login_error_message(&ApiError::Transport("timeout".to_string()))
            .contains("try again"));
    }
}
