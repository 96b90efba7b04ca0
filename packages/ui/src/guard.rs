//! Pure access decisions for protected screens.
//!
//! Rendering and navigation live with the router; this module only answers
//! "given this session, may this role's screen render?" so the decision
//! table can be tested without a UI runtime.

use api::Role;

use crate::auth::AuthState;

/// Outcome of evaluating a session against a screen's required role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session state is still being established; render nothing yet.
    Loading,
    /// No session; send to the login screen for the required role.
    Unauthenticated,
    /// Signed in, but as the wrong role.
    RoleMismatch,
    Authorized,
}

pub fn evaluate(auth: &AuthState, required: Role) -> GuardOutcome {
    if auth.loading {
        return GuardOutcome::Loading;
    }
    match &auth.user {
        None => GuardOutcome::Unauthenticated,
        Some(user) if !auth.is_authenticated => {
            tracing::debug!(?user.role, "stale user without session, treating as signed out");
            GuardOutcome::Unauthenticated
        }
        Some(user) => {
            if user.role == required {
                GuardOutcome::Authorized
            } else {
                GuardOutcome::RoleMismatch
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::UserInfo;

    fn user(role: Role) -> UserInfo {
        UserInfo {
            id: "u1".to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            role,
        }
    }

    fn signed_in(role: Role) -> AuthState {
        AuthState {
            user: Some(user(role)),
            is_authenticated: true,
            loading: false,
        }
    }

    #[test]
    fn loading_wins_over_everything() {
        let mut state = signed_in(Role::Admin);
        state.loading = true;
        assert_eq!(evaluate(&state, Role::Admin), GuardOutcome::Loading);
    }

    #[test]
    fn no_session_is_unauthenticated() {
        let state = AuthState {
            user: None,
            is_authenticated: false,
            loading: false,
        };
        assert_eq!(evaluate(&state, Role::Admin), GuardOutcome::Unauthenticated);
        assert_eq!(
            evaluate(&state, Role::Operation),
            GuardOutcome::Unauthenticated
        );
    }

    #[test]
    fn matching_role_is_authorized() {
        assert_eq!(
            evaluate(&signed_in(Role::Admin), Role::Admin),
            GuardOutcome::Authorized
        );
        assert_eq!(
            evaluate(&signed_in(Role::Operation), Role::Operation),
            GuardOutcome::Authorized
        );
    }

    #[test]
    fn wrong_role_is_a_mismatch_not_a_login_redirect() {
        assert_eq!(
            evaluate(&signed_in(Role::Operation), Role::Admin),
            GuardOutcome::RoleMismatch
        );
        assert_eq!(
            evaluate(&signed_in(Role::Admin), Role::Operation),
            GuardOutcome::RoleMismatch
        );
    }

    #[test]
    fn user_without_authenticated_flag_counts_as_signed_out() {
        let mut state = signed_in(Role::Admin);
        state.is_authenticated = false;
        assert_eq!(evaluate(&state, Role::Admin), GuardOutcome::Unauthenticated);
    }
}
