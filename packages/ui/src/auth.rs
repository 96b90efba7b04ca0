//! Session store: authentication context and hooks.
//!
//! [`AuthProvider`] owns the session signals and provides an [`AuthContext`]
//! to everything below it. The invariant throughout: `is_authenticated` is
//! true iff `user` is set and the most recent check or login succeeded.

use api::{ApiClient, ApiError, Role, UserInfo};
use dioxus::prelude::*;

/// The client's cached view of the signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            loading: true,
        }
    }
}

impl AuthState {
    fn authenticated(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }

    fn signed_out() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            loading: false,
        }
    }
}

/// Handle to the session store. `Copy`; safe to capture in callbacks.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: Signal<AuthState>,
    check_in_flight: Signal<bool>,
}

impl AuthContext {
    /// Reconcile with the server-side session cookie.
    ///
    /// Never fails outward: any transport or auth error settles the state
    /// to unauthenticated. The in-flight flag keeps overlapping calls from
    /// racing to set contradictory state. Tasks spawned from a guarded
    /// scope can be cancelled at the await when that scope unmounts (the
    /// guard swaps to its spinner the moment `loading` flips), so the
    /// flags are released by a drop guard rather than straight-line code.
    pub async fn check(mut self, client: ApiClient) {
        if (self.check_in_flight)() {
            return;
        }
        self.check_in_flight.set(true);
        self.state.write().loading = true;
        let mut reset = FlagReset {
            ctx: self,
            armed: true,
        };

        let result = client.check_auth().await;
        reset.armed = false;

        match result {
            Ok(user) => self.state.set(AuthState::authenticated(user)),
            Err(err) => {
                tracing::debug!(%err, "auth check failed, treating as signed out");
                self.state.set(AuthState::signed_out());
            }
        }

        self.check_in_flight.set(false);
    }

    /// Authenticate with the backend. On failure the state stays
    /// unauthenticated and the error propagates so the login screen can
    /// show a message.
    pub async fn login(
        mut self,
        client: ApiClient,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<UserInfo, ApiError> {
        match client.login(email, password, role).await {
            Ok(user) => {
                self.state.set(AuthState::authenticated(user.clone()));
                Ok(user)
            }
            Err(err) => {
                self.state.write().loading = false;
                Err(err)
            }
        }
    }

    /// Best-effort server logout, then unconditionally clear local state
    /// and every cached response belonging to this session.
    pub async fn logout(mut self, client: ApiClient) {
        if let Err(err) = client.logout().await {
            tracing::warn!(%err, "logout request failed, clearing local session anyway");
        }
        client.reset_caches();
        self.state.set(AuthState::signed_out());
    }
}

/// Releases the in-flight flag and loading bit if a `check` future is
/// dropped before it settles.
struct FlagReset {
    ctx: AuthContext,
    armed: bool,
}

impl Drop for FlagReset {
    fn drop(&mut self) {
        if self.armed {
            let mut ctx = self.ctx;
            ctx.state.write().loading = false;
            ctx.check_in_flight.set(false);
        }
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Whether a path is reachable without a session. The remote auth check is
/// skipped on these, so the login screens render without a round-trip.
pub fn is_public_path(path: &str) -> bool {
    path == "/" || path.contains("/auth/login") || path.contains("/login")
}

#[cfg(target_arch = "wasm32")]
fn initial_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn initial_path() -> String {
    // Native windows always open on the landing route.
    "/".to_string()
}

/// Provider component that owns the session state.
/// Wrap the router with this to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_context::<ApiClient>();
    let auth = use_context_provider(|| AuthContext {
        state: Signal::new(AuthState::default()),
        check_in_flight: Signal::new(false),
    });

    // One initial reconcile with the session cookie, unless the app opened
    // on a public path, where an unauthenticated 401 would be pure noise.
    use_future(move || {
        let client = client.clone();
        async move {
            if is_public_path(&initial_path()) {
                let mut state = auth.state;
                state.write().loading = false;
            } else {
                auth.check(client).await;
            }
        }
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_paths_skip_the_remote_check() {
        assert!(is_public_path("/"));
        assert!(is_public_path("/auth/login/admin"));
        assert!(is_public_path("/auth/login/operation"));
        assert!(!is_public_path("/dashboard/admin"));
        assert!(!is_public_path("/dashboard/operation/dailytasks"));
    }
}
