use serde::{Deserialize, Serialize};

/// Errors surfaced by [`crate::ApiClient`].
///
/// The variants carry owned strings rather than the underlying transport
/// error so the type stays `Clone` — cached requests hand the same result
/// to every caller that joined the in-flight future.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ApiError {
    /// Network-level failure (DNS, connect, timeout, malformed body).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered 401 — there is no live session.
    #[error("unauthorized")]
    Unauthorized,

    /// The backend answered 403 — the session exists but lacks the
    /// required role. Kept separate from 401 so login screens can tell
    /// bad credentials apart from a role mismatch.
    #[error("forbidden")]
    Forbidden,

    /// Any other non-2xx status.
    #[error("server returned status {0}")]
    Status(u16),

    /// A 2xx response whose envelope carried `success: false`.
    #[error("{0}")]
    Rejected(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl ApiError {
    /// Whether the error should trigger a session re-check / forced logout.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::Unauthorized | ApiError::Forbidden)
    }
}
