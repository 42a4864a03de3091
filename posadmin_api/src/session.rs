//! Authenticated session injected into the client at construction.

use crate::types::AdminUser;

/// A login session: the bearer token plus the user record it belongs to.
///
/// Sessions are passed in explicitly rather than read from ambient storage,
/// so tests can construct fake ones and no screen depends on hidden state.
#[derive(Clone, Debug)]
pub struct Session {
    pub token: String,
    /// The logged-in user, when known. Absent for sessions restored from a
    /// bare token (e.g. an environment variable).
    pub user: Option<AdminUser>,
}

impl Session {
    /// Creates a session from a bare token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user: None,
        }
    }

    /// Creates a session carrying the user record, as returned by login.
    pub fn with_user(token: impl Into<String>, user: AdminUser) -> Self {
        Self {
            token: token.into(),
            user: Some(user),
        }
    }
}
