//! Error types for the API client.

/// Errors that can occur when talking to the backend.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a usable response: connection failure,
    /// timeout, or a transport-level error. Retrying is safe.
    #[error("request failed: {0}")]
    Network(String),
    /// The server rejected the request (4xx). `message` is the server's own
    /// message when it sent one, otherwise a generic fallback.
    #[error("{message}")]
    Validation { status: u16, message: String },
    /// The server failed (5xx).
    #[error("server error (status {status})")]
    Server { status: u16 },
    /// The response body did not match the expected envelope.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl Error {
    /// Builds the appropriate error for a non-success HTTP status.
    ///
    /// For 4xx responses the backend usually sends `{"message": "..."}`;
    /// that message is surfaced verbatim. Anything else gets the generic
    /// fallback so the caller never shows a raw body to the user.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        if (400..500).contains(&status) {
            let message = serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                .unwrap_or_else(|| format!("request rejected (status {status})"));
            Error::Validation { status, message }
        } else {
            Error::Server { status }
        }
    }

    /// True when retrying the same request could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Server { .. })
    }
}
