//! Errors carried in list snapshots.

/// A fetch failure as presented to the screen.
///
/// Unlike [`posadmin_api::Error`] this is `Clone` so it can live inside a
/// snapshot, and its `Display` output is the user-facing message. The
/// previous page of results always stays visible alongside it.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ListError {
    /// The request never reached the server, or timed out. Safe to retry.
    #[error("could not reach the server, please try again")]
    Network,
    /// The server rejected the request; the message is shown verbatim.
    #[error("{0}")]
    Validation(String),
    /// The server failed.
    #[error("something went wrong on the server, please try again later")]
    Server(u16),
    /// The response did not match the expected shape.
    #[error("received an unexpected response from the server")]
    Decode,
}

impl From<posadmin_api::Error> for ListError {
    fn from(e: posadmin_api::Error) -> Self {
        match e {
            posadmin_api::Error::Network(_) => ListError::Network,
            posadmin_api::Error::Validation { message, .. } => ListError::Validation(message),
            posadmin_api::Error::Server { status } => ListError::Server(status),
            posadmin_api::Error::Decode(_) => ListError::Decode,
        }
    }
}
