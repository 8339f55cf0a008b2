//! Error types for the API client.

use crate::Payload;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The server answered with a status outside 200-299.
    ///
    /// Displays as the message extracted from the response body, or
    /// `HTTP <status>` when the body carries none.
    #[error("{message}")]
    RequestFailed {
        status: u16,
        message: String,
        payload: Payload,
    },
    /// The request never produced a response.
    #[error(transparent)]
    TransportFailed(#[from] TransportError),
    /// The request body could not be encoded as JSON. Nothing was sent.
    #[error("Request body is not representable as JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status of a failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failures reported by a [`Transport`](crate::Transport).
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Invalid request URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Free-form failure from a custom transport.
    #[error("{0}")]
    Other(String),
}
