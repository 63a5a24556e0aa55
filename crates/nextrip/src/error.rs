//! Client error types

use thiserror::Error;

use crate::transport::BoxError;

/// Errors that can occur while building, executing, or decoding a request
///
/// Every error returns synchronously to the caller; nothing is retried or
/// swallowed at this layer, and retry policy is left entirely to the caller.
#[derive(Debug, Error)]
pub enum NexTripError {
    /// The request URL could not be assembled from scheme, host, and path
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A header name or value was not valid HTTP
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// The transport failed before producing a response
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// The response carried a status other than 200 OK
    #[error("Unexpected response code: {status} ({body})")]
    UnexpectedStatus {
        /// Numeric HTTP status of the response
        status: u16,
        /// Raw response body, captured for diagnostics
        body: String,
    },

    /// The response body was not valid JSON for the requested type
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for NexTripError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}
