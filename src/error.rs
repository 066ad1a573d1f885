//! Error definitions for client operations.

use thiserror::Error;

/// Errors returned by [`TraceClient`](crate::TraceClient) operations.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The service responded with a non-success status.
    #[error("request failed with status {status}")]
    RequestFailed {
        /// HTTP status code reported by the service.
        status: u16,
    },

    /// The transport or JSON decoder failed before a successful response
    /// was available (connection refused, DNS, malformed body).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
