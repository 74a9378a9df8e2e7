use std::fmt;

use thiserror::Error;

/// Errors returned by the Lookup Service client.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("{}", request_failure_text(.status, .message.as_deref()))]
    RequestFailed {
        status: u16,
        /// The `error` string of the response body, when there was one.
        message: Option<String>,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid lookup URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// User-facing text for a non-2xx answer, with the service's `error` message
/// appended when there was one.
pub fn request_failure_text(status: impl fmt::Display, message: Option<&str>) -> String {
    match message {
        Some(m) => format!("Request failed with status {status} and message: {m}"),
        None => format!("Request failed with status {status}"),
    }
}
