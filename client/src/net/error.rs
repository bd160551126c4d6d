//! Failure taxonomy for REST calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a block API call failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (offline, CORS, aborted).
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The server answered `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// The response body was not the expected JSON.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The request body could not be built.
    #[error("could not build request: {0}")]
    Request(String),
    /// Called outside a browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Text shown to the user in an alert.
    #[must_use]
    pub fn user_message(&self, action: &str) -> String {
        format!("Could not {action}: {self}")
    }
}
