//! Error type shared by the request helper and resource clients.
//!
//! # Design
//! This layer never catches or retries; every failure propagates to the
//! caller unchanged. The `Http` display rule matches what callers put in
//! front of users: the server's own body text when it sent one, otherwise
//! the bare status code.

use thiserror::Error;

/// Errors returned by `ApiClient` and the resource clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{}", status_message(.status, .body))]
    Http { status: u16, body: String },

    /// The request never completed (connection, DNS, or read failure).
    #[error("transport error: {0}")]
    Transport(String),

    /// The request payload could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be decoded into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

fn status_message(status: &u16, body: &str) -> String {
    if body.is_empty() {
        format!("HTTP {status}")
    } else {
        body.to_string()
    }
}
