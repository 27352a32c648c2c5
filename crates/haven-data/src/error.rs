//! Fetch error types.

use thiserror::Error;

/// Errors that can occur when talking to the catalog.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request or read the response.
    #[error("Request failed: {0}")]
    Request(String),

    /// Could not reach the server.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Non-success HTTP status.
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// Failed to parse the response body.
    #[error("Failed to parse response: {0}")]
    Deserialization(String),

    /// Request timed out.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// HTTP client could not be built.
    #[error("Client setup failed: {0}")]
    Client(String),
}

impl FetchError {
    /// Status code for HTTP errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e.to_string())
        } else if e.is_connect() {
            FetchError::Connection(e.to_string())
        } else if e.is_decode() {
            FetchError::Deserialization(e.to_string())
        } else if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Http {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Deserialization(e.to_string())
    }
}

/// Errors surfaced by a background shelf load.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The load task panicked or was torn down by the runtime.
    #[error("Shelf load task failed: {0}")]
    Task(String),
}
