//! Error taxonomy for API calls.
//!
//! Field-level validation never reaches this enum; it is handled entirely in
//! the UI layer before a request is attempted.

use thiserror::Error;

/// Failure of a single API operation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-2xx status. The message comes from the
    /// response body when it carries one, otherwise a fixed per-endpoint
    /// fallback.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// The request never produced a response (DNS, connection, fetch abort).
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx response whose body could not be decoded into the expected
    /// shape, or whose envelope was missing a required payload.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Status code for request errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
