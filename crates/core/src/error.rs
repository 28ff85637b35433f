//! Uniform error value returned by every layer of the service.
//!
//! A [`RestError`] carries the HTTP status it should be rendered with, a
//! human-readable message and a short machine code. It serializes to the
//! exact body the API returns: `{"status": 400, "message": "...", "error": "bad_request"}`.

use serde::{Deserialize, Serialize};

/// Machine code for 400 responses.
pub const CODE_BAD_REQUEST: &str = "bad_request";
/// Machine code for 404 responses.
pub const CODE_NOT_FOUND: &str = "not_found";
/// Machine code for 500 responses.
pub const CODE_INTERNAL_SERVER_ERROR: &str = "internal_server_error";
/// Machine code for 501 responses.
pub const CODE_NOT_IMPLEMENTED: &str = "not_implemented";

/// Message shown to callers for every internal failure. Driver detail is
/// only ever logged.
pub const SERVER_ERROR_MESSAGE: &str = "Server Error";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{error} ({status}): {message}")]
pub struct RestError {
    pub status: u16,
    pub message: String,
    pub error: String,
}

impl RestError {
    fn new(status: u16, message: impl Into<String>, code: &str) -> Self {
        Self {
            status,
            message: message.into(),
            error: code.to_string(),
        }
    }

    /// 400: the client sent something malformed.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message, CODE_BAD_REQUEST)
    }

    /// 404: a query matched zero rows.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message, CODE_NOT_FOUND)
    }

    /// 500: any driver, statement or scan failure.
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(500, message, CODE_INTERNAL_SERVER_ERROR)
    }

    /// 501: the route exists but has no behaviour yet.
    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::new(501, message, CODE_NOT_IMPLEMENTED)
    }

    /// The generic internal error every data-access failure collapses to.
    pub fn server_error() -> Self {
        Self::internal_server_error(SERVER_ERROR_MESSAGE)
    }
}
