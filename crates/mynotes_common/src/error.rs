// --- File: crates/mynotes_common/src/error.rs ---
use thiserror::Error;

/// The base error type surfaced by the HTTP layer.
///
/// Crate-specific errors convert into this via `From` so handlers can return
/// a single type.
#[derive(Error, Debug)]
pub enum NotesError {
    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred while reading or writing the subscription store
    #[error("Store error: {0}")]
    StoreError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for NotesError {
    fn status_code(&self) -> u16 {
        match self {
            NotesError::ConfigError(_) => 500,
            NotesError::StoreError(_) => 500,
            NotesError::ExternalServiceError { .. } => 502,
            NotesError::InternalError(_) => 500,
        }
    }
}

pub fn external_service_error<T: std::fmt::Display>(service_name: &str, message: T) -> NotesError {
    NotesError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(NotesError::StoreError("x".into()).status_code(), 500);
        assert_eq!(NotesError::ConfigError("x".into()).status_code(), 500);
        assert_eq!(external_service_error("push", "gone").status_code(), 502);
    }

    #[test]
    fn test_external_service_message() {
        let err = external_service_error("push", "410 Gone");
        assert_eq!(err.to_string(), "External service error: push - 410 Gone");
    }
}
