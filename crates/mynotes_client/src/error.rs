//! Errors raised by the browser-side logic.
//!
//! None of these reach the user as a message: the subscription manager and the
//! note list log them and carry on.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The user declined (or dismissed) the notification permission prompt
    #[error("Notification permission was not granted")]
    PermissionDenied,

    /// The push platform (service worker registration, push manager) failed
    #[error("Push platform error: {0}")]
    PlatformError(String),

    /// The server answered with a non-success status
    #[error("Server returned status {status}: {message}")]
    ApiError { status: u16, message: String },

    /// The request never produced a response
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Local note storage could not be read or written
    #[error("Storage error: {0}")]
    StorageError(String),

    /// The application server key is not valid base64
    #[error("Invalid application server key: {0}")]
    DecodeError(String),

    #[error("Failed to parse data: {0}")]
    ParseError(#[from] serde_json::Error),
}
