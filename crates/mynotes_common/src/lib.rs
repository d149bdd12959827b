// --- File: crates/mynotes_common/src/lib.rs ---

// Shared building blocks for the My Notes crates: the data model exchanged
// between browser and server, the HTTP-facing error type and logging setup.
pub mod error; // Error handling
pub mod http; // HTTP error responses
pub mod logging; // Logging utilities
pub mod models; // Data structures and models

pub use error::{external_service_error, HttpStatusCode, NotesError};
pub use http::IntoHttpResponse;
pub use logging::{init, init_with_level};
