//! Front-end logic of My Notes
//!
//! Everything the notes page does besides rendering: the persisted note list
//! with its editing state, the push subscription flow, the HTTP calls to the
//! reminder server and the service worker's payload handling.
//!
//! Browser facilities stay behind traits ([`platform::PushPlatform`],
//! [`platform::LocalNotifier`], [`storage::NoteStorage`]) so the logic runs
//! and is tested natively.

pub mod api;
pub mod app;
pub mod error;
pub mod keys;
pub mod notes;
pub mod platform;
pub mod storage;
pub mod subscription;
#[cfg(test)]
mod test_support;
pub mod worker;

pub use api::{HttpSubscriptionApi, SubscriptionApi};
pub use app::NotesApp;
pub use error::ClientError;
pub use notes::{normalize_note, NoteList};
pub use subscription::{SubscriptionManager, SubscriptionStatus};
pub use worker::{parse_push_payload, DisplayNotification};
