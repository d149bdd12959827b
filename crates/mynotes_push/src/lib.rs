//! Web Push reminders for My Notes
//!
//! This crate stores the push subscriptions browsers hand to the server and
//! broadcasts reminder notifications to all of them, either on request or on
//! a fixed interval.
//!
//! # Features
//!
//! - In-memory subscription store behind the [`store::SubscriptionStore`] trait
//! - VAPID-signed, `aes128gcm`-encrypted delivery through the `web-push` crate
//! - Best-effort broadcast with per-endpoint outcomes
//! - Delayed on-demand trigger and a periodic reminder task
//! - Axum routes, plus OpenAPI documentation with the `openapi` feature
//!
//! # Example
//!
//! ```rust,no_run
//! use mynotes_config::AppConfig;
//! use mynotes_push::{routes, PushState};
//! use std::sync::Arc;
//!
//! fn setup_app() -> Result<axum::Router, mynotes_push::sender::PushError> {
//!     let config = Arc::new(AppConfig::default());
//!     let state = Arc::new(PushState::from_config(config)?);
//!     Ok(routes(state))
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `POST /subscribe` - Store a push subscription
//! - `POST /unsubscribe` - Remove subscriptions by endpoint
//! - `POST /send` - Broadcast the task reminder after a short delay
//! - `GET /vapid-key` - Public key for `pushManager.subscribe`

pub mod dispatcher;
#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod routes;
pub mod sender;
pub mod store;
#[cfg(test)]
mod store_proptest;
#[cfg(test)]
mod test_support;
pub mod triggers;

pub use dispatcher::{DeliveryOutcome, DispatchReport, Dispatcher};
pub use handlers::PushState;
pub use routes::routes;

#[cfg(feature = "openapi")]
pub mod openapi {
    pub use crate::doc::PushApiDoc;
}
