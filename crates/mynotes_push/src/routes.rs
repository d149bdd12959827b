use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tracing::info;

use crate::handlers::{
    send_handler, subscribe_handler, unsubscribe_handler, vapid_key_handler, PushState,
};

/// Create the push subscription routes
///
/// # Arguments
///
/// * `state` - Store, dispatcher and configuration shared by the handlers
///
/// # Returns
///
/// An Axum router with `/subscribe`, `/unsubscribe`, `/send` and `/vapid-key`
pub fn routes(state: Arc<PushState>) -> Router {
    info!("Push routes initialized");

    Router::new()
        .route("/subscribe", post(subscribe_handler))
        .route("/unsubscribe", post(unsubscribe_handler))
        .route("/send", post(send_handler))
        .route("/vapid-key", get(vapid_key_handler))
        .with_state(state)
}
