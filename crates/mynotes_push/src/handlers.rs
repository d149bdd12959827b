//! HTTP handlers for push subscriptions and reminders
//!
//! The browser posts its push subscription to `/subscribe`, withdraws it via
//! `/unsubscribe` and can ask for an immediate reminder with `/send`. The
//! public VAPID key it needs to create a subscription is served at `/vapid-key`.

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mynotes_common::models::{
    MessageResponse, PublicKeyResponse, PushSubscription, ReminderPayload, SendResponse,
    UnsubscribeRequest, UnsubscribeResponse,
};
use mynotes_common::NotesError;
use mynotes_config::AppConfig;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::dispatcher::Dispatcher;
use crate::sender::{PushError, PushSender, WebPushSender};
use crate::store::{InMemorySubscriptionStore, SubscriptionStore};
use crate::triggers::send_after;

pub const SUBSCRIBED_MESSAGE: &str = "Подписка сохранена";
pub const UNSUBSCRIBED_MESSAGE: &str = "Отписка выполнена";
pub const SENT_MESSAGE: &str = "Уведомления отправлены";

/// Shared state for push handlers
#[derive(Clone)]
pub struct PushState {
    pub config: Arc<AppConfig>,
    pub store: Arc<dyn SubscriptionStore>,
    pub dispatcher: Dispatcher,
}

impl PushState {
    pub fn new(
        config: Arc<AppConfig>,
        store: Arc<dyn SubscriptionStore>,
        sender: Arc<dyn PushSender>,
    ) -> Self {
        let dispatcher = Dispatcher::new(Arc::clone(&store), sender);
        Self {
            config,
            store,
            dispatcher,
        }
    }

    /// State with an empty in-memory store and a real Web Push sender.
    pub fn from_config(config: Arc<AppConfig>) -> Result<Self, PushError> {
        let sender = WebPushSender::new(config.push.clone())?;
        Ok(Self::new(
            config,
            Arc::new(InMemorySubscriptionStore::new()),
            Arc::new(sender),
        ))
    }
}

/// Stores a push subscription.
///
/// Any well-formed subscription is accepted; key material is not validated and
/// a repeated endpoint is stored again.
///
/// # Responses
///
/// - 201 Created: subscription stored
/// - 500 Internal Server Error: the store could not be written
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/subscribe",
    request_body = PushSubscription,
    responses(
        (status = 201, description = "Subscription stored", body = MessageResponse),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Push"
))]
pub async fn subscribe_handler(
    State(state): State<Arc<PushState>>,
    Json(subscription): Json<PushSubscription>,
) -> Response {
    debug!("Subscribing endpoint: {}", subscription.endpoint);

    if let Err(err) = state.store.add(subscription).await {
        error!("Failed to store subscription: {}", err);
        return NotesError::from(err).into_response();
    }

    let total = state.store.len().await.unwrap_or_default();
    info!("Subscription stored, total subscriptions: {}", total);
    (
        StatusCode::CREATED,
        Json(MessageResponse::new(SUBSCRIBED_MESSAGE)),
    )
        .into_response()
}

/// Removes every subscription with the given endpoint.
///
/// Succeeds even when nothing matched; `removed` reports how many records went.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/unsubscribe",
    request_body = UnsubscribeRequest,
    responses(
        (status = 200, description = "Subscription removed", body = UnsubscribeResponse),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Push"
))]
pub async fn unsubscribe_handler(
    State(state): State<Arc<PushState>>,
    Json(payload): Json<UnsubscribeRequest>,
) -> Response {
    match state.store.remove_by_endpoint(&payload.endpoint).await {
        Ok(removed) => {
            let remaining = state.store.len().await.unwrap_or_default();
            info!(
                "Unsubscribe received for {}, removed {}, remaining subscriptions: {}",
                payload.endpoint, removed, remaining
            );
            Json(UnsubscribeResponse {
                message: UNSUBSCRIBED_MESSAGE.to_string(),
                removed,
            })
            .into_response()
        }
        Err(err) => {
            error!("Failed to remove subscription: {}", err);
            NotesError::from(err).into_response()
        }
    }
}

/// Broadcasts the task reminder to all subscribers after the configured delay.
///
/// The response has the same shape whether or not individual deliveries failed.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/send",
    responses(
        (status = 200, description = "Reminder broadcast finished", body = SendResponse),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Push"
))]
pub async fn send_handler(State(state): State<Arc<PushState>>) -> Response {
    let delay = state.config.reminders.send_delay();
    match send_after(&state.dispatcher, delay, &ReminderPayload::immediate()).await {
        Ok(report) => Json(SendResponse {
            message: SENT_MESSAGE.to_string(),
            delivered: report.delivered(),
            failed: report.failed(),
        })
        .into_response(),
        Err(err) => {
            error!("Failed to send notifications: {}", err);
            NotesError::from(err).into_response()
        }
    }
}

/// Returns the public VAPID key used as `applicationServerKey`.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/vapid-key",
    responses(
        (status = 200, description = "Public VAPID key", body = PublicKeyResponse)
    ),
    tag = "Push"
))]
pub async fn vapid_key_handler(State(state): State<Arc<PushState>>) -> Json<PublicKeyResponse> {
    Json(PublicKeyResponse {
        public_key: state.config.push.public_key.clone(),
    })
}
