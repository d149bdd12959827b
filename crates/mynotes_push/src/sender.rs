//! Web Push delivery
//!
//! This module holds the [`PushSender`] seam used by the dispatcher and its
//! production implementation, [`WebPushSender`], which signs each request with
//! the server's VAPID key and encrypts the payload for the subscription's keys
//! (`aes128gcm`, RFC 8291).

use async_trait::async_trait;
use mynotes_common::{external_service_error, models::PushSubscription, NotesError};
use mynotes_config::PushConfig;
use thiserror::Error;
use web_push::{
    ContentEncoding, IsahcWebPushClient, SubscriptionInfo, VapidSignatureBuilder, WebPushClient,
    WebPushMessageBuilder,
};

/// Errors that can occur while storing subscriptions or delivering pushes
#[derive(Error, Debug)]
pub enum PushError {
    /// Missing or unusable configuration
    #[error("Missing configuration: {0}")]
    ConfigError(String),

    /// The VAPID signature or the encrypted message could not be built
    #[error("Signature error: {0}")]
    SignatureError(String),

    /// The push service rejected the message or could not be reached
    #[error("Delivery error: {0}")]
    DeliveryError(String),

    /// The subscription store could not be read or written
    #[error("Store error: {0}")]
    StoreError(String),
}

impl From<PushError> for NotesError {
    fn from(err: PushError) -> Self {
        match err {
            PushError::ConfigError(msg) => NotesError::ConfigError(msg),
            PushError::SignatureError(msg) => NotesError::InternalError(msg),
            PushError::DeliveryError(msg) => external_service_error("web-push", msg),
            PushError::StoreError(msg) => NotesError::StoreError(msg),
        }
    }
}

/// Delivers one encrypted payload to one subscription.
#[async_trait]
pub trait PushSender: Send + Sync {
    async fn send(&self, subscription: &PushSubscription, payload: &[u8]) -> Result<(), PushError>;
}

/// [`PushSender`] backed by the `web-push` crate.
pub struct WebPushSender {
    client: IsahcWebPushClient,
    config: PushConfig,
}

impl WebPushSender {
    /// Creates a sender from the VAPID settings.
    ///
    /// # Errors
    ///
    /// Returns [`PushError::ConfigError`] if the private key is empty or the
    /// HTTP client cannot be created.
    pub fn new(config: PushConfig) -> Result<Self, PushError> {
        if config.private_key.trim().is_empty() {
            return Err(PushError::ConfigError(
                "VAPID private key is empty".to_string(),
            ));
        }
        let client = IsahcWebPushClient::new()
            .map_err(|e| PushError::ConfigError(format!("web push client: {e}")))?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl PushSender for WebPushSender {
    async fn send(&self, subscription: &PushSubscription, payload: &[u8]) -> Result<(), PushError> {
        let info = SubscriptionInfo::new(
            subscription.endpoint.clone(),
            subscription.keys.p256dh.clone(),
            subscription.keys.auth.clone(),
        );

        let mut signature = VapidSignatureBuilder::from_base64(&self.config.private_key, &info)
            .map_err(|e| PushError::SignatureError(e.to_string()))?;
        signature.add_claim("sub", self.config.subject.clone());
        let signature = signature
            .build()
            .map_err(|e| PushError::SignatureError(e.to_string()))?;

        let mut message = WebPushMessageBuilder::new(&info);
        message.set_payload(ContentEncoding::Aes128Gcm, payload);
        message.set_vapid_signature(signature);
        message.set_ttl(self.config.ttl);
        let message = message
            .build()
            .map_err(|e| PushError::SignatureError(e.to_string()))?;

        self.client
            .send(message)
            .await
            .map_err(|e| PushError::DeliveryError(e.to_string()))
    }
}
