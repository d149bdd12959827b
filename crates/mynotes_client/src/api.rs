//! HTTP client for the reminder server.

use async_trait::async_trait;
use mynotes_common::models::{MessageResponse, PublicKeyResponse, PushSubscription, SendResponse};
use mynotes_config::ClientConfig;
use reqwest::{Client, Response};
use tracing::debug;

use crate::error::ClientError;

/// Server endpoints used by the front-end.
#[async_trait]
pub trait SubscriptionApi: Send + Sync {
    /// Public VAPID key for `pushManager.subscribe`.
    async fn public_key(&self) -> Result<String, ClientError>;

    /// `POST /subscribe`.
    async fn subscribe(
        &self,
        subscription: &PushSubscription,
    ) -> Result<MessageResponse, ClientError>;

    /// `POST /unsubscribe`.
    async fn unsubscribe(&self, subscription: &PushSubscription) -> Result<(), ClientError>;

    /// `POST /send`: asks the server to broadcast the task reminder.
    async fn send(&self) -> Result<SendResponse, ClientError>;
}

/// [`SubscriptionApi`] over `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpSubscriptionApi {
    client: Client,
    base_url: String,
}

impl HttpSubscriptionApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.server_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: Response) -> Result<Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ClientError::ApiError {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl SubscriptionApi for HttpSubscriptionApi {
    async fn public_key(&self) -> Result<String, ClientError> {
        let response = self.client.get(self.url("/vapid-key")).send().await?;
        let body: PublicKeyResponse = Self::check(response).await?.json().await?;
        Ok(body.public_key)
    }

    async fn subscribe(
        &self,
        subscription: &PushSubscription,
    ) -> Result<MessageResponse, ClientError> {
        debug!("Posting subscription for {}", subscription.endpoint);
        let response = self
            .client
            .post(self.url("/subscribe"))
            .json(subscription)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn unsubscribe(&self, subscription: &PushSubscription) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.url("/unsubscribe"))
            .json(subscription)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn send(&self) -> Result<SendResponse, ClientError> {
        let response = self.client.post(self.url("/send")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }
}
