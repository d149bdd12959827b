//! Push subscription state machine of the front-end.
//!
//! `subscribe` and `unsubscribe` never fail from the caller's point of view:
//! every error is logged and the manager keeps its previous status.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::api::SubscriptionApi;
use crate::error::ClientError;
use crate::keys::decode_application_server_key;
use crate::platform::{Permission, PushPlatform};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubscriptionStatus {
    #[default]
    Unsubscribed,
    Subscribed,
}

pub struct SubscriptionManager {
    platform: Arc<dyn PushPlatform>,
    api: Arc<dyn SubscriptionApi>,
    status: SubscriptionStatus,
}

impl SubscriptionManager {
    pub fn new(platform: Arc<dyn PushPlatform>, api: Arc<dyn SubscriptionApi>) -> Self {
        Self {
            platform,
            api,
            status: SubscriptionStatus::Unsubscribed,
        }
    }

    pub fn status(&self) -> SubscriptionStatus {
        self.status
    }

    pub fn is_subscribed(&self) -> bool {
        self.status == SubscriptionStatus::Subscribed
    }

    /// Enables push reminders.
    ///
    /// Prompts for permission, reuses an existing browser subscription when
    /// there is one, and otherwise creates a subscription and registers it
    /// with the server. Only a confirmed registration (or an existing
    /// subscription) moves the status to `Subscribed`.
    pub async fn subscribe(&mut self) -> SubscriptionStatus {
        match self.try_subscribe().await {
            Ok(status) => self.status = status,
            Err(ClientError::PermissionDenied) => {
                info!("Notifications declined by the user");
            }
            Err(err) => {
                error!("Subscribing for push reminders failed: {}", err);
            }
        }
        self.status
    }

    async fn try_subscribe(&self) -> Result<SubscriptionStatus, ClientError> {
        if self.platform.request_permission().await != Permission::Granted {
            return Err(ClientError::PermissionDenied);
        }

        self.platform.ready().await?;

        if let Some(existing) = self.platform.get_subscription().await? {
            info!("Push subscription already present: {}", existing.endpoint);
            return Ok(SubscriptionStatus::Subscribed);
        }

        let public_key = self.api.public_key().await?;
        let application_server_key = decode_application_server_key(&public_key)?;

        let subscription = self.platform.subscribe(&application_server_key).await?;
        info!("New push subscription: {}", subscription.endpoint);

        let ack = self.api.subscribe(&subscription).await?;
        info!("Server confirmed subscription: {}", ack.message);

        Ok(SubscriptionStatus::Subscribed)
    }

    /// Disables push reminders.
    ///
    /// Without a browser subscription this only resets the status. After the
    /// browser cancels the subscription the server is told as well; the
    /// outcome of that request does not affect the status.
    pub async fn unsubscribe(&mut self) -> SubscriptionStatus {
        let current = match self.current_subscription().await {
            Ok(current) => current,
            Err(err) => {
                error!("Could not read the push subscription: {}", err);
                return self.status;
            }
        };

        let Some(subscription) = current else {
            info!("No push subscription to remove");
            self.status = SubscriptionStatus::Unsubscribed;
            return self.status;
        };

        match self.platform.unsubscribe(&subscription).await {
            Ok(true) => {
                info!("Push subscription cancelled");
                self.status = SubscriptionStatus::Unsubscribed;
                if let Err(err) = self.api.unsubscribe(&subscription).await {
                    warn!("Server was not notified about the unsubscribe: {}", err);
                }
            }
            Ok(false) => error!("Browser refused to cancel the push subscription"),
            Err(err) => error!("Cancelling the push subscription failed: {}", err),
        }
        self.status
    }

    async fn current_subscription(
        &self,
    ) -> Result<Option<mynotes_common::models::PushSubscription>, ClientError> {
        self.platform.ready().await?;
        self.platform.get_subscription().await
    }
}
