//! Best-effort broadcast of a reminder to every stored subscription.
//!
//! Each delivery runs as its own task. A failure is logged and recorded in the
//! [`DispatchReport`] but never stops the other deliveries, and failing
//! subscriptions are not removed from the store.

use std::sync::Arc;

use mynotes_common::models::ReminderPayload;
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::sender::{PushError, PushSender};
use crate::store::SubscriptionStore;

/// Outcome of one delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryOutcome {
    pub endpoint: String,
    pub delivered: bool,
    pub error: Option<String>,
}

/// Per-endpoint outcomes of one broadcast, in store order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DispatchReport {
    pub outcomes: Vec<DeliveryOutcome>,
}

impl DispatchReport {
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn delivered(&self) -> usize {
        self.outcomes.iter().filter(|o| o.delivered).count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.delivered()
    }

    /// Endpoints whose delivery failed. Candidates for pruning.
    pub fn failed_endpoints(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|o| !o.delivered)
            .map(|o| o.endpoint.as_str())
    }
}

/// Sends payloads to all subscriptions in a store.
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<dyn SubscriptionStore>,
    sender: Arc<dyn PushSender>,
}

impl Dispatcher {
    pub fn new(store: Arc<dyn SubscriptionStore>, sender: Arc<dyn PushSender>) -> Self {
        Self { store, sender }
    }

    pub fn store(&self) -> &Arc<dyn SubscriptionStore> {
        &self.store
    }

    /// Delivers `payload` to a snapshot of the store.
    ///
    /// Subscriptions added or removed while the broadcast is in flight are not
    /// reflected in it.
    ///
    /// # Errors
    ///
    /// Only a store failure is returned; delivery failures are part of the report.
    pub async fn broadcast(&self, payload: &ReminderPayload) -> Result<DispatchReport, PushError> {
        let subscriptions = self.store.list().await?;
        if subscriptions.is_empty() {
            debug!("No subscriptions, nothing to broadcast");
            return Ok(DispatchReport::default());
        }

        let body = payload.to_bytes();
        let tasks: Vec<_> = subscriptions
            .into_iter()
            .map(|subscription| {
                let sender = Arc::clone(&self.sender);
                let body = body.clone();
                let endpoint = subscription.endpoint.clone();
                let handle =
                    tokio::spawn(async move { sender.send(&subscription, &body).await });
                (endpoint, handle)
            })
            .collect();

        let mut report = DispatchReport {
            outcomes: Vec::with_capacity(tasks.len()),
        };
        for (endpoint, handle) in tasks {
            let outcome = match handle.await {
                Ok(Ok(())) => DeliveryOutcome {
                    endpoint,
                    delivered: true,
                    error: None,
                },
                Ok(Err(err)) => {
                    warn!("Push to {} failed: {}", endpoint, err);
                    DeliveryOutcome {
                        endpoint,
                        delivered: false,
                        error: Some(err.to_string()),
                    }
                }
                Err(join_err) => {
                    error!("Push task for {} aborted: {}", endpoint, join_err);
                    DeliveryOutcome {
                        endpoint,
                        delivered: false,
                        error: Some(join_err.to_string()),
                    }
                }
            };
            report.outcomes.push(outcome);
        }

        info!(
            "Broadcast \"{}\": {} delivered, {} failed",
            payload.title,
            report.delivered(),
            report.failed()
        );
        Ok(report)
    }
}
