//! Test doubles shared by the unit tests of this crate.

use async_trait::async_trait;
use mynotes_common::models::PushSubscription;
use mynotes_config::AppConfig;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::handlers::PushState;
use crate::sender::{PushError, PushSender};
use crate::store::{InMemorySubscriptionStore, SubscriptionStore};

/// Records every attempt and fails for a fixed set of endpoints.
#[derive(Default)]
pub struct RecordingSender {
    pub attempts: Mutex<Vec<(String, Vec<u8>)>>,
    pub failing: HashSet<String>,
    pub panicking: HashSet<String>,
    pub latency: Option<Duration>,
}

impl RecordingSender {
    pub fn failing_for(endpoints: &[&str]) -> Self {
        Self {
            failing: endpoints.iter().map(|e| e.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn attempted_endpoints(&self) -> Vec<String> {
        let mut endpoints: Vec<String> = self
            .attempts
            .lock()
            .unwrap()
            .iter()
            .map(|(endpoint, _)| endpoint.clone())
            .collect();
        endpoints.sort();
        endpoints
    }
}

#[async_trait]
impl PushSender for RecordingSender {
    async fn send(&self, subscription: &PushSubscription, payload: &[u8]) -> Result<(), PushError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        self.attempts
            .lock()
            .unwrap()
            .push((subscription.endpoint.clone(), payload.to_vec()));
        if self.panicking.contains(&subscription.endpoint) {
            panic!("sender blew up for {}", subscription.endpoint);
        }
        if self.failing.contains(&subscription.endpoint) {
            return Err(PushError::DeliveryError(format!(
                "410 Gone for {}",
                subscription.endpoint
            )));
        }
        Ok(())
    }
}

/// Store whose every operation fails, as an unreachable backend would.
pub struct FailingStore;

impl FailingStore {
    fn unavailable() -> PushError {
        PushError::StoreError("store unavailable".to_string())
    }
}

#[async_trait]
impl SubscriptionStore for FailingStore {
    async fn add(&self, _subscription: PushSubscription) -> Result<(), PushError> {
        Err(Self::unavailable())
    }

    async fn remove_by_endpoint(&self, _endpoint: &str) -> Result<usize, PushError> {
        Err(Self::unavailable())
    }

    async fn list(&self) -> Result<Vec<PushSubscription>, PushError> {
        Err(Self::unavailable())
    }

    async fn len(&self) -> Result<usize, PushError> {
        Err(Self::unavailable())
    }
}

pub fn sub(endpoint: &str) -> PushSubscription {
    PushSubscription::new(
        endpoint,
        "BNcRdreALRFXTkOOUHK1EtK2wtaz5Ry4YfYCA_0QTpQtUbVlUls0VJXg7A8u-Ts1XbjhazAkj7I99e8QcYP7DkM",
        "tBHItJI5svbpez7KI4CCXg",
    )
}

pub fn test_config(send_delay_secs: u64) -> Arc<AppConfig> {
    let mut config = AppConfig::default();
    config.push.public_key = "BPublicKeyForTests".to_string();
    config.push.private_key = "private".to_string();
    config.reminders.send_delay_secs = send_delay_secs;
    Arc::new(config)
}

pub fn test_state(sender: Arc<RecordingSender>, send_delay_secs: u64) -> Arc<PushState> {
    Arc::new(PushState::new(
        test_config(send_delay_secs),
        Arc::new(InMemorySubscriptionStore::new()),
        sender,
    ))
}

pub fn failing_store_state(sender: Arc<RecordingSender>) -> Arc<PushState> {
    Arc::new(PushState::new(test_config(0), Arc::new(FailingStore), sender))
}
