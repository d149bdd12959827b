//! Subscription store
//!
//! The server keeps every push subscription it is given in a
//! [`SubscriptionStore`]. Handlers and triggers only see the trait, so the
//! in-memory implementation can be swapped for a persistent one without
//! touching call sites.

use async_trait::async_trait;
use mynotes_common::models::PushSubscription;
use tokio::sync::RwLock;

use crate::sender::PushError;

/// Storage for push subscriptions, keyed by endpoint URL.
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    /// Append a subscription. Records are not de-duplicated by endpoint.
    async fn add(&self, subscription: PushSubscription) -> Result<(), PushError>;

    /// Remove every record with the given endpoint.
    ///
    /// Returns the number of records removed, which is `0` when nothing matched.
    async fn remove_by_endpoint(&self, endpoint: &str) -> Result<usize, PushError>;

    /// Snapshot of all stored records in insertion order.
    async fn list(&self) -> Result<Vec<PushSubscription>, PushError>;

    /// Number of stored records.
    async fn len(&self) -> Result<usize, PushError>;

    async fn is_empty(&self) -> Result<bool, PushError> {
        Ok(self.len().await? == 0)
    }
}

/// Process-local store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemorySubscriptionStore {
    subscriptions: RwLock<Vec<PushSubscription>>,
}

impl InMemorySubscriptionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubscriptionStore for InMemorySubscriptionStore {
    async fn add(&self, subscription: PushSubscription) -> Result<(), PushError> {
        self.subscriptions.write().await.push(subscription);
        Ok(())
    }

    async fn remove_by_endpoint(&self, endpoint: &str) -> Result<usize, PushError> {
        let mut subscriptions = self.subscriptions.write().await;
        let before = subscriptions.len();
        subscriptions.retain(|sub| sub.endpoint != endpoint);
        Ok(before - subscriptions.len())
    }

    async fn list(&self) -> Result<Vec<PushSubscription>, PushError> {
        Ok(self.subscriptions.read().await.clone())
    }

    async fn len(&self) -> Result<usize, PushError> {
        Ok(self.subscriptions.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(endpoint: &str) -> PushSubscription {
        PushSubscription::new(endpoint, "p256dh", "auth")
    }

    #[tokio::test]
    async fn test_subscribe_then_unsubscribe_twice() {
        let store = InMemorySubscriptionStore::new();
        store.add(sub("E1")).await.unwrap();
        assert_eq!(store.len().await.unwrap(), 1);

        assert_eq!(store.remove_by_endpoint("E1").await.unwrap(), 1);
        assert!(store.is_empty().await.unwrap());

        assert_eq!(store.remove_by_endpoint("E1").await.unwrap(), 0);
        assert!(store.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicates_are_kept_and_removed_together() {
        let store = InMemorySubscriptionStore::new();
        store.add(sub("E1")).await.unwrap();
        store.add(sub("E1")).await.unwrap();
        store.add(sub("E2")).await.unwrap();
        assert_eq!(store.len().await.unwrap(), 3);

        assert_eq!(store.remove_by_endpoint("E1").await.unwrap(), 2);
        let remaining = store.list().await.unwrap();
        assert_eq!(remaining, vec![sub("E2")]);
    }

    #[tokio::test]
    async fn test_unknown_endpoint_leaves_store_unchanged() {
        let store = InMemorySubscriptionStore::new();
        store.add(sub("E1")).await.unwrap();
        assert_eq!(store.remove_by_endpoint("E9").await.unwrap(), 0);
        assert_eq!(store.list().await.unwrap(), vec![sub("E1")]);
    }
}
