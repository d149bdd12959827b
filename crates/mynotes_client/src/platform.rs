//! Browser capabilities the client logic depends on.
//!
//! These are implemented by the host (a `wasm-bindgen` shim in the browser,
//! test doubles here). The push service, the notification permission prompt and
//! the service worker registration are never reimplemented.

use async_trait::async_trait;
use mynotes_common::models::PushSubscription;

use crate::error::ClientError;

/// `Notification.permission` as reported by the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
    Default,
}

/// Service worker registration plus its `PushManager`.
#[async_trait]
pub trait PushPlatform: Send + Sync {
    /// Shows the permission prompt if needed and returns the user's answer.
    async fn request_permission(&self) -> Permission;

    /// Current permission without prompting.
    fn permission(&self) -> Permission;

    /// Resolves once the service worker registration is active.
    async fn ready(&self) -> Result<(), ClientError>;

    /// The subscription this browser already holds, if any.
    async fn get_subscription(&self) -> Result<Option<PushSubscription>, ClientError>;

    /// Creates a user-visible-only subscription for `application_server_key`.
    async fn subscribe(&self, application_server_key: &[u8])
        -> Result<PushSubscription, ClientError>;

    /// Cancels the subscription at the push service. `Ok(false)` means the
    /// browser refused.
    async fn unsubscribe(&self, subscription: &PushSubscription) -> Result<bool, ClientError>;
}

/// Page-level notifications (`new Notification(...)`), not delivered via push.
pub trait LocalNotifier: Send + Sync {
    fn show(&self, title: &str, body: &str);
}
