//! Browser and server doubles for the unit tests.

use async_trait::async_trait;
use mynotes_common::models::{MessageResponse, PushSubscription, SendResponse};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::api::SubscriptionApi;
use crate::error::ClientError;
use crate::platform::{LocalNotifier, Permission, PushPlatform};

/// Base64url of the bytes `04 01 02`.
pub const TEST_PUBLIC_KEY: &str = "BAEC";

pub fn browser_subscription(endpoint: &str) -> PushSubscription {
    PushSubscription::new(
        endpoint,
        "BNcRdreALRFXTkOOUHK1EtK2wtaz5Ry4",
        "tBHItJI5svbpez7KI4CCXg",
    )
}

pub struct FakePlatform {
    /// Answer given to the permission prompt.
    pub answer: Permission,
    pub current_permission: Mutex<Permission>,
    pub existing: Mutex<Option<PushSubscription>>,
    pub subscribe_fails: bool,
    /// `None` makes cancellation error out.
    pub cancel_outcome: Option<bool>,
    pub subscribed_with: Mutex<Vec<Vec<u8>>>,
    pub cancelled: AtomicUsize,
}

impl FakePlatform {
    pub fn granting() -> Self {
        Self::answering(Permission::Granted)
    }

    pub fn answering(answer: Permission) -> Self {
        Self {
            answer,
            current_permission: Mutex::new(Permission::Default),
            existing: Mutex::new(None),
            subscribe_fails: false,
            cancel_outcome: Some(true),
            subscribed_with: Mutex::new(Vec::new()),
            cancelled: AtomicUsize::new(0),
        }
    }

    pub fn with_existing(self, endpoint: &str) -> Self {
        *self.existing.lock().unwrap() = Some(browser_subscription(endpoint));
        self
    }

    pub fn subscribe_calls(&self) -> usize {
        self.subscribed_with.lock().unwrap().len()
    }
}

#[async_trait]
impl PushPlatform for FakePlatform {
    async fn request_permission(&self) -> Permission {
        *self.current_permission.lock().unwrap() = self.answer;
        self.answer
    }

    fn permission(&self) -> Permission {
        *self.current_permission.lock().unwrap()
    }

    async fn ready(&self) -> Result<(), ClientError> {
        Ok(())
    }

    async fn get_subscription(&self) -> Result<Option<PushSubscription>, ClientError> {
        Ok(self.existing.lock().unwrap().clone())
    }

    async fn subscribe(
        &self,
        application_server_key: &[u8],
    ) -> Result<PushSubscription, ClientError> {
        self.subscribed_with
            .lock()
            .unwrap()
            .push(application_server_key.to_vec());
        if self.subscribe_fails {
            return Err(ClientError::PlatformError("AbortError".to_string()));
        }
        let subscription = browser_subscription("https://push.example/new");
        *self.existing.lock().unwrap() = Some(subscription.clone());
        Ok(subscription)
    }

    async fn unsubscribe(&self, _subscription: &PushSubscription) -> Result<bool, ClientError> {
        match self.cancel_outcome {
            Some(true) => {
                self.cancelled.fetch_add(1, Ordering::SeqCst);
                *self.existing.lock().unwrap() = None;
                Ok(true)
            }
            Some(false) => Ok(false),
            None => Err(ClientError::PlatformError("InvalidStateError".to_string())),
        }
    }
}

#[derive(Default)]
pub struct FakeApi {
    /// Status the subscribe call fails with, if any.
    pub subscribe_status: Option<u16>,
    pub unsubscribe_fails: bool,
    pub send_fails: bool,
    pub subscribed: Mutex<Vec<String>>,
    pub unsubscribed: Mutex<Vec<String>>,
    pub sends: AtomicUsize,
}

impl FakeApi {
    pub fn rejecting_subscribe(status: u16) -> Self {
        Self {
            subscribe_status: Some(status),
            ..Self::default()
        }
    }
}

#[async_trait]
impl SubscriptionApi for FakeApi {
    async fn public_key(&self) -> Result<String, ClientError> {
        Ok(TEST_PUBLIC_KEY.to_string())
    }

    async fn subscribe(
        &self,
        subscription: &PushSubscription,
    ) -> Result<MessageResponse, ClientError> {
        if let Some(status) = self.subscribe_status {
            return Err(ClientError::ApiError {
                status,
                message: "rejected".to_string(),
            });
        }
        self.subscribed
            .lock()
            .unwrap()
            .push(subscription.endpoint.clone());
        Ok(MessageResponse::new("Подписка сохранена"))
    }

    async fn unsubscribe(&self, subscription: &PushSubscription) -> Result<(), ClientError> {
        self.unsubscribed
            .lock()
            .unwrap()
            .push(subscription.endpoint.clone());
        if self.unsubscribe_fails {
            return Err(ClientError::ApiError {
                status: 502,
                message: "bad gateway".to_string(),
            });
        }
        Ok(())
    }

    async fn send(&self) -> Result<SendResponse, ClientError> {
        self.sends.fetch_add(1, Ordering::SeqCst);
        if self.send_fails {
            return Err(ClientError::ApiError {
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok(SendResponse {
            message: "Уведомления отправлены".to_string(),
            delivered: 1,
            failed: 0,
        })
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub shown: Mutex<Vec<(String, String)>>,
}

impl LocalNotifier for RecordingNotifier {
    fn show(&self, title: &str, body: &str) {
        self.shown
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
    }
}
