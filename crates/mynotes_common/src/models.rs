// --- File: crates/mynotes_common/src/models.rs ---

// Data structures shared by the push server and the browser-side client:
// the push subscription record, the reminder payload and the JSON bodies
// exchanged over HTTP.

use serde::{Deserialize, Serialize};

/// Encryption material issued by the browser's push service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SubscriptionKeys {
    /// P-256 ECDH public key of the user agent (URL-safe base64)
    pub p256dh: String,

    /// Authentication secret (URL-safe base64)
    pub auth: String,
}

/// A push subscription as serialized by `PushSubscription.toJSON()` in the browser.
///
/// The endpoint URL identifies the subscription. Key material is stored as-is
/// and only used when a message is encrypted for delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PushSubscription {
    /// Push service URL for this browser instance
    pub endpoint: String,

    /// Expiry in milliseconds since the epoch, if the push service set one.
    /// Browsers report a `DOMHighResTimeStamp`, which may be fractional.
    #[serde(default)]
    pub expiration_time: Option<f64>,

    /// Keys needed for encrypted delivery
    pub keys: SubscriptionKeys,
}

impl PushSubscription {
    pub fn new(
        endpoint: impl Into<String>,
        p256dh: impl Into<String>,
        auth: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            expiration_time: None,
            keys: SubscriptionKeys {
                p256dh: p256dh.into(),
                auth: auth.into(),
            },
        }
    }
}

/// Title and body shown by the background worker when a push arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReminderPayload {
    pub title: String,
    pub body: String,
}

pub const REMINDER_TITLE: &str = "Напоминание";
pub const IMMEDIATE_REMINDER_BODY: &str = "У вас есть незавершённые задачи";
pub const PERIODIC_REMINDER_BODY: &str =
    "У вас есть незавершённые задачи (напоминание каждые 2 минуты)";

impl ReminderPayload {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Payload sent by the on-demand `/send` trigger.
    pub fn immediate() -> Self {
        Self::new(REMINDER_TITLE, IMMEDIATE_REMINDER_BODY)
    }

    /// Payload sent by the background reminder timer.
    pub fn periodic() -> Self {
        Self::new(REMINDER_TITLE, PERIODIC_REMINDER_BODY)
    }

    /// JSON encoding carried inside the encrypted push message.
    pub fn to_bytes(&self) -> Vec<u8> {
        // Serializing two strings cannot fail.
        serde_json::to_vec(self).unwrap_or_default()
    }
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `POST /unsubscribe`. Only the endpoint is read; any other
/// subscription fields the browser sends along are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UnsubscribeRequest {
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UnsubscribeResponse {
    pub message: String,

    /// Number of stored records that matched the endpoint
    pub removed: usize,
}

/// Result of `POST /send`. The shape is the same whether or not any
/// individual delivery failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SendResponse {
    pub message: String,
    pub delivered: usize,
    pub failed: usize,
}

/// Body of `GET /vapid-key`, the same document the client used to load
/// from a static `vapid-key.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyResponse {
    pub public_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_subscription_json_deserializes() {
        let raw = r#"{
            "endpoint": "https://fcm.googleapis.com/fcm/send/abc",
            "expirationTime": null,
            "keys": { "p256dh": "BNc", "auth": "tBH" }
        }"#;
        let sub: PushSubscription = serde_json::from_str(raw).unwrap();
        assert_eq!(sub.endpoint, "https://fcm.googleapis.com/fcm/send/abc");
        assert_eq!(sub.expiration_time, None);
        assert_eq!(sub.keys.auth, "tBH");
    }

    #[test]
    fn test_fractional_expiration_time_is_accepted() {
        let raw = r#"{
            "endpoint": "E",
            "expirationTime": 1700000000000.5,
            "keys": { "p256dh": "a", "auth": "b" }
        }"#;
        let sub: PushSubscription = serde_json::from_str(raw).unwrap();
        assert_eq!(sub.expiration_time, Some(1_700_000_000_000.5));

        let raw = r#"{
            "endpoint": "E",
            "expirationTime": 1700000000000,
            "keys": { "p256dh": "a", "auth": "b" }
        }"#;
        let sub: PushSubscription = serde_json::from_str(raw).unwrap();
        assert_eq!(sub.expiration_time, Some(1_700_000_000_000.0));
    }

    #[test]
    fn test_subscription_without_keys_is_rejected() {
        let raw = r#"{ "endpoint": "https://push.example/1" }"#;
        assert!(serde_json::from_str::<PushSubscription>(raw).is_err());
    }

    #[test]
    fn test_payload_bytes_are_title_body_json() {
        let bytes = ReminderPayload::immediate().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["title"], REMINDER_TITLE);
        assert_eq!(value["body"], IMMEDIATE_REMINDER_BODY);
    }

    #[test]
    fn test_unsubscribe_request_ignores_extra_fields() {
        let raw = r#"{ "endpoint": "E1", "keys": { "p256dh": "a", "auth": "b" } }"#;
        let req: UnsubscribeRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(req.endpoint, "E1");
    }

    #[test]
    fn test_public_key_response_uses_camel_case() {
        let json = serde_json::to_string(&PublicKeyResponse {
            public_key: "BPub".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"publicKey":"BPub"}"#);
    }
}
