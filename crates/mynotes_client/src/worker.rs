//! Background worker side of a push message: turns the raw payload into the
//! notification the platform should display.

use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_TITLE: &str = "Напоминание";
pub const DEFAULT_BODY: &str = "У вас есть невыполненные задачи!";
pub const NOTIFICATION_ICON: &str = "/icons/icon-192x192.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNotification {
    pub title: String,
    pub body: String,
    pub icon: String,
}

#[derive(Debug, Default, Deserialize)]
struct IncomingPayload {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    body: Option<String>,
}

/// Parses a push payload, substituting the default text for a missing,
/// malformed or empty field.
pub fn parse_push_payload(data: Option<&[u8]>) -> DisplayNotification {
    let payload = match data {
        Some(bytes) => serde_json::from_slice::<IncomingPayload>(bytes).unwrap_or_else(|err| {
            warn!("Unreadable push payload, showing defaults: {}", err);
            IncomingPayload::default()
        }),
        None => IncomingPayload::default(),
    };

    DisplayNotification {
        title: non_empty_or(payload.title, DEFAULT_TITLE),
        body: non_empty_or(payload.body, DEFAULT_BODY),
        icon: NOTIFICATION_ICON.to_string(),
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
