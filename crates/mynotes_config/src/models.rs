// --- File: crates/mynotes_config/src/models.rs ---

use serde::{Deserialize, Serialize};
use std::time::Duration;

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// --- Web Push (VAPID) Config ---
// Keys are URL-safe base64. Both default to the "secret_from_env" marker and are
// resolved from VAPID_PUBLIC_KEY / VAPID_PRIVATE_KEY at load time.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PushConfig {
    #[serde(default = "default_subject")]
    pub subject: String, // mailto: or https: contact sent in the VAPID claim
    #[serde(default = "secret_marker")]
    pub public_key: String,
    #[serde(default = "secret_marker")]
    pub private_key: String,
    #[serde(default = "default_ttl")]
    pub ttl: u32, // seconds the push service keeps an undelivered message
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            subject: default_subject(),
            public_key: secret_marker(),
            private_key: secret_marker(),
            ttl: default_ttl(),
        }
    }
}

// --- Reminder Timing Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReminderConfig {
    /// Delay applied by `POST /send` before broadcasting.
    #[serde(default = "default_send_delay_secs")]
    pub send_delay_secs: u64,
    /// Period of the background reminder broadcast.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl ReminderConfig {
    pub fn send_delay(&self) -> Duration {
        Duration::from_secs(self.send_delay_secs)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            send_delay_secs: default_send_delay_secs(),
            interval_secs: default_interval_secs(),
        }
    }
}

// --- Browser Client Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ClientConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default = "default_storage_key")]
    pub storage_key: String, // local storage key holding the serialized note list
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
}

impl ClientConfig {
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            storage_key: default_storage_key(),
            load_delay_ms: default_load_delay_ms(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub push: PushConfig,
    #[serde(default)]
    pub reminders: ReminderConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

/// Placeholder value replaced from the environment during loading.
pub const SECRET_FROM_ENV: &str = "secret_from_env";

fn secret_marker() -> String {
    SECRET_FROM_ENV.to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_subject() -> String {
    "mailto:admin@localhost".to_string()
}

fn default_ttl() -> u32 {
    60
}

fn default_send_delay_secs() -> u64 {
    5
}

fn default_interval_secs() -> u64 {
    2 * 60
}

fn default_server_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_storage_key() -> String {
    "notes".to_string()
}

fn default_load_delay_ms() -> u64 {
    500
}
