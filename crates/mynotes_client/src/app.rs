//! The notes page: note list, reminder subscription and local confirmations.

use std::sync::Arc;
use std::time::Duration;

use mynotes_common::models::SendResponse;
use mynotes_config::ClientConfig;
use tracing::{error, info};

use crate::api::SubscriptionApi;
use crate::notes::NoteList;
use crate::platform::{LocalNotifier, Permission, PushPlatform};
use crate::storage::NoteStorage;
use crate::subscription::{SubscriptionManager, SubscriptionStatus};

pub const NOTE_ADDED_TITLE: &str = "Задача добавлена";

pub fn note_added_body(note: &str) -> String {
    format!("\"{}\" успешно добавлена в список задач.", note)
}

pub struct NotesApp {
    notes: NoteList,
    subscriptions: SubscriptionManager,
    platform: Arc<dyn PushPlatform>,
    notifier: Arc<dyn LocalNotifier>,
    api: Arc<dyn SubscriptionApi>,
    load_delay: Duration,
}

impl NotesApp {
    pub fn new(
        config: &ClientConfig,
        storage: Arc<dyn NoteStorage>,
        platform: Arc<dyn PushPlatform>,
        notifier: Arc<dyn LocalNotifier>,
        api: Arc<dyn SubscriptionApi>,
    ) -> Self {
        Self {
            notes: NoteList::new(storage, config.storage_key.clone()),
            subscriptions: SubscriptionManager::new(platform.clone(), api.clone()),
            platform,
            notifier,
            api,
            load_delay: config.load_delay(),
        }
    }

    /// Mount: loads the persisted notes after the configured delay.
    pub async fn start(&mut self) {
        self.notes.load(self.load_delay).await;
    }

    pub fn notes(&self) -> &NoteList {
        &self.notes
    }

    /// Delete and edit operations go straight to the list.
    pub fn notes_mut(&mut self) -> &mut NoteList {
        &mut self.notes
    }

    pub fn subscription_status(&self) -> SubscriptionStatus {
        self.subscriptions.status()
    }

    /// Adds a note and, for subscribed users with notification permission,
    /// confirms it with a local notification.
    pub fn add_note(&mut self, text: &str) -> bool {
        if !self.notes.add(text) {
            return false;
        }
        if self.subscriptions.is_subscribed() && self.platform.permission() == Permission::Granted {
            self.notifier.show(NOTE_ADDED_TITLE, &note_added_body(text));
        }
        true
    }

    pub async fn enable_notifications(&mut self) -> SubscriptionStatus {
        self.subscriptions.subscribe().await
    }

    pub async fn disable_notifications(&mut self) -> SubscriptionStatus {
        self.subscriptions.unsubscribe().await
    }

    /// "Check notification" button: asks the server to broadcast a reminder.
    pub async fn test_notification(&self) -> Option<SendResponse> {
        match self.api.send().await {
            Ok(response) => {
                info!(
                    "{} (delivered: {}, failed: {})",
                    response.message, response.delivered, response.failed
                );
                Some(response)
            }
            Err(err) => {
                error!("Reminder request failed: {}", err);
                None
            }
        }
    }
}
