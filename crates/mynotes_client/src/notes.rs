//! Ordered note list with an editing sub-state, persisted as one JSON array.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, warn};

use crate::error::ClientError;
use crate::storage::NoteStorage;

/// Trims every line, drops the empty ones and joins the rest with `\n`.
pub fn normalize_note(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub index: usize,
    pub text: String,
}

pub struct NoteList {
    notes: Vec<String>,
    editing: Option<EditState>,
    loading: bool,
    storage: Arc<dyn NoteStorage>,
    key: String,
}

impl NoteList {
    /// Creates an empty list in the loading state. Call [`NoteList::load`]
    /// before mutating it.
    pub fn new(storage: Arc<dyn NoteStorage>, key: impl Into<String>) -> Self {
        Self {
            notes: Vec::new(),
            editing: None,
            loading: true,
            storage,
            key: key.into(),
        }
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn editing(&self) -> Option<&EditState> {
        self.editing.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Waits `delay`, then reads the persisted notes. Missing or unreadable
    /// data yields an empty list. Unreadable data is left in storage until the
    /// next mutation.
    pub async fn load(&mut self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let loaded = self.read_persisted();
        self.loading = false;
        match loaded {
            Ok(notes) => {
                self.notes = notes;
                debug!("Loaded {} notes", self.notes.len());
                self.persist();
            }
            Err(err) => {
                error!("Failed to read notes from '{}': {}", self.key, err);
                self.notes = Vec::new();
            }
        }
    }

    fn read_persisted(&self) -> Result<Vec<String>, ClientError> {
        match self.storage.get(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Appends `text` as typed. Blank input and calls made while loading are
    /// ignored and return `false`.
    pub fn add(&mut self, text: &str) -> bool {
        if self.rejects_mutation("add") || text.trim().is_empty() {
            return false;
        }
        self.notes.push(text.to_string());
        self.persist();
        true
    }

    pub fn delete(&mut self, index: usize) -> Option<String> {
        if self.rejects_mutation("delete") || index >= self.notes.len() {
            return None;
        }
        let removed = self.notes.remove(index);
        self.persist();
        Some(removed)
    }

    pub fn start_editing(&mut self, index: usize) -> bool {
        if self.rejects_mutation("edit") {
            return false;
        }
        let Some(current) = self.notes.get(index) else {
            return false;
        };
        self.editing = Some(EditState {
            index,
            text: current.clone(),
        });
        true
    }

    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.editing.as_mut() {
            edit.text = text.into();
        }
    }

    /// Commits the normalized edit text to `index` and leaves editing mode.
    ///
    /// When the text normalizes to nothing the note is left untouched and the
    /// list stays in editing mode.
    pub fn save_edited_note(&mut self, index: usize) -> bool {
        if self.rejects_mutation("save") {
            return false;
        }
        let Some(edit) = self.editing.as_ref() else {
            return false;
        };
        let cleaned = normalize_note(&edit.text);
        if cleaned.is_empty() {
            return false;
        }
        let Some(slot) = self.notes.get_mut(index) else {
            return false;
        };
        *slot = cleaned;
        self.editing = None;
        self.persist();
        true
    }

    fn rejects_mutation(&self, action: &str) -> bool {
        if self.loading {
            warn!("Ignoring {} while notes are still loading", action);
        }
        self.loading
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.notes)
            .map_err(ClientError::from)
            .and_then(|raw| self.storage.set(&self.key, &raw));
        if let Err(err) = result {
            error!("Failed to save notes to '{}': {}", self.key, err);
        }
    }
}
