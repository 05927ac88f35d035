//! # Collection Store
//!
//! [`Collection`] is the single owner of the in-memory entry list. Every mutation goes
//! through it, and every successful mutation is mirrored to the injected [`DataStore`]
//! by re-saving the full list.
//!
//! ## Failure Handling
//!
//! The in-memory list is the source of truth for the running session:
//!
//! - A payload that cannot be decoded at load time yields an empty collection.
//! - A payload that cannot be *read* (an I/O failure) also yields an empty collection,
//!   but saving is then disabled for the session so the unread payload is never
//!   overwritten.
//! - A failed save does not roll back the mutation.
//!
//! All of these are logged and queued as warnings; callers collect them with
//! [`Collection::take_warnings`] and surface them however they like. None ever
//! becomes an error returned from a mutating operation.
//!
//! ## Tolerant Updates
//!
//! [`Collection::update`] and [`Collection::delete`] on an unknown id change nothing,
//! save nothing, and return `None`.

use crate::error::PikdexError;
use crate::model::{Entry, EntryPatch, NewEntry};
use crate::store::DataStore;
use uuid::Uuid;

pub struct Collection<S: DataStore> {
    store: S,
    entries: Vec<Entry>,
    warnings: Vec<String>,
    /// Set when the stored payload exists but could not be read.
    read_failure: Option<String>,
}

impl<S: DataStore> Collection<S> {
    /// Loads the mirrored collection from `store`.
    ///
    /// Never fails: an absent key gives an empty collection, and so does a
    /// malformed payload (with a queued warning). An I/O failure gives an empty
    /// collection that refuses to save.
    pub fn load(store: S) -> Self {
        let mut warnings = Vec::new();
        let mut read_failure = None;
        let entries = match store.load() {
            Ok(Some(entries)) => {
                log::debug!("loaded {} entries from '{}'", entries.len(), store.key());
                entries
            }
            Ok(None) => Vec::new(),
            Err(e @ PikdexError::Io(_)) => {
                log::warn!("failed to read saved data from '{}': {}", store.key(), e);
                warnings.push(format!(
                    "Saved collection could not be read, changes will not be saved ({})",
                    e
                ));
                read_failure = Some(e.to_string());
                Vec::new()
            }
            Err(e) => {
                log::warn!("failed to load saved data from '{}': {}", store.key(), e);
                warnings.push(format!(
                    "Saved collection could not be read, starting empty ({})",
                    e
                ));
                Vec::new()
            }
        };

        Self {
            store,
            entries,
            warnings,
            read_failure,
        }
    }

    /// The current list, newest insertion first.
    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &Uuid) -> Option<&Entry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Builds an entry from `draft` and adds it as the newest one.
    pub fn create(&mut self, draft: NewEntry) -> Entry {
        let entry = Entry::from_draft(draft);
        self.entries.insert(0, entry.clone());
        log::debug!("created entry {} ({})", entry.id, entry.name);
        self.persist();
        entry
    }

    /// Merges `patch` into the entry with `id`, returning the updated entry.
    pub fn update(&mut self, id: &Uuid, patch: &EntryPatch) -> Option<Entry> {
        let entry = self.entries.iter_mut().find(|e| &e.id == id)?;
        patch.apply(entry);
        let updated = entry.clone();
        log::debug!("updated entry {}", id);
        self.persist();
        Some(updated)
    }

    /// Removes the entry with `id`, returning it.
    pub fn delete(&mut self, id: &Uuid) -> Option<Entry> {
        let pos = self.entries.iter().position(|e| &e.id == id)?;
        let removed = self.entries.remove(pos);
        log::debug!("deleted entry {}", id);
        self.persist();
        Some(removed)
    }

    /// Drains warnings queued by load and save failures.
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    fn persist(&mut self) {
        if let Some(reason) = &self.read_failure {
            log::warn!("not saving to '{}': load failed ({})", self.store.key(), reason);
            self.warnings.push(format!(
                "Changes are not saved: the saved collection could not be read ({})",
                reason
            ));
            return;
        }
        if let Err(e) = self.store.save(&self.entries) {
            log::warn!("failed to save collection to '{}': {}", self.store.key(), e);
            self.warnings
                .push(format!("Changes are not saved to disk yet ({})", e));
        }
    }
}
