//! # Command Layer
//!
//! One module per user intent. Commands operate on a [`Collection`] (and, for
//! `config`, on the data directory) and return a [`CmdResult`] describing what
//! happened. They never print, prompt, or exit; deciding whether to delete, and how
//! to show results, belongs to whatever UI sits on top.
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries:
//! - `affected_entries`: entries created, changed or removed
//! - `listed_entries`: entries to display, with their display numbers
//! - `stats`: aggregate figures (for `stats`)
//! - `export_text` / `export_path`: exporter output (for `export`)
//! - `config`: configuration values (for `config`)
//! - `messages`: leveled notifications (info, success, warning, error)
//!
//! ## Testing Strategy
//!
//! Command tests run against `InMemoryStore` and cover the logic branches; the API
//! and CLI layers only check dispatch and rendering.
//!
//! ## Command Modules
//!
//! - [`add`]: Log a new entry
//! - [`list`]: Filtered, numbered listing
//! - [`update`]: Patch name/status
//! - [`delete`]: Remove entries
//! - [`stats`]: Totals and completion rate
//! - [`export`]: Delimited text export
//! - [`config`]: Read/write configuration
//! - [`helpers`]: Selector resolution

use crate::collection::Collection;
use crate::config::PikdexConfig;
use crate::index::DisplayEntry;
use crate::model::Entry;
use crate::store::DataStore;
use crate::view::Stats;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod list;
pub mod stats;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_entries: Vec<Entry>,
    pub listed_entries: Vec<DisplayEntry>,
    pub stats: Option<Stats>,
    pub export_text: Option<String>,
    pub export_path: Option<PathBuf>,
    pub config: Option<PikdexConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_entries(mut self, entries: Vec<Entry>) -> Self {
        self.affected_entries = entries;
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<DisplayEntry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: PikdexConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}

/// Moves warnings queued by the collection into `result`.
pub(crate) fn attach_warnings<S: DataStore>(collection: &mut Collection<S>, result: &mut CmdResult) {
    for warning in collection.take_warnings() {
        result.add_message(CmdMessage::warning(warning));
    }
}

/// One-line description of an entry for messages.
pub(crate) fn describe(entry: &Entry) -> String {
    format!(
        "{} ({}, {}, {})",
        entry.name, entry.color, entry.decor_type, entry.status
    )
}
