//! # Storage Layer
//!
//! The collection is mirrored into a durable key-value medium under one fixed key.
//! The [`DataStore`] trait is that boundary: it loads and saves the *whole* list, and
//! nothing else. All collection logic lives above it in [`crate::collection`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - One JSON file per key: `<data dir>/<key>.json`
//!   - Writes go to a temp file in the same directory and are renamed into place,
//!     so a reader sees either the old payload or the new one
//!
//! - [`memory::InMemoryStore`]: Storage for testing
//!   - Keeps encoded payloads in a map, so tests exercise the real codec
//!   - Can be seeded with raw (possibly malformed) payloads
//!   - Can simulate write failures
//!
//! ## Load Semantics
//!
//! `load` distinguishes four outcomes:
//! - `Ok(None)`: nothing stored under the key yet
//! - `Ok(Some(entries))`: payload decoded
//! - `Err(PikdexError::MalformedData)`: payload present but not valid (bad JSON,
//!   bad UTF-8, unknown labels)
//! - `Err(PikdexError::Io)`: payload could not be read at all
//!
//! The encoding itself lives in [`codec`].

use crate::error::Result;
use crate::model::Entry;

pub mod codec;
pub mod fs;
pub mod memory;

/// Key the collection has always been stored under.
pub const DEFAULT_STORAGE_KEY: &str = "pikmin_tracker_pro_v4";

/// Durable mirror of the collection.
pub trait DataStore {
    /// The key this store reads and writes.
    fn key(&self) -> &str;

    /// Read and decode the stored collection, if any.
    fn load(&self) -> Result<Option<Vec<Entry>>>;

    /// Replace the stored collection with `entries`.
    fn save(&mut self, entries: &[Entry]) -> Result<()>;
}
