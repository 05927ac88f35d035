use super::{codec, DataStore, DEFAULT_STORAGE_KEY};
use crate::error::{PikdexError, Result};
use crate::model::Entry;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data across processes.
pub struct InMemoryStore {
    key: String,
    values: HashMap<String, String>,
    simulate_write_error: bool,
    simulate_read_error: bool,
    writes: usize,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            key: DEFAULT_STORAGE_KEY.to_string(),
            values: HashMap::new(),
            simulate_write_error: false,
            simulate_read_error: false,
            writes: 0,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw payload under the store key, bypassing the codec.
    pub fn with_raw(mut self, payload: &str) -> Self {
        self.values.insert(self.key.clone(), payload.to_string());
        self
    }

    /// The raw payload currently stored under the key.
    pub fn raw(&self) -> Option<&str> {
        self.values.get(&self.key).map(String::as_str)
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Make `load` fail with an I/O error, as an unreadable file would.
    pub fn set_simulate_read_error(&mut self, simulate: bool) {
        self.simulate_read_error = simulate;
    }

    /// Number of successful saves.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DataStore for InMemoryStore {
    fn key(&self) -> &str {
        &self.key
    }

    fn load(&self) -> Result<Option<Vec<Entry>>> {
        if self.simulate_read_error {
            return Err(PikdexError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Simulated read error",
            )));
        }
        match self.values.get(&self.key) {
            Some(payload) => codec::decode(payload).map(Some),
            None => Ok(None),
        }
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        if self.simulate_write_error {
            return Err(PikdexError::Persistence("Simulated write error".to_string()));
        }
        let payload = codec::encode(entries)?;
        self.values.insert(self.key.clone(), payload);
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Color, DecorType, NewEntry, Status};

    pub struct StoreFixture {
        pub store: InMemoryStore,
        entries: Vec<Entry>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                entries: Vec::new(),
            }
        }

        /// Adds an entry as the newest one, `created_at` one second after the previous.
        pub fn with_entry(mut self, color: Color, decor: DecorType, status: Status) -> Self {
            let mut entry = Entry::from_draft(NewEntry::new(color, decor).with_status(status));
            entry.created_at = 1_700_000_000_000 + (self.entries.len() as i64) * 1_000;
            self.entries.insert(0, entry);
            self
        }

        pub fn build(mut self) -> InMemoryStore {
            self.store
                .save(&self.entries)
                .expect("fixture store rejected save");
            self.store.writes = 0;
            self.store
        }
    }
}
