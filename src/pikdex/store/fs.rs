use super::{codec, DataStore, DEFAULT_STORAGE_KEY};
use crate::error::{PikdexError, Result};
use crate::model::Entry;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    /// Path of the file backing the store key.
    pub fn data_file(&self) -> PathBuf {
        self.root.join(format!("{}.json", self.key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PikdexError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn key(&self) -> &str {
        &self.key
    }

    /// Bytes that are not UTF-8 are malformed data; any other read failure stays `Io`.
    fn load(&self) -> Result<Option<Vec<Entry>>> {
        let bytes = match fs::read(self.data_file()) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PikdexError::Io(e)),
        };
        let content = String::from_utf8(bytes)
            .map_err(|e| PikdexError::MalformedData(format!("not UTF-8: {}", e)))?;
        codec::decode(&content).map(Some)
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        self.ensure_dir()?;
        let content = codec::encode(entries)?;

        let tmp_file = self
            .root
            .join(format!(".{}-{}.tmp", self.key, Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(PikdexError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.data_file()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(PikdexError::Io(e));
        }
        Ok(())
    }
}
