//! Text encoding of the whole collection under a single store key.
//!
//! Current payloads are a versioned envelope:
//!
//! ```text
//! {"version": 1, "entries": [{"id": "...", "name": "...", "color": "Red",
//!   "decorType": "Cafe", "status": "Seedling", "createdAt": 1700000000000}]}
//! ```
//!
//! Earlier builds wrote the bare entries array with no envelope; those payloads are
//! still read. Anything else, including a single bad entry, makes the whole payload
//! malformed.

use crate::error::{PikdexError, Result};
use crate::model::Entry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const CURRENT_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    entries: &'a [Entry],
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Versioned { version: u32, entries: Vec<Entry> },
    Legacy(Vec<Entry>),
}

pub fn encode(entries: &[Entry]) -> Result<String> {
    let envelope = EnvelopeRef {
        version: CURRENT_VERSION,
        entries,
    };
    serde_json::to_string(&envelope).map_err(PikdexError::Serialization)
}

pub fn decode(text: &str) -> Result<Vec<Entry>> {
    let payload: Payload =
        serde_json::from_str(text).map_err(|e| PikdexError::MalformedData(e.to_string()))?;

    let entries = match payload {
        Payload::Versioned { version, entries } => {
            if version > CURRENT_VERSION {
                return Err(PikdexError::MalformedData(format!(
                    "unsupported version {}",
                    version
                )));
            }
            entries
        }
        Payload::Legacy(entries) => entries,
    };

    let mut seen = HashSet::with_capacity(entries.len());
    for entry in &entries {
        if !seen.insert(entry.id) {
            return Err(PikdexError::MalformedData(format!(
                "duplicate id {}",
                entry.id
            )));
        }
    }

    Ok(entries)
}
