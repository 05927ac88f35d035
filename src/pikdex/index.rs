//! # Display Indexing
//!
//! Entries are identified by UUIDs, which nobody wants to type. For interactive use
//! each entry also gets a short display number: its 1-based position in the
//! newest-first ordering of the *whole* collection.
//!
//! Numbers are assigned before any filter is applied, so `3` names the same entry in
//! `list`, `list --color red` and `edit 3`. They shift when entries are added or
//! removed; UUIDs never do.
//!
//! A user refers to entries with an [`EntrySelector`]:
//! - `3` → display number 3
//! - `6f1c2a8e` → any entry whose UUID starts with that hex prefix (at least
//!   [`MIN_ID_PREFIX`] characters)
//! - `id:1234` → an id prefix, even when it is all digits
//!
//! A bare all-digit selector is always a display number, so `1234` never matches an
//! id starting with `1234`; use `id:1234` for that.

use crate::error::{PikdexError, Result};
use crate::model::Entry;
use crate::view::newest_first;
use std::fmt;
use std::str::FromStr;

pub const MIN_ID_PREFIX: usize = 4;
const ID_TAG: &str = "id:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub index: usize,
    pub entry: Entry,
}

/// Assigns display numbers in newest-first order.
pub fn index_entries(entries: &[Entry]) -> Vec<DisplayEntry> {
    newest_first(entries)
        .into_iter()
        .enumerate()
        .map(|(i, entry)| DisplayEntry { index: i + 1, entry })
        .collect()
}

/// A display number, or an id prefix. Bare digits are always a display number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySelector {
    Index(usize),
    IdPrefix(String),
}

impl fmt::Display for EntrySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntrySelector::Index(i) => write!(f, "{}", i),
            EntrySelector::IdPrefix(p) => write!(f, "{}", p),
        }
    }
}

impl FromStr for EntrySelector {
    type Err = PikdexError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix(ID_TAG) {
            return parse_id_prefix(rest).ok_or_else(|| invalid_selector(s));
        }
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err(PikdexError::Api("Display numbers start at 1".to_string()));
            }
            return Ok(EntrySelector::Index(n));
        }

        parse_id_prefix(s).ok_or_else(|| invalid_selector(s))
    }
}

fn parse_id_prefix(s: &str) -> Option<EntrySelector> {
    let prefix = s.to_lowercase();
    let is_id_like = prefix.chars().all(|c| c.is_ascii_hexdigit() || c == '-');
    (prefix.len() >= MIN_ID_PREFIX && is_id_like).then_some(EntrySelector::IdPrefix(prefix))
}

fn invalid_selector(s: &str) -> PikdexError {
    PikdexError::Api(format!(
        "Invalid selector '{}': use a list number or at least {} characters of an id",
        s, MIN_ID_PREFIX
    ))
}

impl EntrySelector {
    pub fn matches(&self, dp: &DisplayEntry) -> bool {
        match self {
            EntrySelector::Index(i) => dp.index == *i,
            EntrySelector::IdPrefix(p) => dp.entry.id.to_string().starts_with(p.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, DecorType, NewEntry};

    fn entry_at(created_at: i64) -> Entry {
        let mut e = Entry::from_draft(NewEntry::new(Color::Red, DecorType::Cafe));
        e.created_at = created_at;
        e
    }

    #[test]
    fn numbers_follow_newest_first() {
        let old = entry_at(100);
        let new = entry_at(200);
        let indexed = index_entries(&[old.clone(), new.clone()]);

        assert_eq!(indexed[0].index, 1);
        assert_eq!(indexed[0].entry, new);
        assert_eq!(indexed[1].index, 2);
        assert_eq!(indexed[1].entry, old);
    }

    #[test]
    fn parses_numbers_and_prefixes() {
        assert_eq!("3".parse::<EntrySelector>().unwrap(), EntrySelector::Index(3));
        assert_eq!(
            "6F1C2A".parse::<EntrySelector>().unwrap(),
            EntrySelector::IdPrefix("6f1c2a".to_string())
        );
    }

    #[test]
    fn digits_are_numbers_unless_tagged_as_id() {
        assert_eq!("1234".parse::<EntrySelector>().unwrap(), EntrySelector::Index(1234));
        assert_eq!(
            "id:1234".parse::<EntrySelector>().unwrap(),
            EntrySelector::IdPrefix("1234".to_string())
        );
        assert!("id:12".parse::<EntrySelector>().is_err());
        assert!("id:zzzz".parse::<EntrySelector>().is_err());

        let mut e = entry_at(1);
        e.id = "12345678-0000-4000-8000-000000000000".parse().unwrap();
        let dp = DisplayEntry { index: 9, entry: e };
        assert!("id:1234".parse::<EntrySelector>().unwrap().matches(&dp));
        assert!(!"1234".parse::<EntrySelector>().unwrap().matches(&dp));
    }

    #[test]
    fn rejects_bad_selectors() {
        assert!("0".parse::<EntrySelector>().is_err());
        assert!("abc".parse::<EntrySelector>().is_err());
        assert!("red pikmin".parse::<EntrySelector>().is_err());
    }

    #[test]
    fn prefix_selector_matches_id() {
        let e = entry_at(1);
        let dp = DisplayEntry {
            index: 1,
            entry: e.clone(),
        };
        let prefix = e.id.to_string()[..8].to_string();
        assert!(EntrySelector::IdPrefix(prefix).matches(&dp));
        assert!(EntrySelector::Index(1).matches(&dp));
        assert!(!EntrySelector::Index(2).matches(&dp));
    }
}
