//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every pikdex operation, whichever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Owns** the loaded [`Collection`] and the data directory
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (selector strings become [`EntrySelector`]s)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no terminal I/O and no formatting.
//!
//! ## Generic Over DataStore
//!
//! `PikdexApi<S: DataStore>` runs on `FileStore` in production and on
//! `InMemoryStore` in tests.
//!
//! ## Testing Strategy
//!
//! API tests check dispatch and input normalization only. Command logic is tested in
//! the command modules; storage behavior in the store modules.

use crate::collection::Collection;
use crate::commands;
use crate::error::Result;
use crate::index::EntrySelector;
use crate::model::{EntryPatch, NewEntry};
use crate::store::DataStore;
use crate::view::EntryFilter;
use std::path::PathBuf;
use std::str::FromStr;

/// The main API facade for pikdex operations.
pub struct PikdexApi<S: DataStore> {
    collection: Collection<S>,
    data_dir: PathBuf,
}

impl<S: DataStore> PikdexApi<S> {
    /// Loads the collection from `store`. `data_dir` holds `config.json`.
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self {
            collection: Collection::load(store),
            data_dir,
        }
    }

    pub fn add_entry(&mut self, draft: NewEntry) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.collection, draft)
    }

    pub fn list_entries(&mut self, filter: &EntryFilter) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.collection, filter)
    }

    pub fn update_entries<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
        patch: &EntryPatch,
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::update::run(&mut self.collection, &selectors, patch)
    }

    pub fn delete_entries<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.collection, &selectors)
    }

    pub fn stats(&mut self, filter: &EntryFilter) -> Result<commands::CmdResult> {
        commands::stats::run(&mut self.collection, filter)
    }

    pub fn export(
        &mut self,
        filter: &EntryFilter,
        target: ExportTarget,
    ) -> Result<commands::CmdResult> {
        commands::export::run(&mut self.collection, filter, target)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn collection(&self) -> &Collection<S> {
        &self.collection
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<EntrySelector>> {
    inputs
        .iter()
        .map(|s| EntrySelector::from_str(s.as_ref()))
        .collect()
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::ExportTarget;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PikdexError;
    use crate::model::{Color, DecorType, Status};
    use crate::store::memory::InMemoryStore;

    fn api() -> PikdexApi<InMemoryStore> {
        PikdexApi::new(InMemoryStore::new(), PathBuf::from("/nonexistent"))
    }

    #[test]
    fn add_then_list() {
        let mut api = api();
        api.add_entry(NewEntry::new(Color::Rock, DecorType::Airport))
            .unwrap();

        let result = api.list_entries(&EntryFilter::default()).unwrap();
        assert_eq!(result.listed_entries.len(), 1);
        assert_eq!(result.listed_entries[0].entry.name, "Rock Pikmin");
    }

    #[test]
    fn update_parses_selectors() {
        let mut api = api();
        let added = api
            .add_entry(NewEntry::new(Color::Red, DecorType::Cafe))
            .unwrap();
        let id = added.affected_entries[0].id.to_string();

        let patch = EntryPatch::default().with_status(Status::Pikmin);
        let result = api.update_entries(&[&id[..6]], &patch).unwrap();
        assert_eq!(result.affected_entries[0].status, Status::Pikmin);
    }

    #[test]
    fn bad_selector_is_an_api_error() {
        let mut api = api();
        let err = api.delete_entries(&["zz"]).unwrap_err();
        assert!(matches!(err, PikdexError::Api(_)));

        let err = api.delete_entries(&["0"]).unwrap_err();
        assert!(matches!(err, PikdexError::Api(_)));
    }

    #[test]
    fn delete_and_stats() {
        let mut api = api();
        api.add_entry(NewEntry::new(Color::Red, DecorType::Cafe))
            .unwrap();
        api.add_entry(NewEntry::new(Color::Blue, DecorType::Cafe).with_status(Status::Decor))
            .unwrap();

        let stats = api.stats(&EntryFilter::default()).unwrap().stats.unwrap();
        assert_eq!((stats.total, stats.completion), (2, 50));

        api.delete_entries(&["2"]).unwrap();
        let stats = api.stats(&EntryFilter::default()).unwrap().stats.unwrap();
        assert_eq!((stats.total, stats.decor, stats.completion), (1, 1, 100));
        assert_eq!(api.collection().len(), 1);
    }

    #[test]
    fn export_to_stdout() {
        let mut api = api();
        api.add_entry(NewEntry::new(Color::Ice, DecorType::Forest))
            .unwrap();

        let result = api
            .export(&EntryFilter::default(), ExportTarget::Stdout)
            .unwrap();
        assert!(result
            .export_text
            .unwrap()
            .ends_with(r#""Forest","Ice","Ice Pikmin","Seedling""#));
    }

    #[test]
    fn config_uses_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let api = PikdexApi::new(InMemoryStore::new(), dir.path().to_path_buf());
        api.config(ConfigAction::Set("export-file".into(), "garden.csv".into()))
            .unwrap();
        assert!(dir.path().join("config.json").exists());
    }
}
