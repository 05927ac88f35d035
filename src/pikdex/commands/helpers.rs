use crate::collection::Collection;
use crate::commands::CmdMessage;
use crate::index::{index_entries, DisplayEntry, EntrySelector};
use crate::store::DataStore;

pub fn indexed_entries<S: DataStore>(collection: &Collection<S>) -> Vec<DisplayEntry> {
    index_entries(collection.all())
}

/// Resolves selectors against the current numbering.
///
/// Matches come back in selector order without duplicates. Selectors that match
/// nothing, or an id prefix that matches several entries, become info messages
/// instead of errors.
pub fn resolve_selectors<S: DataStore>(
    collection: &Collection<S>,
    selectors: &[EntrySelector],
) -> (Vec<DisplayEntry>, Vec<CmdMessage>) {
    let indexed = indexed_entries(collection);
    let mut resolved: Vec<DisplayEntry> = Vec::new();
    let mut messages = Vec::new();

    for selector in selectors {
        let hits: Vec<&DisplayEntry> = indexed.iter().filter(|dp| selector.matches(dp)).collect();
        match hits.as_slice() {
            [] => messages.push(CmdMessage::info(format!("No entry matches {}", selector))),
            [dp] => {
                if !resolved.iter().any(|r| r.entry.id == dp.entry.id) {
                    resolved.push((*dp).clone());
                }
            }
            many => messages.push(CmdMessage::info(format!(
                "{} matches {} entries, use a longer id",
                selector,
                many.len()
            ))),
        }
    }

    (resolved, messages)
}
