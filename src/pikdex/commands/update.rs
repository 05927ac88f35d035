use crate::collection::Collection;
use crate::commands::{attach_warnings, describe, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::EntrySelector;
use crate::model::EntryPatch;
use crate::store::DataStore;

use super::helpers::resolve_selectors;

pub fn run<S: DataStore>(
    collection: &mut Collection<S>,
    selectors: &[EntrySelector],
    patch: &EntryPatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if patch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to change."));
        return Ok(result);
    }

    let (resolved, misses) = resolve_selectors(collection, selectors);
    for message in misses {
        result.add_message(message);
    }

    for dp in resolved {
        if let Some(entry) = collection.update(&dp.entry.id, patch) {
            result.add_message(CmdMessage::success(format!(
                "Updated ({}): {}",
                dp.index,
                describe(&entry)
            )));
            result.affected_entries.push(entry);
        }
    }

    attach_warnings(collection, &mut result);
    Ok(result)
}
