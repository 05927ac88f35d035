use crate::collection::Collection;
use crate::commands::{attach_warnings, describe, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::EntrySelector;
use crate::store::DataStore;

use super::helpers::resolve_selectors;

/// Permanently removes the selected entries. Confirmation happens before this is called.
pub fn run<S: DataStore>(
    collection: &mut Collection<S>,
    selectors: &[EntrySelector],
) -> Result<CmdResult> {
    let (resolved, misses) = resolve_selectors(collection, selectors);
    let mut result = CmdResult::default();
    for message in misses {
        result.add_message(message);
    }

    for dp in resolved {
        if let Some(entry) = collection.delete(&dp.entry.id) {
            result.add_message(CmdMessage::success(format!(
                "Deleted ({}): {}",
                dp.index,
                describe(&entry)
            )));
            result.affected_entries.push(entry);
        }
    }

    attach_warnings(collection, &mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, DecorType, Status};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_selected_entries() {
        let store = StoreFixture::new()
            .with_entry(Color::Red, DecorType::Cafe, Status::Seedling)
            .with_entry(Color::Blue, DecorType::Zoo, Status::Decor)
            .with_entry(Color::Ice, DecorType::Park, Status::Pikmin)
            .build();
        let mut collection = Collection::load(store);

        let selectors = [EntrySelector::Index(1), EntrySelector::Index(3)];
        let result = run(&mut collection, &selectors).unwrap();

        assert_eq!(result.affected_entries.len(), 2);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.all()[0].color, Color::Blue);
        assert_eq!(collection.store().load().unwrap().unwrap().len(), 1);
    }

    #[test]
    fn missing_selector_is_informational() {
        let store = StoreFixture::new()
            .with_entry(Color::Red, DecorType::Cafe, Status::Seedling)
            .build();
        let mut collection = Collection::load(store);

        let result = run(&mut collection, &[EntrySelector::Index(4)]).unwrap();

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.store().writes(), 0);
        assert_eq!(result.messages[0].content, "No entry matches 4");
    }
}
