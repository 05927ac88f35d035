use crate::collection::Collection;
use crate::commands::{attach_warnings, describe, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewEntry;
use crate::store::DataStore;

pub fn run<S: DataStore>(collection: &mut Collection<S>, draft: NewEntry) -> Result<CmdResult> {
    let entry = collection.create(draft);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Added: {}", describe(&entry))));
    attach_warnings(collection, &mut result);
    Ok(result.with_affected_entries(vec![entry]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::{Color, DecorType, Status};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_entry_with_default_name() {
        let mut collection = Collection::load(InMemoryStore::new());
        let result = run(
            &mut collection,
            NewEntry::new(Color::Purple, DecorType::Bakery).with_status(Status::Pikmin),
        )
        .unwrap();

        assert_eq!(collection.len(), 1);
        assert_eq!(result.affected_entries[0].name, "Purple Pikmin");
        assert_eq!(
            result.messages[0].content,
            "Added: Purple Pikmin (Purple, Bakery, Pikmin)"
        );
    }

    #[test]
    fn save_failure_is_a_warning_not_an_error() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let mut collection = Collection::load(store);

        let result = run(&mut collection, NewEntry::new(Color::Red, DecorType::Cafe)).unwrap();

        assert_eq!(collection.len(), 1);
        assert!(result.has_level(MessageLevel::Success));
        assert!(result.has_level(MessageLevel::Warning));
    }
}
