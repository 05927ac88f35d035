use crate::collection::Collection;
use crate::commands::{attach_warnings, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use crate::view::EntryFilter;

use super::helpers::indexed_entries;

pub fn run<S: DataStore>(collection: &mut Collection<S>, filter: &EntryFilter) -> Result<CmdResult> {
    let listed: Vec<_> = indexed_entries(collection)
        .into_iter()
        .filter(|dp| filter.matches(&dp.entry))
        .collect();

    let mut result = CmdResult::default().with_listed_entries(listed);
    attach_warnings(collection, &mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, DecorType, Status};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_newest_first_with_numbers() {
        let store = StoreFixture::new()
            .with_entry(Color::Red, DecorType::Cafe, Status::Seedling)
            .with_entry(Color::Blue, DecorType::Zoo, Status::Decor)
            .build();
        let mut collection = Collection::load(store);

        let result = run(&mut collection, &EntryFilter::default()).unwrap();
        let listed: Vec<_> = result
            .listed_entries
            .iter()
            .map(|dp| (dp.index, dp.entry.color))
            .collect();
        assert_eq!(listed, vec![(1, Color::Blue), (2, Color::Red)]);
    }

    #[test]
    fn filtering_keeps_original_numbers() {
        let store = StoreFixture::new()
            .with_entry(Color::Red, DecorType::Cafe, Status::Seedling)
            .with_entry(Color::Blue, DecorType::Zoo, Status::Decor)
            .with_entry(Color::Red, DecorType::Park, Status::Decor)
            .build();
        let mut collection = Collection::load(store);

        let filter = EntryFilter::default().with_color(Color::Red);
        let result = run(&mut collection, &filter).unwrap();
        let numbers: Vec<_> = result.listed_entries.iter().map(|dp| dp.index).collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn surfaces_load_warning() {
        let mut collection = Collection::load(InMemoryStore::new().with_raw("garbage"));
        let result = run(&mut collection, &EntryFilter::default()).unwrap();
        assert!(result.listed_entries.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("could not be read"));
    }
}
