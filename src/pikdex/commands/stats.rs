use crate::collection::Collection;
use crate::commands::{attach_warnings, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use crate::view::{aggregate, filter as filter_entries, EntryFilter};

pub fn run<S: DataStore>(collection: &mut Collection<S>, filter: &EntryFilter) -> Result<CmdResult> {
    let stats = if filter.is_empty() {
        aggregate(collection.all())
    } else {
        aggregate(&filter_entries(collection.all(), filter))
    };

    let mut result = CmdResult::default().with_stats(stats);
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
    fn empty_collection_has_zero_completion() {
        let mut collection = Collection::load(InMemoryStore::new());
        let stats = run(&mut collection, &EntryFilter::default())
            .unwrap()
            .stats
            .unwrap();
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completion, 0);
    }

    #[test]
    fn stats_respect_filter() {
        let store = StoreFixture::new()
            .with_entry(Color::Red, DecorType::Cafe, Status::Seedling)
            .with_entry(Color::Yellow, DecorType::Cafe, Status::Decor)
            .with_entry(Color::Red, DecorType::Park, Status::Decor)
            .build();
        let mut collection = Collection::load(store);

        let all = run(&mut collection, &EntryFilter::default())
            .unwrap()
            .stats
            .unwrap();
        assert_eq!((all.total, all.seedlings, all.completion), (3, 1, 67));

        let reds = run(&mut collection, &EntryFilter::default().with_color(Color::Red))
            .unwrap()
            .stats
            .unwrap();
        assert_eq!((reds.total, reds.seedlings, reds.completion), (2, 1, 50));
    }
}
