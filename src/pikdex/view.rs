//! # View Engine
//!
//! Pure derivations over an entry list: filtering, aggregate stats, and display
//! ordering. Nothing here is cached; every call recomputes from its inputs, which is
//! linear in the list size.

use crate::model::{Color, DecorType, Entry, Status};
use serde::Serialize;

/// Optional equality criteria, combined with AND. Unset fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub color: Option<Color>,
    pub decor_type: Option<DecorType>,
    pub status: Option<Status>,
}

impl EntryFilter {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_decor_type(mut self, decor_type: DecorType) -> Self {
        self.decor_type = Some(decor_type);
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.decor_type.is_none() && self.status.is_none()
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        self.color.map_or(true, |c| entry.color == c)
            && self.decor_type.map_or(true, |d| entry.decor_type == d)
            && self.status.map_or(true, |s| entry.status == s)
    }
}

/// Entries matching `criteria`, in their original order.
pub fn filter(entries: &[Entry], criteria: &EntryFilter) -> Vec<Entry> {
    entries
        .iter()
        .filter(|e| criteria.matches(e))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub seedlings: usize,
    pub pikmin: usize,
    pub decor: usize,
    /// Share of entries at the `Decor` stage, as a whole percentage.
    pub completion: u32,
}

pub fn aggregate(entries: &[Entry]) -> Stats {
    let mut stats = Stats {
        total: entries.len(),
        ..Stats::default()
    };
    for entry in entries {
        match entry.status {
            Status::Seedling => stats.seedlings += 1,
            Status::Pikmin => stats.pikmin += 1,
            Status::Decor => stats.decor += 1,
        }
    }
    stats.completion = completion_rate(stats.decor, stats.total);
    stats
}

/// `round(100 * done / total)`, rounding halves up; 0 for an empty list.
fn completion_rate(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * done + total) / (2 * total)) as u32
}

/// Display order: newest `created_at` first. Ties keep their list order.
pub fn newest_first(entries: &[Entry]) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Collection;
    use crate::model::NewEntry;
    use crate::store::memory::InMemoryStore;

    fn entry(color: Color, decor: DecorType, status: Status) -> Entry {
        Entry::from_draft(NewEntry::new(color, decor).with_status(status))
    }

    fn sample() -> Vec<Entry> {
        vec![
            entry(Color::Red, DecorType::Cafe, Status::Seedling),
            entry(Color::Blue, DecorType::Cafe, Status::Decor),
            entry(Color::Red, DecorType::Park, Status::Decor),
            entry(Color::Yellow, DecorType::Park, Status::Pikmin),
            entry(Color::Red, DecorType::Cafe, Status::Decor),
        ]
    }

    #[test]
    fn empty_criteria_is_identity() {
        let entries = sample();
        assert_eq!(filter(&entries, &EntryFilter::default()), entries);
    }

    #[test]
    fn criteria_combine_with_and() {
        let entries = sample();
        let criteria = EntryFilter::default()
            .with_color(Color::Red)
            .with_decor_type(DecorType::Cafe);
        let result = filter(&entries, &criteria);
        assert_eq!(result, vec![entries[0].clone(), entries[4].clone()]);

        let narrower = criteria.with_status(Status::Decor);
        assert_eq!(filter(&entries, &narrower), vec![entries[4].clone()]);
    }

    #[test]
    fn filter_result_is_ordered_subsequence() {
        let entries = sample();
        let criteria = EntryFilter::default().with_status(Status::Decor);
        let result = filter(&entries, &criteria);

        let mut cursor = entries.iter();
        for picked in &result {
            assert!(criteria.matches(picked));
            assert!(cursor.any(|e| e == picked), "result out of order");
        }
    }

    #[test]
    fn no_match_gives_empty() {
        let criteria = EntryFilter::default().with_color(Color::Glow);
        assert!(filter(&sample(), &criteria).is_empty());
    }

    #[test]
    fn aggregate_of_empty_list() {
        assert_eq!(aggregate(&[]), Stats::default());
    }

    #[test]
    fn aggregate_counts_statuses() {
        let stats = aggregate(&sample());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.seedlings, 1);
        assert_eq!(stats.pikmin, 1);
        assert_eq!(stats.decor, 3);
        assert_eq!(stats.completion, 60);
    }

    #[test]
    fn completion_rounds_like_math_round() {
        assert_eq!(completion_rate(1, 3), 33);
        assert_eq!(completion_rate(2, 3), 67);
        assert_eq!(completion_rate(1, 8), 13); // 12.5
        assert_eq!(completion_rate(1, 200), 1); // 0.5
        assert_eq!(completion_rate(4, 4), 100);
        assert_eq!(completion_rate(0, 4), 0);
    }

    #[test]
    fn completion_grows_as_decor_replaces_other_stages() {
        let mut entries: Vec<Entry> = (0..7)
            .map(|_| entry(Color::White, DecorType::Beach, Status::Seedling))
            .collect();
        let mut last = aggregate(&entries).completion;
        for i in 0..entries.len() {
            entries[i].status = Status::Decor;
            let now = aggregate(&entries).completion;
            assert!(now >= last);
            last = now;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn three_entry_scenario() {
        let mut collection = Collection::load(InMemoryStore::new());
        let first = collection.create(NewEntry::new(Color::Red, DecorType::Cafe));
        let _second = collection.create(
            NewEntry::new(Color::Yellow, DecorType::Cafe).with_status(Status::Decor),
        );
        let third = collection
            .create(NewEntry::new(Color::Red, DecorType::Park).with_status(Status::Decor));

        let stats = aggregate(collection.all());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.seedlings, 1);
        assert_eq!(stats.completion, 67);

        let reds = filter(collection.all(), &EntryFilter::default().with_color(Color::Red));
        let ids: Vec<_> = reds.iter().map(|e| e.id).collect();
        // Storage order is newest first, so the third created comes before the first.
        assert_eq!(ids, vec![third.id, first.id]);
    }

    #[test]
    fn newest_first_sorts_by_created_at() {
        let mut a = entry(Color::Red, DecorType::Cafe, Status::Seedling);
        let mut b = entry(Color::Blue, DecorType::Cafe, Status::Seedling);
        let mut c = entry(Color::Ice, DecorType::Cafe, Status::Seedling);
        a.created_at = 10;
        b.created_at = 30;
        c.created_at = 20;

        let sorted = newest_first(&[a.clone(), b.clone(), c.clone()]);
        assert_eq!(sorted, vec![b, c, a]);
    }
}
