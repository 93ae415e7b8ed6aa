//! Pure view projections over a list snapshot.
//!
//! Nothing here mutates state: a rendering layer hands in a snapshot (or
//! borrows one from the store) and gets back the filtered, sorted, grouped
//! sequence it should display plus aggregate statistics. Filtering runs
//! first, sorting second (stable, so ties keep their incoming order), and
//! grouping partitions the result by category in first-appearance order.

use crate::types::{Category, Filter, Item, ListState, SortKey};

/// Applies a filter mode, preserving input order
#[must_use]
pub fn filter_items(items: &[Item], filter: Filter) -> Vec<&Item> {
    items.iter().filter(|i| filter.matches(i)).collect()
}

/// Applies a total order to an already-filtered sequence
///
/// `slice::sort_by` is stable, so items comparing equal keep their relative
/// order from the filtering step.
pub fn sort_items(items: &mut [&Item], key: SortKey) {
    match key {
        SortKey::Newest => items.sort_by(|a, b| b.id.cmp(&a.id)),
        // Case-insensitive stand-in for locale collation
        SortKey::Name => items.sort_by(|a, b| {
            a.description
                .to_lowercase()
                .cmp(&b.description.to_lowercase())
        }),
        SortKey::Quantity => items.sort_by(|a, b| b.quantity.cmp(&a.quantity)),
        SortKey::Category => items.sort_by(|a, b| a.category.as_str().cmp(b.category.as_str())),
        SortKey::Packed => items.sort_by_key(|i| i.packed),
    }
}

/// The filtered and sorted sequence for the snapshot's own view settings
#[must_use]
pub fn visible_items(state: &ListState) -> Vec<&Item> {
    let mut items = filter_items(&state.items, state.filter);
    sort_items(&mut items, state.sort);
    items
}

/// One category's slice of a projection
#[derive(Debug)]
pub struct CategoryGroup<'a> {
    /// The shared category
    pub category: Category,
    /// Items in this category, in projection order
    pub items: Vec<&'a Item>,
}

impl CategoryGroup<'_> {
    /// Number of items in the group
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the group is empty (never true for groups built here)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Partitions a projection by category
///
/// Groups appear in first-appearance order of their category within the
/// input; each group keeps the input's internal order.
#[must_use]
pub fn group_by_category<'a>(items: &[&'a Item]) -> Vec<CategoryGroup<'a>> {
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|g| g.category == item.category) {
            Some(group) => group.items.push(item),
            None => groups.push(CategoryGroup {
                category: item.category,
                items: vec![item],
            }),
        }
    }
    groups
}

/// Qualitative packing progress, evaluated in priority order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Everything packed (and the list is non-empty)
    Complete,
    /// At least 75% packed
    NearComplete,
    /// At least 40% packed
    MidProgress,
    /// The list is empty
    Empty,
    /// Anything below 40%
    LowProgress,
}

impl Progress {
    /// The message shown next to the progress figure
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Complete => "All packed! Bon voyage! ✈️",
            Self::NearComplete => "Almost ready to go!",
            Self::MidProgress => "Making good progress…",
            Self::Empty => "Start adding items above",
            Self::LowProgress => "Keep packing!",
        }
    }
}

/// Aggregate statistics over the full (unfiltered) collection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    /// Total number of items
    pub total: usize,
    /// Number of packed items
    pub packed: usize,
    /// Number of items still to pack
    pub remaining: usize,
    /// Rounded percentage packed; 0 for an empty list
    pub percent: usize,
    /// Qualitative progress bucket
    pub progress: Progress,
}

impl Stats {
    /// Computes statistics for a snapshot
    #[must_use]
    pub fn of(state: &ListState) -> Self {
        let total = state.total_count();
        let packed = state.packed_count();
        // Round-half-up, with 0 for the empty list
        let percent = if total == 0 {
            0
        } else {
            (packed * 100 + total / 2) / total
        };

        // First match wins
        let progress = if percent == 100 && total > 0 {
            Progress::Complete
        } else if percent >= 75 {
            Progress::NearComplete
        } else if percent >= 40 {
            Progress::MidProgress
        } else if total == 0 {
            Progress::Empty
        } else {
            Progress::LowProgress
        };

        Self {
            total,
            packed,
            remaining: total - packed,
            percent,
            progress,
        }
    }
}
