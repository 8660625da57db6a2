//! Pure filtering and ordering of a category's items for display.
//!
//! Callers compose filter-then-sort:
//! `sort_items(&filter_items(items, query), order)`. Neither function
//! mutates its input; both return fresh sequences.

use crate::model::{Item, SortOrder};

/// Keeps the items whose name, description, or any tag contains `query` as a
/// case-insensitive substring. A query that trims to empty keeps everything.
/// Relative order of survivors is preserved.
pub fn filter_items(items: &[Item], query: &str) -> Vec<Item> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&term)
                || item.description.to_lowercase().contains(&term)
                || item.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
        })
        .cloned()
        .collect()
}

/// Returns the items ordered per `sort_order`. Alphabetical compares names
/// case-insensitively; the date modes put the newest first. The sort is
/// stable, so ties keep their relative input order.
pub fn sort_items(items: &[Item], sort_order: SortOrder) -> Vec<Item> {
    let mut sorted = items.to_vec();
    match sort_order {
        SortOrder::Alphabetical => {
            sorted.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
        SortOrder::DateAdded => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::DateModified => sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }
    sorted
}
