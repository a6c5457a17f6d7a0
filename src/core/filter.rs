// CreatorScope - core/filter.rs
//
// Composable filter engine for creator records.
// All active predicates are AND-combined.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::format::{format_followers_bound, format_price_bound};
use crate::core::model::CreatorRecord;
use crate::core::price::extract_min_price;
use crate::core::range::NumericRange;
use crate::core::sort::SortKey;
use crate::util::constants::{ALL_OPTION, MAX_SEARCH_TERM_LENGTH};
use serde::{Deserialize, Serialize};

/// Complete query state. All filters are AND-combined when applied.
///
/// Owned by the presentation layer, which rebuilds it on every change; the
/// engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryState {
    /// Free-text search over name, tags and genre. Blank = no filter.
    pub search_term: String,

    /// Exact platform name, or "All".
    pub platform: String,

    /// Location substring (case-insensitive), or "All".
    pub location: String,

    /// Accepted price range in currency units.
    pub price_range: NumericRange,

    /// Accepted follower range in thousands of followers.
    pub followers_range: NumericRange,

    /// Result ordering.
    pub sort_key: SortKey,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            platform: ALL_OPTION.to_string(),
            location: ALL_OPTION.to_string(),
            price_range: NumericRange::full(),
            followers_range: NumericRange::full(),
            sort_key: SortKey::default(),
        }
    }
}

impl QueryState {
    /// Returns true if no predicate can exclude a record.
    pub fn is_empty(&self) -> bool {
        self.search_term.trim().is_empty()
            && self.platform == ALL_OPTION
            && self.location == ALL_OPTION
            && self.price_range.covers(&NumericRange::full())
            && self.followers_range.covers(&NumericRange::full())
    }

    /// Set the search term, truncating absurdly long input.
    pub fn set_search(&mut self, term: &str) {
        self.search_term = term.chars().take(MAX_SEARCH_TERM_LENGTH).collect();
    }

    /// True when any filter differs from `baseline` (typically the configured
    /// reset state). Sort order is not a filter and is ignored.
    pub fn differs_from(&self, baseline: &QueryState) -> bool {
        self.search_term.trim() != baseline.search_term.trim()
            || self.platform != baseline.platform
            || self.location != baseline.location
            || self.price_range != baseline.price_range
            || self.followers_range != baseline.followers_range
    }

    /// Short labels for every categorical or range filter that differs from
    /// `baseline`, in the order platform, location, price, followers.
    pub fn active_filter_labels(&self, baseline: &QueryState) -> Vec<String> {
        let mut labels = Vec::new();
        if self.platform != ALL_OPTION && self.platform != baseline.platform {
            labels.push(self.platform.clone());
        }
        if self.location != ALL_OPTION && self.location != baseline.location {
            labels.push(self.location.clone());
        }
        if self.price_range != baseline.price_range {
            labels.push(format!(
                "{} - {}",
                format_price_bound(self.price_range.min()),
                format_price_bound(self.price_range.max())
            ));
        }
        if self.followers_range != baseline.followers_range {
            labels.push(format!(
                "{} - {} followers",
                format_followers_bound(self.followers_range.min()),
                format_followers_bound(self.followers_range.max())
            ));
        }
        labels
    }
}

/// Apply filters to a slice of creators, returning indices of survivors.
///
/// Indices are in input order, so the relative order of surviving records is
/// preserved going into the sort stage.
pub fn filtered_indices(records: &[CreatorRecord], state: &QueryState) -> Vec<usize> {
    if state.is_empty() {
        return (0..records.len()).collect();
    }

    let search_lower = state.search_term.trim().to_lowercase();
    let location_lower = state.location.to_lowercase();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_all(record, state, &search_lower, &location_lower))
        .map(|(idx, _)| idx)
        .collect()
}

/// Apply filters to a slice of creators, returning the survivors in input order.
pub fn filter_creators<'a>(records: &'a [CreatorRecord], state: &QueryState) -> Vec<&'a CreatorRecord> {
    filtered_indices(records, state)
        .into_iter()
        .map(|idx| &records[idx])
        .collect()
}

/// Check if a single creator matches all active filters.
fn matches_all(
    record: &CreatorRecord,
    state: &QueryState,
    search_lower: &str,
    location_lower: &str,
) -> bool {
    // Search: name, any tag, or genre
    if !search_lower.is_empty() && !matches_search(record, search_lower) {
        return false;
    }

    // Platform: exact, case-sensitive
    if state.platform != ALL_OPTION && record.platform() != state.platform {
        return false;
    }

    // Location: case-insensitive containment
    if state.location != ALL_OPTION && !record.location().to_lowercase().contains(location_lower) {
        return false;
    }

    // Price: creators without a stated price are never excluded
    if let Some(price) = extract_min_price(record.pricing()) {
        if !state.price_range.contains(price) {
            return false;
        }
    }

    // Followers, compared in thousands
    if !state.followers_range.contains(record.followers_k()) {
        return false;
    }

    true
}

fn matches_search(record: &CreatorRecord, search_lower: &str) -> bool {
    record.name.to_lowercase().contains(search_lower)
        || record
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(search_lower))
        || record.genre.to_lowercase().contains(search_lower)
}
