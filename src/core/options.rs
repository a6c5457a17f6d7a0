// CreatorScope - core/options.rs
//
// Filter vocabularies derived from the live collection. These lists are a
// projection of the records they were computed from and must be recomputed
// whenever that collection changes.

use crate::core::model::CreatorRecord;
use crate::util::constants::{ALL_GENRES, ALL_OPTION};
use std::collections::HashSet;

/// `sentinel` followed by the distinct non-blank values of `field`, in
/// first-seen order.
fn derive_options<'a, F>(records: &'a [CreatorRecord], sentinel: &str, field: F) -> Vec<String>
where
    F: Fn(&'a CreatorRecord) -> &'a str,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut options = vec![sentinel.to_string()];
    for value in records.iter().map(field) {
        if value.trim().is_empty() || value == sentinel {
            continue;
        }
        if seen.insert(value) {
            options.push(value.to_string());
        }
    }
    options
}

/// "All" followed by every platform present in `records`.
pub fn derive_platform_options(records: &[CreatorRecord]) -> Vec<String> {
    derive_options(records, ALL_OPTION, CreatorRecord::platform)
}

/// "All" followed by every resolved location present in `records`.
pub fn derive_location_options(records: &[CreatorRecord]) -> Vec<String> {
    derive_options(records, ALL_OPTION, CreatorRecord::location)
}

/// "All Creators" followed by every genre present in `records`.
pub fn derive_genre_options(records: &[CreatorRecord]) -> Vec<String> {
    derive_options(records, ALL_GENRES, |r| r.genre.as_str())
}
