// CreatorScope - core/sort.rs
//
// Result ordering. Sorting always produces a new vector; the caller's
// sequence is left untouched so the original order stays available.
// All orderings are stable.

use crate::core::model::CreatorRecord;
use crate::core::price::price_for_sort;
use deunicode::deunicode;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Selectable result ordering.
///
/// Parsed leniently from strings: any unrecognised key becomes
/// `SortKey::Original`, which leaves the order unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Most followers first.
    #[default]
    Followers,
    /// Most total views first.
    Views,
    /// Cheapest first; unpriced creators count as free.
    Price,
    /// Alphabetical, case-insensitive, accents folded.
    Name,
    /// Input order.
    Original,
}

impl SortKey {
    /// Returns all variants in display order.
    pub fn all() -> &'static [SortKey] {
        &[
            SortKey::Followers,
            SortKey::Views,
            SortKey::Price,
            SortKey::Name,
            SortKey::Original,
        ]
    }

    /// Key string as accepted on the CLI and in config.toml.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Followers => "followers",
            SortKey::Views => "views",
            SortKey::Price => "price",
            SortKey::Name => "name",
            SortKey::Original => "original",
        }
    }

    /// Parse a key; unknown input yields `Original`.
    pub fn parse(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "followers" => SortKey::Followers,
            "views" => SortKey::Views,
            "price" => SortKey::Price,
            "name" => SortKey::Name,
            _ => SortKey::Original,
        }
    }

    /// True for keys this crate recognises (everything but a fallback).
    pub fn is_known(key: &str) -> bool {
        SortKey::parse(key) != SortKey::Original || key.trim().eq_ignore_ascii_case("original")
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SortKey {
    fn from(key: String) -> Self {
        SortKey::parse(&key)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

/// Per-record ordering value, derived once per sort so the price regex and
/// name folding are not re-run on every comparison.
#[derive(Debug, Clone, PartialEq)]
enum SortValue {
    Descending(f64),
    Ascending(f64),
    Text(String),
    Unordered,
}

impl SortValue {
    fn of(record: &CreatorRecord, key: SortKey) -> Self {
        match key {
            SortKey::Followers => SortValue::Descending(record.followers()),
            SortKey::Views => SortValue::Descending(record.total_views()),
            SortKey::Price => SortValue::Ascending(price_for_sort(record.pricing())),
            SortKey::Name => SortValue::Text(name_key(&record.name)),
            SortKey::Original => SortValue::Unordered,
        }
    }

    fn order(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Descending(a), SortValue::Descending(b)) => b.total_cmp(a),
            (SortValue::Ascending(a), SortValue::Ascending(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Compare two creators under `key`. `Ordering::Equal` for `Original`.
pub fn compare(a: &CreatorRecord, b: &CreatorRecord, key: SortKey) -> Ordering {
    SortValue::of(a, key).order(&SortValue::of(b, key))
}

/// Locale-aware, case-insensitive name key: accents and other scripts are
/// transliterated to ASCII ("Émile" -> "emile") before lower-casing.
fn name_key(name: &str) -> String {
    deunicode(name.trim()).to_lowercase()
}

/// Stable order of `0..len` under `key`, with sort values computed once.
fn sorted_positions<'a, I>(records: I, key: SortKey) -> Vec<usize>
where
    I: Iterator<Item = &'a CreatorRecord>,
{
    let mut keyed: Vec<(SortValue, usize)> = records
        .enumerate()
        .map(|(pos, record)| (SortValue::of(record, key), pos))
        .collect();
    keyed.sort_by(|a, b| a.0.order(&b.0));
    keyed.into_iter().map(|(_, pos)| pos).collect()
}

/// Return `records` reordered by `key`. Stable; never mutates the input.
pub fn sort_creators<'a>(records: &[&'a CreatorRecord], key: SortKey) -> Vec<&'a CreatorRecord> {
    if key == SortKey::Original {
        return records.to_vec();
    }
    sorted_positions(records.iter().copied(), key)
        .into_iter()
        .map(|pos| records[pos])
        .collect()
}

/// Index-based variant of [`sort_creators`]: reorders `indices` into
/// `records` without touching either slice.
pub fn sort_indices(records: &[CreatorRecord], indices: &[usize], key: SortKey) -> Vec<usize> {
    if key == SortKey::Original {
        return indices.to_vec();
    }
    sorted_positions(indices.iter().map(|&idx| &records[idx]), key)
        .into_iter()
        .map(|pos| indices[pos])
        .collect()
}
