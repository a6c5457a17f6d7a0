// CreatorScope - app/catalog.rs
//
// Versioned in-memory catalog snapshot.
//
// The filter vocabularies (platforms, locations, genres) are derived from the
// records and stored alongside them. They are recomputed on every `replace`,
// and the version counter moves with them, so a cached vocabulary can never
// outlive the collection it describes.

use crate::core::filter::QueryState;
use crate::core::model::CreatorRecord;
use crate::core::options::{derive_genre_options, derive_location_options, derive_platform_options};
use crate::core::query::query_indices;
use crate::util::constants::ALL_GENRES;
use rayon::prelude::*;
use std::collections::HashSet;

/// Immutable-between-replacements creator collection.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CreatorRecord>,
    version: u64,
    platform_options: Vec<String>,
    location_options: Vec<String>,
    genre_options: Vec<String>,
}

impl Catalog {
    /// Build a catalog from a freshly fetched collection.
    ///
    /// Returns the catalog and a list of non-fatal data-quality warnings
    /// (duplicate or missing ids). Such records are kept.
    pub fn new(records: Vec<CreatorRecord>) -> (Self, Vec<String>) {
        let mut catalog = Self::default();
        let warnings = catalog.replace(records);
        (catalog, warnings)
    }

    /// Swap in a new collection, bump the version and recompute the
    /// derived vocabularies.
    pub fn replace(&mut self, records: Vec<CreatorRecord>) -> Vec<String> {
        let warnings = validate_ids(&records);

        self.platform_options = derive_platform_options(&records);
        self.location_options = derive_location_options(&records);
        self.genre_options = derive_genre_options(&records);
        self.records = records;
        self.version += 1;

        tracing::info!(
            version = self.version,
            creators = self.records.len(),
            platforms = self.platform_options.len() - 1,
            locations = self.location_options.len() - 1,
            "Catalog snapshot installed"
        );
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        warnings
    }

    pub fn records(&self) -> &[CreatorRecord] {
        &self.records
    }

    /// Increments on every `replace`; 0 for an empty default catalog.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// "All" followed by the platforms present in this snapshot.
    pub fn platform_options(&self) -> &[String] {
        &self.platform_options
    }

    /// "All" followed by the locations present in this snapshot.
    pub fn location_options(&self) -> &[String] {
        &self.location_options
    }

    /// "All Creators" followed by the genres present in this snapshot.
    pub fn genre_options(&self) -> &[String] {
        &self.genre_options
    }

    /// Run `state` against the creators of `genre` ("All Creators" = every
    /// genre). Returns indices into [`Catalog::records`].
    ///
    /// The genre pre-filter is an exact match applied to the engine's output;
    /// since filtering preserves order and sorting is stable, this yields the
    /// same sequence as pre-filtering the collection first.
    pub fn query_indices(&self, genre: &str, state: &QueryState) -> Vec<usize> {
        let mut indices = query_indices(&self.records, state);
        if genre != ALL_GENRES {
            indices.retain(|&idx| self.records[idx].genre == genre);
        }
        indices
    }

    /// Same as [`Catalog::query_indices`], returning the records.
    pub fn query(&self, genre: &str, state: &QueryState) -> Vec<&CreatorRecord> {
        self.query_indices(genre, state)
            .into_iter()
            .map(|idx| &self.records[idx])
            .collect()
    }

    /// Evaluate several query states against this snapshot in parallel.
    /// Results are returned in the order of `states`.
    pub fn query_batch(&self, genre: &str, states: &[QueryState]) -> Vec<Vec<&CreatorRecord>> {
        states
            .par_iter()
            .map(|state| self.query(genre, state))
            .collect()
    }
}

/// Report blank and duplicate ids.
fn validate_ids(records: &[CreatorRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut warnings = Vec::new();
    for (idx, record) in records.iter().enumerate() {
        if record.id.trim().is_empty() {
            warnings.push(format!("Creator at position {idx} ('{}') has no id", record.name));
        } else if !seen.insert(record.id.as_str()) {
            warnings.push(format!("Duplicate creator id '{}' at position {idx}", record.id));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Analytics;
    use crate::core::sort::SortKey;

    fn make_creator(id: &str, genre: &str, platform: &str, followers: f64) -> CreatorRecord {
        CreatorRecord {
            id: id.to_string(),
            name: id.to_string(),
            genre: genre.to_string(),
            platform: Some(platform.to_string()),
            analytics: Some(Analytics {
                followers: Some(followers),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn sample() -> Vec<CreatorRecord> {
        vec![
            make_creator("a", "Tech", "YouTube", 10.0),
            make_creator("b", "Food", "Instagram", 30.0),
            make_creator("c", "Tech", "Instagram", 20.0),
        ]
    }

    #[test]
    fn test_options_derived_on_install() {
        let (catalog, warnings) = Catalog::new(sample());
        assert!(warnings.is_empty());
        assert_eq!(catalog.version(), 1);
        assert_eq!(catalog.platform_options(), ["All", "YouTube", "Instagram"]);
        assert_eq!(catalog.genre_options(), ["All Creators", "Tech", "Food"]);
        assert_eq!(catalog.location_options(), ["All"]);
    }

    #[test]
    fn test_replace_bumps_version_and_recomputes_options() {
        let (mut catalog, _) = Catalog::new(sample());
        catalog.replace(vec![make_creator("z", "Music", "TikTok", 1.0)]);
        assert_eq!(catalog.version(), 2);
        assert_eq!(catalog.platform_options(), ["All", "TikTok"]);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_duplicate_and_blank_ids_warned() {
        let mut records = sample();
        records.push(make_creator("a", "Tech", "YouTube", 5.0));
        records.push(make_creator("", "Tech", "YouTube", 5.0));
        let (catalog, warnings) = Catalog::new(records);
        assert_eq!(catalog.len(), 5);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("Duplicate creator id 'a'"));
    }

    #[test]
    fn test_genre_prefilter() {
        let (catalog, _) = Catalog::new(sample());
        let state = QueryState::default();
        assert_eq!(catalog.query_indices("Tech", &state), vec![2, 0]);
        assert_eq!(catalog.query_indices(ALL_GENRES, &state), vec![1, 2, 0]);
        assert!(catalog.query_indices("Travel", &state).is_empty());
    }

    #[test]
    fn test_query_batch_matches_sequential() {
        let (catalog, _) = Catalog::new(sample());
        let states: Vec<QueryState> = SortKey::all()
            .iter()
            .map(|&sort_key| QueryState {
                sort_key,
                ..Default::default()
            })
            .collect();
        let batch = catalog.query_batch(ALL_GENRES, &states);
        assert_eq!(batch.len(), states.len());
        for (state, result) in states.iter().zip(&batch) {
            assert_eq!(*result, catalog.query(ALL_GENRES, state));
        }
    }
}
