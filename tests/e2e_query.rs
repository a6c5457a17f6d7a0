// CreatorScope - tests/e2e_query.rs
//
// End-to-end tests for the catalog pipeline.
//
// These tests load a real JSON fixture from disk, install it as a catalog
// snapshot, and run queries through the application state exactly as the
// CLI does. No mocks.

use creatorscope::app::catalog::Catalog;
use creatorscope::app::state::{AppState, LoadState};
use creatorscope::core::export::export_csv;
use creatorscope::core::filter::QueryState;
use creatorscope::core::model::CreatorRecord;
use creatorscope::core::range::NumericRange;
use creatorscope::core::sort::SortKey;
use creatorscope::platform::fs::load_catalog;
use creatorscope::util::constants::{ALL_GENRES, MAX_EXPORT_ENTRIES};
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to an on-disk fixture file.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture() -> Vec<CreatorRecord> {
    load_catalog(&fixture("creators.json")).expect("fixture should load")
}

fn ready_state() -> AppState {
    let mut state = AppState::new(QueryState::default());
    state.set_catalog(load_fixture());
    state
}

fn visible_ids(state: &AppState) -> Vec<String> {
    state.visible().iter().map(|r| r.id.clone()).collect()
}

fn range(min: f64, max: f64) -> NumericRange {
    NumericRange::new(min, max).unwrap()
}

// =============================================================================
// Loading and vocabularies
// =============================================================================

#[test]
fn e2e_fixture_loads_all_creators() {
    let state = ready_state();
    assert_eq!(state.load_state, LoadState::Ready);
    assert!(state.warnings.is_empty(), "{:?}", state.warnings);
    assert_eq!(state.catalog.len(), 7);
    assert_eq!(state.status_message, "7 creators available");
}

#[test]
fn e2e_options_derived_from_fixture() {
    let (catalog, _) = Catalog::new(load_fixture());
    assert_eq!(
        catalog.platform_options(),
        ["All", "Instagram", "YouTube", "TikTok"]
    );
    assert_eq!(
        catalog.location_options(),
        ["All", "Mumbai", "Bangalore", "Navi Mumbai", "Delhi", "Pune", "Singapore"]
    );
    assert_eq!(
        catalog.genre_options(),
        ["All Creators", "Fashion", "Food", "Lifestyle", "Tech", "Fitness", "Travel"]
    );
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn e2e_platform_filter_sorted_by_followers() {
    let mut state = ready_state();
    state.query.platform = "Instagram".to_string();
    state.apply_query();
    assert_eq!(visible_ids(&state), ["c-001", "c-003", "c-007"]);
}

#[test]
fn e2e_location_substring_uses_nested_fallback() {
    let mut state = ready_state();
    state.query.location = "mumbai".to_string();
    state.apply_query();
    assert_eq!(visible_ids(&state), ["c-001", "c-003"]);
}

#[test]
fn e2e_price_range_keeps_unpriced_and_sorts_them_first() {
    let mut state = ready_state();
    state.query.price_range = range(0.0, 2_000.0);
    state.query.sort_key = SortKey::Price;
    state.apply_query();
    assert_eq!(
        visible_ids(&state),
        ["c-003", "c-005", "c-004", "c-006", "c-002", "c-007"]
    );
}

#[test]
fn e2e_followers_range_in_thousands_with_name_sort() {
    let mut state = ready_state();
    state.query.followers_range = range(0.0, 1_000.0);
    state.query.sort_key = SortKey::Name;
    state.apply_query();
    assert_eq!(
        visible_ids(&state),
        ["c-002", "c-003", "c-004", "c-005", "c-006", "c-007"]
    );
}

#[test]
fn e2e_search_spans_name_tags_and_genre() {
    let mut state = ready_state();
    state.query.set_search("cook");
    state.apply_query();
    assert_eq!(visible_ids(&state), ["c-002"]);

    state.query.set_search("TECH");
    state.apply_query();
    assert_eq!(visible_ids(&state), ["c-004", "c-007"]);
}

#[test]
fn e2e_views_sort() {
    let mut state = ready_state();
    state.query.sort_key = SortKey::Views;
    state.apply_query();
    assert_eq!(
        visible_ids(&state),
        ["c-001", "c-004", "c-003", "c-002", "c-006", "c-007", "c-005"]
    );
}

#[test]
fn e2e_genre_prefilter_and_reset() {
    let mut state = ready_state();
    state.set_genre("Tech");
    assert_eq!(visible_ids(&state), ["c-004", "c-007"]);

    state.query.platform = "YouTube".to_string();
    state.apply_query();
    assert!(state.has_active_filters());
    assert_eq!(visible_ids(&state), ["c-004"]);

    state.reset_filters();
    state.set_genre(ALL_GENRES);
    assert!(!state.has_active_filters());
    assert_eq!(state.visible().len(), 7);
}

#[test]
fn e2e_no_match_reports_zero() {
    let mut state = ready_state();
    state.query.platform = "LinkedIn".to_string();
    state.apply_query();
    assert!(state.visible().is_empty());
    assert_eq!(state.status_message, "0 creators available");
}

// =============================================================================
// Failure and export
// =============================================================================

#[test]
fn e2e_missing_catalog_is_failure_state() {
    let mut state = AppState::new(QueryState::default());
    match load_catalog(&fixture("does_not_exist.json")) {
        Ok(records) => state.set_catalog(records),
        Err(e) => state.set_load_failed(e.to_string()),
    }
    assert!(matches!(state.load_state, LoadState::Failed(_)));
    assert!(state.visible().is_empty());
}

#[test]
fn e2e_export_visible_view_to_csv() {
    let mut state = ready_state();
    state.query.platform = "YouTube".to_string();
    state.apply_query();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("youtube.csv");
    let file = std::fs::File::create(&path).unwrap();
    let count = export_csv(&state.visible(), file, &path, MAX_EXPORT_ENTRIES).unwrap();
    assert_eq!(count, 2);

    let written = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("c-004,Dev Tech Reviews"));
    assert!(lines[2].starts_with("c-002,Ben Cooks"));
}
