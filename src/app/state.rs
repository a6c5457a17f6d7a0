// CreatorScope - app/state.rs
//
// Application state management. Holds the catalog snapshot, the active
// genre, the query state and its reset baseline, and the visible result.
// Owned by the presentation layer (the CLI in main.rs).

use crate::app::catalog::Catalog;
use crate::core::filter::QueryState;
use crate::core::model::CreatorRecord;
use crate::util::constants::ALL_GENRES;

/// Outcome of fetching the creator listing.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// No snapshot has arrived yet.
    Loading,
    /// A snapshot is installed and queryable.
    Ready,
    /// The fetch failed; the message is shown instead of results.
    Failed(String),
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Current catalog snapshot.
    pub catalog: Catalog,

    /// Fetch outcome.
    pub load_state: LoadState,

    /// Genre pre-filter ("All Creators" = every genre).
    pub active_genre: String,

    /// Current query configuration.
    pub query: QueryState,

    /// State restored by `reset_filters`; also the baseline for
    /// active-filter detection.
    pub default_query: QueryState,

    /// Indices into `catalog.records()` matching the current query, in
    /// display order.
    pub visible_indices: Vec<usize>,

    /// Status message for the result header.
    pub status_message: String,

    /// Non-fatal warnings accumulated while loading the catalog.
    pub warnings: Vec<String>,
}

impl AppState {
    /// Create initial state. `default_query` comes from config.toml.
    pub fn new(default_query: QueryState) -> Self {
        Self {
            catalog: Catalog::default(),
            load_state: LoadState::Loading,
            active_genre: ALL_GENRES.to_string(),
            query: default_query.clone(),
            default_query,
            visible_indices: Vec::new(),
            status_message: "Loading creators...".to_string(),
            warnings: Vec::new(),
        }
    }

    /// Install a freshly fetched collection and re-run the current query.
    pub fn set_catalog(&mut self, records: Vec<CreatorRecord>) {
        self.warnings = self.catalog.replace(records);
        self.load_state = LoadState::Ready;
        self.apply_query();
    }

    /// Record a failed fetch. Any previous snapshot is discarded.
    pub fn set_load_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!(error = %message, "Failed to load creators");
        self.catalog = Catalog::default();
        self.visible_indices.clear();
        self.status_message = format!("Failed to load creators: {message}");
        self.load_state = LoadState::Failed(message);
    }

    /// Select a genre and re-run the query.
    pub fn set_genre(&mut self, genre: &str) {
        self.active_genre = genre.to_string();
        self.apply_query();
    }

    /// Recompute the visible result from the catalog and query state.
    pub fn apply_query(&mut self) {
        if self.load_state != LoadState::Ready {
            return;
        }
        self.visible_indices = self.catalog.query_indices(&self.active_genre, &self.query);
        let count = self.visible_indices.len();
        self.status_message = format!(
            "{count} creator{} available",
            if count == 1 { "" } else { "s" }
        );
    }

    /// Restore the default filters and clear the search, keeping the genre.
    pub fn reset_filters(&mut self) {
        self.query = self.default_query.clone();
        self.query.search_term.clear();
        self.apply_query();
    }

    /// True when search or any filter differs from the reset state.
    pub fn has_active_filters(&self) -> bool {
        self.query.differs_from(&self.default_query)
    }

    /// Creators in display order.
    pub fn visible(&self) -> Vec<&CreatorRecord> {
        let records = self.catalog.records();
        self.visible_indices
            .iter()
            .filter_map(|&idx| records.get(idx))
            .collect()
    }
}
