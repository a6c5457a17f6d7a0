// CreatorScope - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "CreatorScope";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "CreatorScope";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Filter sentinels
// =============================================================================

/// Categorical filter value meaning "do not filter" (platform, location).
pub const ALL_OPTION: &str = "All";

/// Genre pre-filter value meaning "every genre".
pub const ALL_GENRES: &str = "All Creators";

/// Display label for a creator with no location on record.
pub const UNKNOWN_LOCATION: &str = "Unknown";

// =============================================================================
// Query defaults
// =============================================================================

/// Sort key used when neither the CLI nor config.toml names one.
pub const DEFAULT_SORT_KEY: &str = "followers";

// =============================================================================
// Price heuristics
// =============================================================================

/// Amounts strictly below this value are scaled by `PRICE_K_MULTIPLIER` when
/// the pricing text contains a "k" suffix anywhere ("$1.5k" -> 1500).
pub const PRICE_K_THRESHOLD: f64 = 100.0;

/// Multiplier applied to shorthand "k" amounts.
pub const PRICE_K_MULTIPLIER: f64 = 1_000.0;

/// Divisor converting raw follower counts into the thousands used by the
/// followers range.
pub const FOLLOWERS_UNIT: f64 = 1_000.0;

// =============================================================================
// Catalog limits
// =============================================================================

/// Maximum size of a catalog JSON file in bytes.
pub const MAX_CATALOG_FILE_SIZE: u64 = 64 * 1024 * 1024; // 64 MB

/// Maximum number of creator records accepted from a single catalog file.
pub const MAX_CATALOG_RECORDS: usize = 250_000;

/// Maximum length of a search term; longer input is truncated.
pub const MAX_SEARCH_TERM_LENGTH: usize = 256;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Export
// =============================================================================

/// Maximum number of entries that can be exported in a single operation.
pub const MAX_EXPORT_ENTRIES: usize = 1_000_000;

/// Minimum user-configurable export cap.
pub const MIN_EXPORT_ENTRIES: usize = 1;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
