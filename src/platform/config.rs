// CreatorScope - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::filter::QueryState;
use crate::core::range::NumericRange;
use crate::core::sort::SortKey;
use crate::util::constants;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for CreatorScope configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/creatorscope/ or %APPDATA%\CreatorScope\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Full path of config.toml inside the config directory.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[query]` section.
    pub query: QuerySection,
    /// `[export]` section.
    pub export: ExportSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[query]` config section: the state restored by "clear filters".
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct QuerySection {
    /// "followers", "views", "price" or "name".
    pub default_sort: Option<String>,
    /// Lower price bound in currency units.
    pub price_min: Option<f64>,
    /// Upper price bound in currency units.
    pub price_max: Option<f64>,
    /// Lower followers bound in thousands.
    pub followers_min: Option<f64>,
    /// Upper followers bound in thousands.
    pub followers_max: Option<f64>,
}

/// `[export]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ExportSection {
    /// Refuse to export more than this many creators.
    pub max_entries: Option<usize>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- Query --
    /// Query state used at startup and restored by a reset.
    pub default_query: QueryState,

    // -- Export --
    /// Maximum creators per export.
    pub max_export_entries: usize,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_query: QueryState {
                sort_key: SortKey::parse(constants::DEFAULT_SORT_KEY),
                ..Default::default()
            },
            max_export_entries: constants::MAX_EXPORT_ENTRIES,
            log_level: None,
            log_file: None,
        }
    }
}

/// Validate an optional `[min, max]` pair from config, falling back to the
/// default bound for any side that is missing.
fn validated_range(
    section_field: &str,
    min: Option<f64>,
    max: Option<f64>,
    default: NumericRange,
    warnings: &mut Vec<String>,
) -> NumericRange {
    if min.is_none() && max.is_none() {
        return default;
    }
    let lo = min.unwrap_or(default.min());
    let hi = max.unwrap_or(default.max());
    if lo < 0.0 {
        warnings.push(format!(
            "[query] {section_field}_min = {lo} is negative. Using default range."
        ));
        return default;
    }
    match NumericRange::new(lo, hi) {
        Ok(range) => range,
        Err(e) => {
            warnings.push(format!(
                "[query] {section_field}_min/{section_field}_max are invalid: {e}. Using default range."
            ));
            default
        }
    }
}

/// Parse and validate config.toml content.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
pub fn parse_config(content: &str, config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    let raw: RawConfig = match toml::from_str(content) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    // Validate each field against named constants, accumulating all errors.
    let mut config = AppConfig::default();

    // -- Query: default_sort --
    if let Some(ref sort) = raw.query.default_sort {
        if SortKey::is_known(sort) {
            config.default_query.sort_key = SortKey::parse(sort);
        } else {
            warnings.push(format!(
                "[query] default_sort = \"{sort}\" is not recognised. \
                 Valid values: followers, views, price, name, original. Using default ({}).",
                constants::DEFAULT_SORT_KEY,
            ));
        }
    }

    // -- Query: price and followers ranges --
    config.default_query.price_range = validated_range(
        "price",
        raw.query.price_min,
        raw.query.price_max,
        NumericRange::full(),
        &mut warnings,
    );
    config.default_query.followers_range = validated_range(
        "followers",
        raw.query.followers_min,
        raw.query.followers_max,
        NumericRange::full(),
        &mut warnings,
    );

    // -- Export: max_entries --
    if let Some(max) = raw.export.max_entries {
        if (constants::MIN_EXPORT_ENTRIES..=constants::MAX_EXPORT_ENTRIES).contains(&max) {
            config.max_export_entries = max;
        } else {
            warnings.push(format!(
                "[export] max_entries = {max} is out of range ({}-{}). Using default ({}).",
                constants::MIN_EXPORT_ENTRIES,
                constants::MAX_EXPORT_ENTRIES,
                constants::MAX_EXPORT_ENTRIES,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    // -- Logging: file --
    if let Some(ref file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(file.clone());
        }
    }

    (config, warnings)
}

/// Load and validate config.toml from `config_path`.
///
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning;
/// the application still starts but the user is informed.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), Vec::new());
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            return (AppConfig::default(), vec![msg]);
        }
    };

    let (config, warnings) = parse_config(&content, config_path);
    tracing::info!(path = %config_path.display(), "Loaded config.toml");
    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }
    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(content: &str) -> (AppConfig, Vec<String>) {
        parse_config(content, Path::new("config.toml"))
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let (config, warnings) = parse("");
        assert!(warnings.is_empty());
        assert_eq!(config.default_query, AppConfig::default().default_query);
        assert_eq!(config.default_query.sort_key, SortKey::Followers);
        assert_eq!(config.max_export_entries, constants::MAX_EXPORT_ENTRIES);
    }

    #[test]
    fn test_query_section_applied() {
        let (config, warnings) = parse(
            r#"
            [query]
            default_sort = "price"
            price_min = 0
            price_max = 10000
            followers_max = 1000

            [logging]
            level = "DEBUG"
            "#,
        );
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.default_query.sort_key, SortKey::Price);
        assert_eq!(config.default_query.price_range.max(), 10_000.0);
        assert_eq!(config.default_query.followers_range.min(), 0.0);
        assert_eq!(config.default_query.followers_range.max(), 1_000.0);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_invalid_values_fall_back_with_warnings() {
        let (config, warnings) = parse(
            r#"
            [query]
            default_sort = "rating"
            price_min = 500
            price_max = 100
            followers_min = -1

            [export]
            max_entries = 0

            [logging]
            level = "loud"
            "#,
        );
        assert_eq!(warnings.len(), 5, "{warnings:?}");
        assert_eq!(config.default_query, AppConfig::default().default_query);
        assert_eq!(config.max_export_entries, constants::MAX_EXPORT_ENTRIES);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_unparseable_config_returns_defaults() {
        let (config, warnings) = parse("[query\nnot toml");
        assert_eq!(warnings.len(), 1);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_missing_file_is_silent() {
        let dir = TempDir::new().unwrap();
        let (_, warnings) = load_config(&dir.path().join("config.toml"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[export]\nmax_entries = 50\n").unwrap();
        let (config, warnings) = load_config(&path);
        assert!(warnings.is_empty());
        assert_eq!(config.max_export_entries, 50);
    }
}
