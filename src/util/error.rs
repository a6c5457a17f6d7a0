// CreatorScope - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// The query engine itself is total; these errors cover range construction,
// catalog loading and export. Config problems are reported as warnings.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all CreatorScope operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum CreatorScopeError {
    /// Catalog snapshot could not be loaded.
    Catalog(CatalogError),

    /// Query state could not be constructed.
    Filter(FilterError),

    /// Export operation failed.
    Export(ExportError),
}

impl CreatorScopeError {
    /// Process exit code: 2 for an unusable query, 1 for I/O failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Filter(_) => 2,
            Self::Catalog(_) | Self::Export(_) => 1,
        }
    }
}

impl fmt::Display for CreatorScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Catalog(e) => write!(f, "Catalog error: {e}"),
            Self::Filter(e) => write!(f, "Filter error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
        }
    }
}

impl std::error::Error for CreatorScopeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Catalog(e) => Some(e),
            Self::Filter(e) => Some(e),
            Self::Export(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog errors
// ---------------------------------------------------------------------------

/// Errors related to loading a creator catalog snapshot.
#[derive(Debug)]
pub enum CatalogError {
    /// I/O error reading the catalog file.
    Io { path: PathBuf, source: io::Error },

    /// Catalog file exceeds the maximum allowed size.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// The file is not a JSON creator list.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The file holds more records than the configured limit.
    TooManyRecords { count: usize, max: usize },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "I/O error reading catalog '{}': {source}", path.display())
            }
            Self::FileTooLarge {
                path,
                size,
                max_size,
            } => write!(
                f,
                "Catalog '{}' is {size} bytes, exceeds maximum of {max_size} bytes",
                path.display()
            ),
            Self::Json { path, source } => {
                write!(f, "Failed to decode catalog '{}': {source}", path.display())
            }
            Self::TooManyRecords { count, max } => {
                write!(f, "Catalog holds {count} creators, maximum is {max}")
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<CatalogError> for CreatorScopeError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

// ---------------------------------------------------------------------------
// Filter errors
// ---------------------------------------------------------------------------

/// Errors related to building a query state.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A range bound is NaN.
    NotANumber { bound: &'static str },

    /// The lower bound is greater than the upper bound.
    InvertedRange { min: f64, max: f64 },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber { bound } => write!(f, "Range {bound} bound is not a number"),
            Self::InvertedRange { min, max } => {
                write!(f, "Range lower bound {min} is greater than upper bound {max}")
            }
        }
    }
}

impl std::error::Error for FilterError {}

impl From<FilterError> for CreatorScopeError {
    fn from(e: FilterError) -> Self {
        Self::Filter(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Export would exceed maximum entry count.
    TooManyEntries { count: usize, max: usize },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
            Self::TooManyEntries { count, max } => write!(
                f,
                "Export of {count} creators exceeds maximum of {max}. \
                 Apply filters to reduce the result set."
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ExportError> for CreatorScopeError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}
