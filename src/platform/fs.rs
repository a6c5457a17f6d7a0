// CreatorScope - platform/fs.rs
//
// Catalog snapshot loading from disk. Stands in for the creator-listing
// provider: the result is a plain in-memory collection handed to the app
// layer, or a typed error the presentation layer shows as a failure state.

use crate::core::model::CreatorRecord;
use crate::util::constants::{MAX_CATALOG_FILE_SIZE, MAX_CATALOG_RECORDS};
use crate::util::error::CatalogError;
use serde::Deserialize;
use std::path::Path;

/// Accepted top-level shapes: a bare array, or `{ "creators": [...] }` as
/// returned by the listing API.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<CreatorRecord>),
    Wrapped { creators: Vec<CreatorRecord> },
}

/// Decode catalog JSON already read into memory.
pub fn parse_catalog(content: &str, path: &Path) -> Result<Vec<CreatorRecord>, CatalogError> {
    let document: CatalogDocument =
        serde_json::from_str(content).map_err(|e| CatalogError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;

    let records = match document {
        CatalogDocument::List(records) => records,
        CatalogDocument::Wrapped { creators } => creators,
    };

    if records.len() > MAX_CATALOG_RECORDS {
        return Err(CatalogError::TooManyRecords {
            count: records.len(),
            max: MAX_CATALOG_RECORDS,
        });
    }
    Ok(records)
}

/// Read and decode a catalog file, enforcing the size limit before reading.
pub fn load_catalog(path: &Path) -> Result<Vec<CreatorRecord>, CatalogError> {
    let io_err = |e: std::io::Error| CatalogError::Io {
        path: path.to_path_buf(),
        source: e,
    };

    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > MAX_CATALOG_FILE_SIZE {
        return Err(CatalogError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size: MAX_CATALOG_FILE_SIZE,
        });
    }

    let bytes = std::fs::read(path).map_err(io_err)?;
    let content = String::from_utf8_lossy(&bytes);
    let records = parse_catalog(&content, path)?;

    tracing::info!(path = %path.display(), creators = records.len(), "Catalog loaded");
    Ok(records)
}
