// CreatorScope - core/export.rs
//
// CSV and JSON export of a query result view.
// Core layer: writes to any Write trait object.

use crate::core::model::CreatorRecord;
use crate::core::price::extract_min_price;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Reject exports above `max_entries`.
fn check_limit(count: usize, max_entries: usize) -> Result<(), ExportError> {
    if count > max_entries {
        return Err(ExportError::TooManyEntries {
            count,
            max: max_entries,
        });
    }
    Ok(())
}

/// Export creators to CSV format.
///
/// Writes: id, name, genre, platform, location, pricing, min_price,
/// followers, total_views, average_views, tags (semicolon-separated).
pub fn export_csv<W: Write>(
    records: &[&CreatorRecord],
    writer: W,
    export_path: &Path,
    max_entries: usize,
) -> Result<usize, ExportError> {
    check_limit(records.len(), max_entries)?;

    let csv_err = |e: csv::Error| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "id",
            "name",
            "genre",
            "platform",
            "location",
            "pricing",
            "min_price",
            "followers",
            "total_views",
            "average_views",
            "tags",
        ])
        .map_err(csv_err)?;

    let mut count = 0;
    for record in records {
        let min_price = extract_min_price(record.pricing())
            .map(|p| p.to_string())
            .unwrap_or_default();

        csv_writer
            .write_record([
                record.id.as_str(),
                record.name.as_str(),
                record.genre.as_str(),
                record.platform(),
                record.location(),
                record.pricing().unwrap_or(""),
                min_price.as_str(),
                record.followers().to_string().as_str(),
                record.total_views().to_string().as_str(),
                record.average_views().to_string().as_str(),
                record.tags().join(";").as_str(),
            ])
            .map_err(csv_err)?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %export_path.display(), count, "CSV export written");
    Ok(count)
}

/// Export creators to JSON format (array of provider-shaped objects).
pub fn export_json<W: Write>(
    records: &[&CreatorRecord],
    writer: W,
    export_path: &Path,
    max_entries: usize,
) -> Result<usize, ExportError> {
    check_limit(records.len(), max_entries)?;
    serde_json::to_writer_pretty(writer, records).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %export_path.display(), count = records.len(), "JSON export written");
    Ok(records.len())
}
