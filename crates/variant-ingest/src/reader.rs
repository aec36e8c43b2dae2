//! CSV reading into the source table.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use variant_model::SourceTable;

use crate::encoding::decode_export_bytes;
use crate::error::{IngestError, Result};

/// Collapse internal whitespace runs and strip any stray BOM from a header.
fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Whitespace-only cells become missing; any other cell text is kept
/// verbatim. Values differing only by surrounding whitespace are distinct
/// downstream, so non-empty cells must not be trimmed here.
fn normalize_cell(raw: &str) -> Option<String> {
    if raw.trim().trim_matches('\u{feff}').is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Read the export file into a [`SourceTable`].
///
/// Short records are padded with missing cells; long records are truncated
/// to the header width.
pub fn read_source_table(path: &Path) -> Result<SourceTable> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let text = decode_export_bytes(&bytes);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .iter()
        .map(normalize_header)
        .collect();

    if headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut table = SourceTable::new(headers);
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cells = (0..table.headers.len())
            .map(|idx| record.get(idx).and_then(normalize_cell))
            .collect();
        table.push_row(cells);
    }

    debug!(
        path = %path.display(),
        rows = table.rows.len(),
        columns = table.headers.len(),
        "export loaded"
    );
    Ok(table)
}
