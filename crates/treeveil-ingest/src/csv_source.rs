#![deny(unsafe_code)]

//! Delimited-text source reader.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use treeveil_model::Record;

use crate::error::{IngestError, Result};
use crate::header::HeaderMap;
use crate::row::{SourceCell, build_record};

/// Reads a CSV family-tree table.
///
/// The first non-empty row is the header; fully blank rows are skipped.
///
/// # Errors
///
/// Fails on unreadable or unparseable input, a missing required column, or
/// a row that fails record building.
pub fn read_csv_records(path: &Path) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| csv_error(path, source))?;

    let mut header: Option<HeaderMap> = None;
    let mut records = Vec::new();
    let mut row_number = 0usize;
    for entry in reader.records() {
        let entry = entry.map_err(|source| csv_error(path, source))?;
        let cells: Vec<SourceCell> = entry.iter().map(SourceCell::from_text).collect();
        if cells.iter().all(|cell| matches!(cell, SourceCell::Empty)) {
            continue;
        }
        match &header {
            None => {
                let names: Vec<String> = entry.iter().map(str::to_string).collect();
                header = Some(HeaderMap::from_headers(&names)?);
            }
            Some(map) => {
                row_number += 1;
                records.push(build_record(row_number, &cells, map)?);
            }
        }
    }
    if header.is_none() {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), records = records.len(), "csv table read");
    Ok(records)
}

fn csv_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
