#![deny(unsafe_code)]

//! Spreadsheet source reader built on calamine.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use treeveil_model::Record;

use crate::error::{IngestError, Result};
use crate::header::HeaderMap;
use crate::row::{SourceCell, build_record};

/// Reads the first worksheet of an `.xls`/`.xlsx`/`.ods` workbook.
///
/// # Errors
///
/// Fails on an unreadable workbook, a workbook without a sheet, a missing
/// required column, or a row that fails record building.
pub fn read_workbook_records(path: &Path) -> Result<Vec<Record>> {
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::EmptyTable {
            path: path.to_path_buf(),
        })?
        .map_err(|source| IngestError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;

    let mut header: Option<HeaderMap> = None;
    let mut records = Vec::new();
    let mut row_number = 0usize;
    for row in range.rows() {
        let cells: Vec<SourceCell> = row.iter().map(source_cell).collect();
        if cells.iter().all(|cell| matches!(cell, SourceCell::Empty)) {
            continue;
        }
        match &header {
            None => {
                let names: Vec<String> = cells
                    .iter()
                    .map(|cell| match cell {
                        SourceCell::Text(text) => text.clone(),
                        _ => String::new(),
                    })
                    .collect();
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
    debug!(path = %path.display(), records = records.len(), "workbook read");
    Ok(records)
}

/// Decodes one calamine cell.
///
/// Cell shapes that are neither numeric nor text (booleans, cell errors,
/// native datetimes) read as absent, matching the loose typing of the
/// source format.
fn source_cell(data: &Data) -> SourceCell {
    match data {
        Data::Empty | Data::Bool(_) | Data::Error(_) => SourceCell::Empty,
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => {
            SourceCell::from_text(text)
        }
        Data::Float(value) => SourceCell::Number(*value),
        Data::Int(value) => SourceCell::Number(*value as f64),
        Data::DateTime(_) => SourceCell::Empty,
    }
}
