#![deny(unsafe_code)]

//! Delimited-text sink.

use std::path::Path;

use tracing::debug;

use treeveil_model::{ObfuscatedRecord, columns};

use crate::error::{OutputError, Result};
use crate::row::{SinkCell, record_cells};

/// Writes the record set as CSV, header row first.
///
/// # Errors
///
/// Fails on any write error with the path attached.
pub fn write_csv(path: &Path, records: &[ObfuscatedRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|source| csv_error(path, source))?;
    writer
        .write_record(columns::OUTPUT)
        .map_err(|source| csv_error(path, source))?;
    for record in records {
        let row: Vec<String> = record_cells(record).iter().map(SinkCell::render).collect();
        writer
            .write_record(&row)
            .map_err(|source| csv_error(path, source))?;
    }
    writer.flush().map_err(|source| csv_error(path, source.into()))?;
    debug!(path = %path.display(), records = records.len(), "csv written");
    Ok(())
}

fn csv_error(path: &Path, source: csv::Error) -> OutputError {
    OutputError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
