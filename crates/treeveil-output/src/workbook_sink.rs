#![deny(unsafe_code)]

//! Excel workbook sink built on rust_xlsxwriter.

use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::debug;

use treeveil_model::{ObfuscatedRecord, columns};

use crate::error::{OutputError, Result};
use crate::row::{SinkCell, record_cells};

/// Writes the record set as a single-sheet workbook.
///
/// The content is OOXML whichever of `.xls`/`.xlsx` the caller picked; the
/// whole file is produced in memory and saved once at the end.
///
/// # Errors
///
/// Fails on any workbook error with the path attached.
pub fn write_workbook(path: &Path, records: &[ObfuscatedRecord]) -> Result<()> {
    build_workbook(records)
        .and_then(|mut workbook| workbook.save(path))
        .map_err(|source| OutputError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), records = records.len(), "workbook written");
    Ok(())
}

fn build_workbook(
    records: &[ObfuscatedRecord],
) -> std::result::Result<Workbook, rust_xlsxwriter::XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("family tree")?;
    for (column, name) in columns::OUTPUT.iter().enumerate() {
        worksheet.write_string(0, column as u16, *name)?;
    }
    for (index, record) in records.iter().enumerate() {
        let row = (index + 1) as u32;
        for (column, cell) in record_cells(record).iter().enumerate() {
            let column = column as u16;
            match cell {
                SinkCell::Blank => {}
                SinkCell::Text(text) => {
                    worksheet.write_string(row, column, text)?;
                }
                SinkCell::Number(number) => {
                    worksheet.write_number(row, column, *number as f64)?;
                }
            }
        }
    }
    Ok(workbook)
}
