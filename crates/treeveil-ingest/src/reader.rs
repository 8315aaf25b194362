#![deny(unsafe_code)]

use std::ffi::OsStr;
use std::path::Path;

use treeveil_model::Record;

use crate::csv_source::read_csv_records;
use crate::error::{IngestError, Result};
use crate::workbook::read_workbook_records;

/// Reads the full record set, selecting the reader by file extension.
///
/// # Errors
///
/// Fails on an unrecognized extension or any reader error; no partial
/// record set is ever returned.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("csv") => read_csv_records(path),
        Some("xls") | Some("xlsx") | Some("ods") => read_workbook_records(path),
        _ => Err(IngestError::UnsupportedInput {
            path: path.to_path_buf(),
        }),
    }
}
