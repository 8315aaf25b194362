//! Sinks for the obfuscated record set.
//!
//! The sink format is chosen from the output file extension before any
//! write happens; an unrecognized extension fails the run with nothing on
//! disk. Both sinks render rows through the same cell model so the two
//! formats stay column-for-column identical.

pub mod csv_sink;
pub mod error;
pub mod format;
pub mod row;
pub mod workbook_sink;

pub use error::{OutputError, Result};
pub use format::OutputFormat;

use std::path::Path;

use treeveil_model::ObfuscatedRecord;

/// Writes the record set to `path` in the given format.
///
/// # Errors
///
/// Propagates the underlying sink error.
pub fn write_records(
    path: &Path,
    format: OutputFormat,
    records: &[ObfuscatedRecord],
) -> Result<()> {
    match format {
        OutputFormat::Csv => csv_sink::write_csv(path, records),
        OutputFormat::Workbook => workbook_sink::write_workbook(path, records),
    }
}
