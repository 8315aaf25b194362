#![deny(unsafe_code)]

//! Extension-driven sink selection.

use std::ffi::OsStr;
use std::path::Path;

use crate::error::{OutputError, Result};

/// Supported sink formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Delimited text, one header row then one row per record.
    Csv,
    /// Excel workbook (written as OOXML for both `.xls` and `.xlsx`).
    Workbook,
}

impl OutputFormat {
    /// Resolves the sink format from the output path.
    ///
    /// Callers resolve this before reading any input so an unsupported
    /// extension fails the run with nothing written.
    ///
    /// # Errors
    ///
    /// Fails on a missing or unrecognized extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("xls") | Some("xlsx") => Ok(Self::Workbook),
            _ => Err(OutputError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Workbook => "workbook",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_supported_extensions() {
        assert_eq!(
            OutputFormat::from_path(Path::new("tree.csv")).expect("csv"),
            OutputFormat::Csv
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("tree.xls")).expect("xls"),
            OutputFormat::Workbook
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("TREE.XLSX")).expect("xlsx"),
            OutputFormat::Workbook
        );
    }

    #[test]
    fn rejects_anything_else() {
        for name in ["tree.txt", "tree.json", "tree"] {
            assert!(
                OutputFormat::from_path(Path::new(name)).is_err(),
                "{name} must be rejected"
            );
        }
    }
}
