#![deny(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to open workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("unsupported input extension for {path} (expected .csv, .xls, .xlsx or .ods)")]
    UnsupportedInput { path: PathBuf },

    #[error("{path} contains no table")]
    EmptyTable { path: PathBuf },

    #[error("missing required column {column:?}")]
    MissingColumn { column: &'static str },

    #[error("row {row}: required {column:?} value is missing")]
    MissingIdentity { row: usize, column: &'static str },

    #[error("row {row}: {column:?} value {value:?} is not a whole number")]
    InvalidFlag {
        row: usize,
        column: &'static str,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
