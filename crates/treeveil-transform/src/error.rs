#![deny(unsafe_code)]

use thiserror::Error;

/// A malformed component inside one date cell.
///
/// Carries only the offending component; [`TransformError`] adds the record
/// and column context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("year component {component:?} is not a number")]
    InvalidYear { component: String },

    #[error("month component {component:?} is not a number")]
    InvalidMonth { component: String },

    #[error("month {month} is out of range (expected 1-12)")]
    MonthOutOfRange { month: u32 },

    #[error("day component {component:?} is not a number")]
    InvalidDay { component: String },
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("record {record_id}: malformed {column} {value:?}: {source}")]
    Date {
        record_id: String,
        column: &'static str,
        value: String,
        #[source]
        source: DateError,
    },
}

pub type Result<T> = std::result::Result<T, TransformError>;
