#![deny(unsafe_code)]

//! Decomposition of composite date cells into calendar fields.
//!
//! Source dates are `/`-separated strings whose last component is always
//! the year. A two-component value is month/year, a three-component value
//! is day/month/year, and the day slot may be blank ("/6/1950" records a
//! month and year only). Numeric cells are bare years.

use chrono::Month;

use treeveil_model::{DateCell, DateParts};

use crate::error::DateError;

/// Derives year, month name and day from one date cell.
///
/// Absent cells yield an all-`None` triplet. Malformed components are
/// data-quality errors, not silently skipped.
///
/// # Errors
///
/// Returns a [`DateError`] when a year, month or day component is present
/// but not numeric, or the month is outside 1-12.
pub fn decompose(cell: &DateCell) -> Result<DateParts, DateError> {
    match cell {
        DateCell::Absent => Ok(DateParts::default()),
        DateCell::Year(year) => Ok(DateParts {
            year: Some(*year),
            ..DateParts::default()
        }),
        DateCell::Composite(text) => decompose_composite(text),
    }
}

fn decompose_composite(text: &str) -> Result<DateParts, DateError> {
    let components: Vec<&str> = text.split('/').map(str::trim).collect();

    // The last component is always the year.
    let year_raw = components[components.len() - 1];
    let year: i32 = year_raw.parse().map_err(|_| DateError::InvalidYear {
        component: year_raw.to_string(),
    })?;

    let month = if components.len() >= 2 {
        Some(month_name(components[components.len() - 2])?)
    } else {
        None
    };

    // Only a three-component composite carries a day, and the slot may be
    // blank when the source recorded month/year alone.
    let day = match components.first() {
        Some(raw) if components.len() >= 3 && !raw.is_empty() => {
            Some(raw.parse::<u32>().map_err(|_| DateError::InvalidDay {
                component: (*raw).to_string(),
            })?)
        }
        _ => None,
    };

    Ok(DateParts {
        year: Some(year),
        month,
        day,
    })
}

/// Maps a month component to its full English name.
fn month_name(raw: &str) -> Result<String, DateError> {
    let number: u32 = raw.parse().map_err(|_| DateError::InvalidMonth {
        component: raw.to_string(),
    })?;
    let month = u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .ok_or(DateError::MonthOutOfRange { month: number })?;
    Ok(month.name().to_string())
}
