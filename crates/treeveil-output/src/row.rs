#![deny(unsafe_code)]

//! Shared row rendering for both sinks.

use treeveil_model::{DateParts, ObfuscatedRecord};

/// One output cell in sink-neutral form.
///
/// Derived calendar fields stay numeric so the workbook sink can write
/// real numbers; the CSV sink renders them as plain digits.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCell {
    Blank,
    Text(String),
    Number(i64),
}

impl SinkCell {
    fn optional_text(value: &Option<String>) -> Self {
        match value {
            Some(text) => Self::Text(text.clone()),
            None => Self::Blank,
        }
    }

    fn optional_number(value: Option<i64>) -> Self {
        match value {
            Some(number) => Self::Number(number),
            None => Self::Blank,
        }
    }

    /// CSV rendering; blanks become empty fields.
    pub fn render(&self) -> String {
        match self {
            Self::Blank => String::new(),
            Self::Text(text) => text.clone(),
            Self::Number(number) => number.to_string(),
        }
    }
}

/// Renders one record in [`treeveil_model::columns::OUTPUT`] order.
pub fn record_cells(record: &ObfuscatedRecord) -> Vec<SinkCell> {
    let mut cells = vec![
        SinkCell::Text(record.id.clone()),
        SinkCell::Text(record.last_name.clone()),
        SinkCell::optional_text(&record.father_id),
        SinkCell::optional_text(&record.mother_id),
        SinkCell::optional_text(&record.webpage),
        SinkCell::optional_text(&record.email),
        SinkCell::Text(record.gender.as_str().to_string()),
        SinkCell::Text(record.status.as_str().to_string()),
    ];
    cells.extend(date_cells(&record.birth));
    cells.extend(date_cells(&record.death));
    cells
}

fn date_cells(parts: &DateParts) -> [SinkCell; 3] {
    [
        SinkCell::optional_number(parts.year.map(i64::from)),
        SinkCell::optional_text(&parts.month),
        SinkCell::optional_number(parts.day.map(i64::from)),
    ]
}
