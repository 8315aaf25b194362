#![deny(unsafe_code)]

//! Row-to-record building shared by both source readers.

use treeveil_model::{DateCell, Record, columns};

use crate::error::{IngestError, Result};
use crate::header::HeaderMap;

/// One source cell after reader-specific decoding.
///
/// Workbook cells keep their numeric type; CSV cells are text or empty.
/// This is where the date-cell tagging happens: a numeric date cell is a
/// bare year, text is a composite, anything else is absent.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceCell {
    Empty,
    Text(String),
    Number(f64),
}

impl SourceCell {
    /// Wraps trimmed text, mapping blank to `Empty`.
    pub fn from_text(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('\u{feff}');
        if trimmed.is_empty() {
            Self::Empty
        } else {
            Self::Text(trimmed.to_string())
        }
    }

    fn text(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Text(text) => Some(text.clone()),
            Self::Number(value) => Some(format_number(*value)),
        }
    }
}

/// Renders a numeric cell the way the source meant it: whole values print
/// without a fractional part so a numeric ID cell and a text ID cell hash
/// to the same digest.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

/// Builds one [`Record`] from a source row.
///
/// `row` is the 1-based data row number used in error messages.
///
/// # Errors
///
/// Fails when `ID` or `last name` is blank, or a gender/living flag is not
/// a whole number.
pub fn build_record(row: usize, cells: &[SourceCell], header: &HeaderMap) -> Result<Record> {
    let optional_text = |column: &str| cell_at(cells, header, column).text();
    let required_text = |column: &'static str| {
        cell_at(cells, header, column)
            .text()
            .ok_or(IngestError::MissingIdentity { row, column })
    };

    Ok(Record {
        id: required_text(columns::ID)?,
        last_name: required_text(columns::LAST_NAME)?,
        gender: flag(row, columns::GENDER, cell_at(cells, header, columns::GENDER))?,
        living: flag(row, columns::IS_LIVING, cell_at(cells, header, columns::IS_LIVING))?,
        birth: date_cell(cell_at(cells, header, columns::DATE_OF_BIRTH)),
        death: date_cell(cell_at(cells, header, columns::DATE_OF_DEATH)),
        father_id: optional_text(columns::FATHER_ID),
        mother_id: optional_text(columns::MOTHER_ID),
        webpage: optional_text(columns::WEBPAGE),
        email: optional_text(columns::EMAIL),
    })
}

/// Looks up one cell by column name; columns the source lacks and cells a
/// short row lacks both read as empty.
fn cell_at<'a>(cells: &'a [SourceCell], header: &HeaderMap, column: &str) -> &'a SourceCell {
    header
        .index_of(column)
        .and_then(|index| cells.get(index))
        .unwrap_or(&SourceCell::Empty)
}

fn date_cell(cell: &SourceCell) -> DateCell {
    match cell {
        SourceCell::Empty => DateCell::Absent,
        SourceCell::Text(text) => DateCell::Composite(text.clone()),
        SourceCell::Number(value) => DateCell::Year(*value as i32),
    }
}

/// Parses a numeric flag column, tolerating the `1.0` spelling spreadsheet
/// exports produce.
fn flag(row: usize, column: &'static str, cell: &SourceCell) -> Result<Option<i64>> {
    let invalid = |value: &str| IngestError::InvalidFlag {
        row,
        column,
        value: value.to_string(),
    };
    match cell {
        SourceCell::Empty => Ok(None),
        SourceCell::Number(value) if value.fract() == 0.0 => Ok(Some(*value as i64)),
        SourceCell::Number(value) => Err(invalid(&value.to_string())),
        SourceCell::Text(text) => match text.parse::<i64>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => match text.parse::<f64>() {
                Ok(value) if value.fract() == 0.0 => Ok(Some(value as i64)),
                _ => Err(invalid(text)),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> HeaderMap {
        let names: Vec<String> = [
            columns::ID,
            columns::LAST_NAME,
            columns::GENDER,
            columns::IS_LIVING,
            columns::DATE_OF_BIRTH,
            columns::FATHER_ID,
        ]
        .iter()
        .map(|name| (*name).to_string())
        .collect();
        HeaderMap::from_headers(&names).expect("header map")
    }

    fn text(raw: &str) -> SourceCell {
        SourceCell::from_text(raw)
    }

    #[test]
    fn builds_a_typed_record() {
        let cells = vec![
            text("7"),
            text("Smith"),
            text("1"),
            text("1.0"),
            text("15/6/1950"),
            text("3"),
        ];
        let record = build_record(1, &cells, &header()).expect("record");
        assert_eq!(record.id, "7");
        assert_eq!(record.last_name, "Smith");
        assert_eq!(record.gender, Some(1));
        assert_eq!(record.living, Some(1));
        assert_eq!(record.birth, DateCell::Composite("15/6/1950".to_string()));
        assert_eq!(record.death, DateCell::Absent);
        assert_eq!(record.father_id.as_deref(), Some("3"));
        assert_eq!(record.mother_id, None);
    }

    #[test]
    fn numeric_date_cell_becomes_a_bare_year() {
        let cells = vec![
            text("7"),
            text("Smith"),
            SourceCell::Empty,
            SourceCell::Empty,
            SourceCell::Number(1950.0),
        ];
        let record = build_record(1, &cells, &header()).expect("record");
        assert_eq!(record.birth, DateCell::Year(1950));
    }

    #[test]
    fn numeric_id_cell_formats_without_fraction() {
        let cells = vec![SourceCell::Number(7.0), text("Smith")];
        let record = build_record(1, &cells, &header()).expect("record");
        assert_eq!(record.id, "7");
    }

    #[test]
    fn short_row_reads_as_absent_cells() {
        let cells = vec![text("7"), text("Smith")];
        let record = build_record(1, &cells, &header()).expect("record");
        assert_eq!(record.gender, None);
        assert_eq!(record.birth, DateCell::Absent);
    }

    #[test]
    fn blank_id_is_a_data_integrity_failure() {
        let cells = vec![text(""), text("Smith")];
        let err = build_record(4, &cells, &header()).expect_err("must fail");
        assert!(
            matches!(err, IngestError::MissingIdentity { row: 4, column } if column == columns::ID)
        );
    }

    #[test]
    fn blank_last_name_is_a_data_integrity_failure() {
        let cells = vec![text("7"), SourceCell::Empty];
        let err = build_record(2, &cells, &header()).expect_err("must fail");
        assert!(matches!(
            err,
            IngestError::MissingIdentity { row: 2, column } if column == columns::LAST_NAME
        ));
    }

    #[test]
    fn non_numeric_flag_is_rejected() {
        let cells = vec![text("7"), text("Smith"), text("yes")];
        let err = build_record(1, &cells, &header()).expect_err("must fail");
        assert!(matches!(
            err,
            IngestError::InvalidFlag { column, .. } if column == columns::GENDER
        ));
    }
}
