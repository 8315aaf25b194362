#![deny(unsafe_code)]

//! Header-row handling shared by both source readers.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use treeveil_model::columns;

use crate::error::{IngestError, Result};

/// Input columns the record builder consumes, keyed case-insensitively.
const RECOGNIZED: &[&str] = &[
    columns::ID,
    columns::LAST_NAME,
    columns::GENDER,
    columns::IS_LIVING,
    columns::DATE_OF_BIRTH,
    columns::DATE_OF_DEATH,
    columns::FATHER_ID,
    columns::MOTHER_ID,
    columns::WEBPAGE,
    columns::EMAIL,
];

/// Strips BOM and outer whitespace, collapses inner runs to single spaces.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Maps recognized column names to their position in the source rows.
#[derive(Debug)]
pub struct HeaderMap {
    indices: BTreeMap<String, usize>,
}

impl HeaderMap {
    /// Builds the map from a normalized header row.
    ///
    /// Columns on the discard list are skipped quietly; columns this tool
    /// has never heard of are skipped with a warning, since an unknown
    /// column may hold identifying text that will not reach the output.
    ///
    /// # Errors
    ///
    /// Fails when the `ID` or `last name` column is absent.
    pub fn from_headers(headers: &[String]) -> Result<Self> {
        let mut indices = BTreeMap::new();
        for (index, header) in headers.iter().enumerate() {
            let name = normalize_header(header);
            if name.is_empty() {
                continue;
            }
            let key = name.to_lowercase();
            if RECOGNIZED.iter().any(|column| column.to_lowercase() == key) {
                indices.entry(key).or_insert(index);
            } else if columns::DISCARDED.contains(&key.as_str()) {
                debug!(column = %name, "dropping free-text column");
            } else {
                warn!(column = %name, "dropping unrecognized column");
            }
        }
        let map = Self { indices };
        for required in [columns::ID, columns::LAST_NAME] {
            if map.index_of(required).is_none() {
                return Err(IngestError::MissingColumn { column: required });
            }
        }
        Ok(map)
    }

    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.indices.get(&column.to_lowercase()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn maps_recognized_columns_case_insensitively() {
        let map = HeaderMap::from_headers(&headers(&["id", "Last Name", "Father's ID"]))
            .expect("header map");
        assert_eq!(map.index_of(columns::ID), Some(0));
        assert_eq!(map.index_of(columns::LAST_NAME), Some(1));
        assert_eq!(map.index_of(columns::FATHER_ID), Some(2));
        assert_eq!(map.index_of(columns::MOTHER_ID), None);
    }

    #[test]
    fn missing_id_column_is_rejected() {
        let err = HeaderMap::from_headers(&headers(&["last name"])).expect_err("must fail");
        assert!(matches!(err, IngestError::MissingColumn { column } if column == columns::ID));
    }

    #[test]
    fn missing_last_name_column_is_rejected() {
        let err = HeaderMap::from_headers(&headers(&["ID"])).expect_err("must fail");
        assert!(
            matches!(err, IngestError::MissingColumn { column } if column == columns::LAST_NAME)
        );
    }

    #[test]
    fn normalize_header_strips_bom_and_collapses_spaces() {
        assert_eq!(normalize_header("\u{feff} last   name "), "last name");
    }

    #[test]
    fn first_occurrence_wins_on_duplicate_headers() {
        let map = HeaderMap::from_headers(&headers(&["ID", "last name", "ID"])).expect("header map");
        assert_eq!(map.index_of(columns::ID), Some(0));
    }
}
