//! Column vocabulary of the family-tree table.
//!
//! Input columns are matched case-insensitively after whitespace
//! normalization, so the constants here are the canonical spellings.

/// Unique record key. Required.
pub const ID: &str = "ID";
/// Surname. Required.
pub const LAST_NAME: &str = "last name";
/// Numeric gender code (1 = female).
pub const GENDER: &str = "gender";
/// Numeric living flag (1 = living, blank = unknown).
pub const IS_LIVING: &str = "is living?";
/// Composite date string, `day/month/year` with optional leading parts.
pub const DATE_OF_BIRTH: &str = "date of birth";
pub const DATE_OF_DEATH: &str = "date of death";
/// Reference to another record's [`ID`].
pub const FATHER_ID: &str = "father's ID";
pub const MOTHER_ID: &str = "mother's ID";
pub const WEBPAGE: &str = "webpage";
pub const EMAIL: &str = "email";

/// Recoded living status in the obfuscated output.
pub const STATUS: &str = "status";
pub const YEAR_OF_BIRTH: &str = "year of birth";
pub const MONTH_OF_BIRTH: &str = "month of birth";
pub const DAY_OF_BIRTH: &str = "day of birth";
pub const YEAR_OF_DEATH: &str = "year of death";
pub const MONTH_OF_DEATH: &str = "month of death";
pub const DAY_OF_DEATH: &str = "day of death";

/// Input columns that carry free text or no derived value and are removed
/// outright. Anything not listed here and not recognized above is dropped
/// too, since an unknown column may hold identifying text.
pub const DISCARDED: &[&str] = &[
    "prefix",
    "suffix",
    "first name",
    "other names",
    "schools",
    "work places",
    "places of living",
    "general",
];

/// Header of the obfuscated output, in sink order.
pub const OUTPUT: &[&str] = &[
    ID,
    LAST_NAME,
    FATHER_ID,
    MOTHER_ID,
    WEBPAGE,
    EMAIL,
    GENDER,
    STATUS,
    YEAR_OF_BIRTH,
    MONTH_OF_BIRTH,
    DAY_OF_BIRTH,
    YEAR_OF_DEATH,
    MONTH_OF_DEATH,
    DAY_OF_DEATH,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_header_excludes_source_only_columns() {
        for dropped in [IS_LIVING, DATE_OF_BIRTH, DATE_OF_DEATH] {
            assert!(!OUTPUT.contains(&dropped), "{dropped} must not be emitted");
        }
        for dropped in DISCARDED {
            assert!(!OUTPUT.contains(dropped), "{dropped} must not be emitted");
        }
    }

    #[test]
    fn output_header_has_no_duplicates() {
        let mut seen = std::collections::BTreeSet::new();
        for column in OUTPUT {
            assert!(seen.insert(column), "duplicate output column {column}");
        }
    }
}
