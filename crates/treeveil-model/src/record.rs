#![deny(unsafe_code)]

//! Record types on both sides of the obfuscation transform.

/// A date cell as it appears in the source table.
///
/// The shape is decided at ingest time from the source cell type: numeric
/// spreadsheet cells are bare years, non-empty text is a `/`-separated
/// composite, everything else is absent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum DateCell {
    Year(i32),
    Composite(String),
    Absent,
}

impl DateCell {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// One person, as read from the source table.
///
/// `id` and `last_name` are required; a source row missing either is
/// rejected at ingest. Every other field preserves absence as `None` or
/// [`DateCell::Absent`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub id: String,
    pub last_name: String,
    pub gender: Option<i64>,
    pub living: Option<i64>,
    pub birth: DateCell,
    pub death: DateCell,
    pub father_id: Option<String>,
    pub mother_id: Option<String>,
    pub webpage: Option<String>,
    pub email: Option<String>,
}

/// Calendar fields derived from one [`DateCell`].
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DateParts {
    pub year: Option<i32>,
    /// Full English month name ("January".."December").
    pub month: Option<String>,
    pub day: Option<u32>,
}

/// Recoded gender category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

/// Recoded living status. `Unknown` renders as the empty string, distinct
/// from an explicit `Deceased`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LivingStatus {
    Living,
    Deceased,
    Unknown,
}

impl LivingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Living => "Living",
            Self::Deceased => "Deceased",
            Self::Unknown => "",
        }
    }
}

/// One person after obfuscation.
///
/// `id`, `last_name` and the optional reference fields hold lowercase hex
/// digests; the optional fields stay `None` when the source value was
/// absent, never a digest of the empty string.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ObfuscatedRecord {
    pub id: String,
    pub last_name: String,
    pub father_id: Option<String>,
    pub mother_id: Option<String>,
    pub webpage: Option<String>,
    pub email: Option<String>,
    pub gender: Gender,
    pub status: LivingStatus,
    pub birth: DateParts,
    pub death: DateParts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_renders_unknown_as_empty() {
        assert_eq!(LivingStatus::Living.as_str(), "Living");
        assert_eq!(LivingStatus::Deceased.as_str(), "Deceased");
        assert_eq!(LivingStatus::Unknown.as_str(), "");
    }

    #[test]
    fn date_cell_serializes_tagged() {
        let json = serde_json::to_string(&DateCell::Year(1950)).expect("serialize cell");
        assert_eq!(json, r#"{"kind":"Year","value":1950}"#);
        let round: DateCell = serde_json::from_str(&json).expect("deserialize cell");
        assert_eq!(round, DateCell::Year(1950));
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = Record {
            id: "7".to_string(),
            last_name: "Smith".to_string(),
            gender: Some(1),
            living: None,
            birth: DateCell::Composite("15/6/1950".to_string()),
            death: DateCell::Absent,
            father_id: Some("3".to_string()),
            mother_id: None,
            webpage: None,
            email: None,
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: Record = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
