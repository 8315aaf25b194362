#![deny(unsafe_code)]

//! The record-level obfuscation transform.

use treeveil_model::{DateCell, Gender, LivingStatus, ObfuscatedRecord, Record, columns};

use crate::dates::decompose;
use crate::error::{Result, TransformError};
use crate::hash::obfuscate_value;

/// Obfuscates a whole record set with one nonce.
///
/// Pure and non-destructive: the input is borrowed and a new record set is
/// returned. Every identifier-bearing field is hashed with the same nonce,
/// so a hashed parent reference stays equal to the hash of the parent's own
/// id across the whole set. Optional fields that are absent stay absent.
///
/// # Errors
///
/// The first malformed date aborts the whole transform; a partially
/// obfuscated record set is never returned.
pub fn obfuscate(records: &[Record], nonce: &str) -> Result<Vec<ObfuscatedRecord>> {
    records
        .iter()
        .map(|record| obfuscate_record(record, nonce))
        .collect()
}

fn obfuscate_record(record: &Record, nonce: &str) -> Result<ObfuscatedRecord> {
    let birth = decompose(&record.birth).map_err(|source| TransformError::Date {
        record_id: record.id.clone(),
        column: columns::DATE_OF_BIRTH,
        value: date_text(&record.birth),
        source,
    })?;
    let death = decompose(&record.death).map_err(|source| TransformError::Date {
        record_id: record.id.clone(),
        column: columns::DATE_OF_DEATH,
        value: date_text(&record.death),
        source,
    })?;

    let hash = |value: &str| obfuscate_value(value, nonce);
    let hash_if_present = |value: &Option<String>| value.as_deref().map(hash);

    Ok(ObfuscatedRecord {
        id: hash(&record.id),
        last_name: hash(&record.last_name),
        father_id: hash_if_present(&record.father_id),
        mother_id: hash_if_present(&record.mother_id),
        webpage: hash_if_present(&record.webpage),
        email: hash_if_present(&record.email),
        gender: recode_gender(record.gender),
        status: recode_status(record.living),
        birth,
        death,
    })
}

/// Gender code 1 is female; every other code, including an absent one,
/// recodes to male.
fn recode_gender(code: Option<i64>) -> Gender {
    match code {
        Some(1) => Gender::Female,
        _ => Gender::Male,
    }
}

/// Living flag 1 is living, any other defined value is deceased, and an
/// absent flag is the distinct unknown category.
fn recode_status(flag: Option<i64>) -> LivingStatus {
    match flag {
        None => LivingStatus::Unknown,
        Some(1) => LivingStatus::Living,
        Some(_) => LivingStatus::Deceased,
    }
}

fn date_text(cell: &DateCell) -> String {
    match cell {
        DateCell::Composite(text) => text.clone(),
        DateCell::Year(year) => year.to_string(),
        DateCell::Absent => String::new(),
    }
}
