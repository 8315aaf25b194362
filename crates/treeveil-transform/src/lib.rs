//! Core obfuscation transform for family-tree records.
//!
//! This crate is pure: given the same input records and the same nonce it
//! always produces the same output, with no I/O and no shared state.
//!
//! - **dates**: decompose a composite date cell into year/month/day
//! - **hash**: deterministic keyed one-way digest for identifying values
//! - **nonce**: random nonce generation behind an injectable `Rng`
//! - **obfuscate**: the record-level transform tying the above together

pub mod dates;
pub mod error;
pub mod hash;
pub mod nonce;
pub mod obfuscate;

pub use dates::decompose;
pub use error::{DateError, TransformError};
pub use hash::obfuscate_value;
pub use nonce::{NONCE_LEN, generate_nonce, random_nonce};
pub use obfuscate::obfuscate;
