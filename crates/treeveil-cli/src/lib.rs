//! Library surface of the treeveil CLI.
//!
//! The binary in `main.rs` is a thin shell over these modules; keeping the
//! pipeline here lets integration tests drive the exact code the binary
//! runs.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
