//! Result types shared between the command runner and the summary printer.

use std::path::PathBuf;

use treeveil_output::OutputFormat;

/// Where the run's nonce came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonceOrigin {
    /// Passed on the command line.
    Supplied,
    /// Drawn at random because none was passed.
    Generated,
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct RunSummary {
    pub records: usize,
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub format: OutputFormat,
    pub nonce: String,
    pub nonce_origin: NonceOrigin,
    pub dry_run: bool,
}
