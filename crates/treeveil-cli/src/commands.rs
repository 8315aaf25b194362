//! The obfuscation pipeline: resolve format, read, transform, write.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use treeveil_ingest::read_records;
use treeveil_output::{OutputFormat, write_records};
use treeveil_transform::{obfuscate, random_nonce};

use crate::cli::Cli;
use crate::types::{NonceOrigin, RunSummary};

/// One obfuscation request, decoupled from the clap surface so tests can
/// drive the pipeline directly.
#[derive(Debug, Clone)]
pub struct ObfuscateRequest {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub nonce: Option<String>,
    pub dry_run: bool,
}

impl From<&Cli> for ObfuscateRequest {
    fn from(cli: &Cli) -> Self {
        Self {
            input_file: cli.input_file.clone(),
            output_file: cli.output_file.clone(),
            nonce: cli.nonce.clone(),
            dry_run: cli.dry_run,
        }
    }
}

/// Runs one obfuscation pass end to end.
///
/// The output format is resolved before the input is opened so an
/// unsupported extension fails with nothing read and nothing written; any
/// later failure aborts the run before the sink is touched.
pub fn run_obfuscate(request: &ObfuscateRequest) -> Result<RunSummary> {
    let format = OutputFormat::from_path(&request.output_file)
        .context("resolve output format")?;

    let records = {
        let span = info_span!("read", input = %request.input_file.display());
        let _guard = span.enter();
        let records = read_records(&request.input_file).context("read records")?;
        info!(record_count = records.len(), "input loaded");
        records
    };

    let (nonce, nonce_origin) = resolve_nonce(request.nonce.as_deref());

    let obfuscated = {
        let span = info_span!("transform", record_count = records.len());
        let _guard = span.enter();
        obfuscate(&records, &nonce).context("obfuscate records")?
    };

    if request.dry_run {
        info!("output skipped (dry run)");
    } else {
        let span = info_span!("write", output = %request.output_file.display());
        let _guard = span.enter();
        write_records(&request.output_file, format, &obfuscated).context("write output")?;
        info!(record_count = obfuscated.len(), "output written");
    }

    Ok(RunSummary {
        records: obfuscated.len(),
        input_file: request.input_file.clone(),
        output_file: request.output_file.clone(),
        format,
        nonce,
        nonce_origin,
        dry_run: request.dry_run,
    })
}

fn resolve_nonce(supplied: Option<&str>) -> (String, NonceOrigin) {
    match supplied {
        Some(nonce) => (nonce.to_string(), NonceOrigin::Supplied),
        None => (random_nonce(), NonceOrigin::Generated),
    }
}
