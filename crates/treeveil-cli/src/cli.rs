//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "treeveil",
    version,
    about = "Obfuscate a family-tree table with a keyed one-way hash",
    long_about = "Obfuscate a family-tree table for sharing.\n\n\
                  Names, emails, webpages and cross-record ID references are replaced by\n\
                  keyed SHA-1 digests; birth and death dates are reduced to year, month\n\
                  name and day; free-text columns are dropped. The same nonce always\n\
                  produces the same digests, so repeated runs stay consistent."
)]
pub struct Cli {
    /// Input family-tree table (.csv, .xls, .xlsx or .ods).
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Output file; the extension selects the sink (.csv, .xls or .xlsx).
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Nonce mixed into every digest. Omit to generate one; the generated
    /// nonce is printed, and without it the digests cannot be reproduced
    /// on a later run.
    #[arg(long = "nonce", value_name = "NONCE")]
    pub nonce: Option<String>,

    /// Read and transform but write nothing.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_arguments_parse() {
        let cli = Cli::try_parse_from(["treeveil", "in.xls", "out.csv", "--nonce", "xyz"])
            .expect("parse");
        assert_eq!(cli.input_file, PathBuf::from("in.xls"));
        assert_eq!(cli.output_file, PathBuf::from("out.csv"));
        assert_eq!(cli.nonce.as_deref(), Some("xyz"));
        assert!(!cli.dry_run);
    }

    #[test]
    fn nonce_is_optional() {
        let cli = Cli::try_parse_from(["treeveil", "in.csv", "out.csv"]).expect("parse");
        assert_eq!(cli.nonce, None);
    }
}
