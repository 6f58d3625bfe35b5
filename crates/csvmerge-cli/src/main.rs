// Rust guideline compliant 2026-10-19

//! csvmerge CLI Application
//!
//! Merges CSV files into a single output file.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use csvmerge_cli::{create_formatter, logging};
use csvmerge_core::{HeaderPolicy, MergeConfig, MergeStatus};
use csvmerge_merge::{CsvEngine, CsvMerger};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "csvmerge",
    version,
    about = "Merge CSV files into one",
    long_about = "Merges CSV files, in the order given, into a single output file. When inputs carry a header row, the first file's header is written once and every other header is checked against it.",
    after_help = "Examples:\n  csvmerge -o all.csv a.csv b.csv\n  csvmerge --no-header --buffer-size 65536 -o all.csv part-1.csv part-2.csv\n  csvmerge --delimiter ';' --header-policy lenient -o all.csv a.csv b.csv\n"
)]
struct Cli {
    /// Input CSV files, merged in the order given
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (created or overwritten)
    #[arg(short, long)]
    output: PathBuf,

    /// Reader/writer buffer size in bytes (default 256)
    #[arg(long)]
    buffer_size: Option<usize>,

    /// Treat the first row of each input as a header (overrides config)
    #[arg(long, conflicts_with = "no_header")]
    header: bool,

    /// Treat the first row of each input as data, not a header
    #[arg(long)]
    no_header: bool,

    /// Field delimiter (a single ASCII character)
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    /// How to handle headers that differ from the first file's (strict, lenient)
    #[arg(long, default_value = "strict")]
    header_policy: HeaderPolicy,

    /// Config file path (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the merge status as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn parse_delimiter(s: &str) -> std::result::Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("delimiter must be a single ASCII character, got '{}'", s)),
    }
}

fn run(cli: &Cli) -> Result<MergeStatus> {
    let mut config =
        MergeConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(buffer_size) = cli.buffer_size {
        config.buffer_size = buffer_size;
    }
    if cli.header {
        config.has_header = true;
    }
    if cli.no_header {
        config.has_header = false;
    }
    debug!(?config, header_policy = %cli.header_policy, "resolved configuration");

    let engine = CsvEngine::new()
        .with_delimiter(cli.delimiter)
        .with_header_policy(cli.header_policy);
    let merger = CsvMerger::with_engine(config, engine)?;

    let status = merger.merge(&cli.inputs, &cli.output)?;
    Ok(status)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let formatter = create_formatter(cli.json);
    match run(&cli) {
        Ok(status) => {
            println!("{}", formatter.format_status(&status));
            Ok(())
        }
        Err(e) if cli.json => {
            println!("{}", formatter.format_error(&format!("{:#}", e)));
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}
