//! Normalize a raw delimited board-game export into a clean
//! tab-separated dataset on stdout.
//!
//! Passes run in order over the whole file:
//!   1. source separator -> tab
//!   2. strip carriage returns
//!   3. drop non-ASCII characters
//!   4. comma -> period decimals in the rating and complexity columns
//! then blank identifiers are backfilled past the existing maximum.

mod backfill;
mod error;
mod passes;
mod record;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use serde::Deserialize;
use tracing::{info, warn};

use record::Record;

#[derive(Parser)]
#[command(
    name = "preprocess",
    about = "Normalize a raw delimited board-game export to tab-separated form"
)]
struct Cli {
    /// Raw delimited input file
    input_file: PathBuf,
    /// Source field separator (falls back to BGG_SEPARATOR, then ';')
    separator: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct Settings {
    separator: Option<String>,
}

fn load_settings() -> Settings {
    Config::builder()
        .add_source(config::Environment::with_prefix("BGG"))
        .build()
        .and_then(|cfg| cfg.try_deserialize())
        .unwrap_or_default()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn parse_cli() -> Cli {
    Cli::try_parse().unwrap_or_else(|err| {
        use clap::error::ErrorKind;
        let _ = err.print();
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => process::exit(0),
            _ => process::exit(1),
        }
    })
}

fn main() -> Result<()> {
    init_tracing();
    let cli = parse_cli();

    let settings = load_settings();
    let separator = resolve_separator(cli.separator, settings);

    let cleaned = process_file(&cli.input_file, &separator, &passes::DECIMAL_COMMA_COLUMNS)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(cleaned.as_bytes())?;
    Ok(())
}

/// CLI argument wins over the environment; the raw export's own default
/// separator is ';'.
fn resolve_separator(from_cli: Option<String>, settings: Settings) -> String {
    from_cli
        .or(settings.separator)
        .unwrap_or_else(|| ";".to_string())
}

fn process_file(path: &Path, separator: &str, decimal_columns: &[usize]) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(run_pipeline(&raw, separator, decimal_columns)?)
}

fn run_pipeline(
    raw: &str,
    separator: &str,
    decimal_columns: &[usize],
) -> Result<String, error::PreprocessError> {
    let text = passes::replace_separator(raw, separator);
    let text = passes::strip_carriage_returns(&text);
    let text = passes::sanitize_ascii(&text);

    let mut lines = text.lines();
    let header = Record::from_line(lines.next().ok_or(error::PreprocessError::EmptyInput)?);
    let mut records: Vec<Record> = lines.map(Record::from_line).collect();

    // The header keeps its cells verbatim; only data rows carry decimals.
    for record in &mut records {
        passes::normalize_decimals(record, decimal_columns);
    }

    for (idx, record) in records.iter().enumerate() {
        if record.column_count() != header.column_count() {
            warn!(
                line = idx + 2,
                expected = header.column_count(),
                found = record.column_count(),
                "ragged row passed through"
            );
        }
    }

    let filled = backfill::backfill_ids(&mut records)?;
    info!(rows = records.len(), backfilled = filled, "normalization complete");

    let mut out = String::with_capacity(text.len());
    out.push_str(&header.to_line());
    out.push('\n');
    for record in &records {
        out.push_str(&record.to_line());
        out.push('\n');
    }
    Ok(out)
}
