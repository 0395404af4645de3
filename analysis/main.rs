//! Descriptive statistics over the cleaned board-game dataset.
//!
//! Stages run in fixed order: mode of the mechanics column, mode of the
//! domains column, means of the three numeric columns (fatal on failure),
//! then the two correlations. A failed correlation is reported and the
//! other one still runs, but the process exits non-zero.

mod error;
mod mode;
mod stats;
mod table;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use error::AnalysisError;
use table::GameTable;

#[derive(Parser)]
#[command(
    name = "analysis",
    about = "Compute mode and correlation statistics over a cleaned board-game dataset"
)]
struct Cli {
    /// Cleaned 14-column tab-separated input file
    input_file: PathBuf,
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

    let text = fs::read_to_string(&cli.input_file)
        .with_context(|| format!("failed to read {}", cli.input_file.display()))?;
    let table = GameTable::parse(&text)?;
    info!(games = table.games.len(), "table loaded");

    let mut failed = false;

    match mode::most_frequent(&table.games, |g| &g.mechanics) {
        Some(m) => println!(
            "The most popular game mechanics is {} found in {} games",
            m.value, m.count
        ),
        None => {
            eprintln!("Error: {}", AnalysisError::NoModeData { column: "mechanics" });
            failed = true;
        }
    }

    match mode::most_frequent(&table.games, |g| &g.domains) {
        Some(m) => println!(
            "The most game domain is {} found in {} games",
            m.value, m.count
        ),
        None => {
            eprintln!("Error: {}", AnalysisError::NoModeData { column: "domains" });
            failed = true;
        }
    }

    // Means are required by both correlations; their failure is fatal
    // before either correlation is attempted.
    let means = stats::required_means(&table.games)?;
    info!(
        year_n = means.year.count,
        rating_n = means.rating.count,
        complexity_n = means.complexity.count,
        "column means ready"
    );

    match stats::pearson(
        &table.games,
        |g| &g.year_published,
        |g| &g.rating_average,
        means.year.mean,
        means.rating.mean,
        "year published / rating average",
    ) {
        Ok(r) => println!(
            "The correlation between the year of publication and the average rating is {r:.3}"
        ),
        Err(err) => {
            eprintln!("Error: {err}");
            failed = true;
        }
    }

    match stats::pearson(
        &table.games,
        |g| &g.complexity_average,
        |g| &g.rating_average,
        means.complexity.mean,
        means.rating.mean,
        "complexity average / rating average",
    ) {
        Ok(r) => println!(
            "The correlation between the complexity of a game and its average rating is {r:.3}"
        ),
        Err(err) => {
            eprintln!("Error: {err}");
            failed = true;
        }
    }

    if failed {
        process::exit(1);
    }
    Ok(())
}
