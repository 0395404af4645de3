//! Per-column blank-cell diagnostic for a delimited dataset.
//!
//! Read-only: counts cells whose trimmed content is empty, one line of
//! output per header column. Run before analysis to gauge completeness.

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "empty_cells",
    about = "Report per-column blank cell counts for a delimited file"
)]
struct Cli {
    /// Delimited input file (row 1 is the header)
    input_file: PathBuf,
    /// Field separator
    separator: String,
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
    let cli = parse_cli();
    let text = fs::read_to_string(&cli.input_file)
        .with_context(|| format!("failed to read {}", cli.input_file.display()))?;

    let Some((headers, counts)) = blank_counts(&text, &cli.separator) else {
        bail!("input file has no header row");
    };
    for (name, count) in headers.iter().zip(&counts) {
        println!("{name}: {count}");
    }
    Ok(())
}

fn blank_counts(text: &str, separator: &str) -> Option<(Vec<String>, Vec<usize>)> {
    let mut lines = text.lines();
    let headers: Vec<String> = lines
        .next()?
        .split(separator)
        .map(|h| h.trim().to_string())
        .collect();

    let mut counts = vec![0usize; headers.len()];
    for line in lines {
        for (idx, cell) in line.split(separator).enumerate() {
            if idx >= counts.len() {
                break;
            }
            if cell.trim().is_empty() {
                counts[idx] += 1;
            }
        }
    }
    Some((headers, counts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_blank_cells_per_column() {
        let text = "ID;Name;Rating\n1;;7.5\n;Catan;\n3;Azul;8.0\n";
        let (headers, counts) = blank_counts(text, ";").unwrap();
        assert_eq!(headers, vec!["ID", "Name", "Rating"]);
        assert_eq!(counts, vec![1, 1, 1]);
    }

    #[test]
    fn header_row_is_not_counted() {
        let text = "a;;c\n1;2;3\n";
        let (headers, counts) = blank_counts(text, ";").unwrap();
        assert_eq!(headers[1], "");
        assert_eq!(counts, vec![0, 0, 0]);
    }

    #[test]
    fn whitespace_only_cells_are_blank() {
        let text = "a;b\n  ;x\n";
        let (_, counts) = blank_counts(text, ";").unwrap();
        assert_eq!(counts, vec![1, 0]);
    }

    #[test]
    fn empty_file_yields_none() {
        assert!(blank_counts("", ";").is_none());
    }
}
