//! Synthetic identifier assignment for rows missing a primary key.
//!
//! Two passes over the data rows: scan for the maximum existing integer
//! identifier, then hand out `max + 1, max + 2, ...` to rows whose
//! identifier cell is blank, in file order. Non-blank identifiers are
//! never rewritten, malformed ones included.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::PreprocessError;
use crate::record::Record;

static ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());

const ID_COLUMN: usize = 0;

pub fn max_existing_id(records: &[Record]) -> u64 {
    records
        .iter()
        .filter_map(|r| r.cell(ID_COLUMN))
        .map(str::trim)
        .filter(|cell| ID_RE.is_match(cell))
        .filter_map(|cell| cell.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
}

/// Fill blank identifier cells, returning how many were assigned.
pub fn backfill_ids(records: &mut [Record]) -> Result<usize, PreprocessError> {
    let mut max = max_existing_id(records);
    if max == 0 {
        return Err(PreprocessError::NoValidIdentifier);
    }

    let mut filled = 0;
    for record in records.iter_mut() {
        if record.is_blank(ID_COLUMN) {
            max += 1;
            record.set_cell(ID_COLUMN, max.to_string());
            filled += 1;
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(lines: &[&str]) -> Vec<Record> {
        lines.iter().map(|l| Record::from_line(l)).collect()
    }

    #[test]
    fn scan_ignores_blank_and_malformed_identifiers() {
        let rows = records(&["7\ta", "\tb", "abc\tc", " 12 \td", "-3\te"]);
        assert_eq!(max_existing_id(&rows), 12);
    }

    #[test]
    fn backfill_assigns_increasing_ids_past_the_maximum() {
        let mut rows = records(&["\ta", "5\tb", "  \tc", "2\td", "\te"]);
        let filled = backfill_ids(&mut rows).unwrap();
        assert_eq!(filled, 3);
        let ids: Vec<&str> = rows.iter().map(|r| r.cell(0).unwrap()).collect();
        assert_eq!(ids, vec!["6", "5", "7", "2", "8"]);
    }

    #[test]
    fn malformed_identifiers_are_left_untouched() {
        let mut rows = records(&["3\ta", "oops\tb"]);
        backfill_ids(&mut rows).unwrap();
        assert_eq!(rows[1].cell(0), Some("oops"));
    }

    #[test]
    fn fails_without_any_valid_identifier() {
        let mut rows = records(&["\ta", "n/a\tb"]);
        assert_eq!(
            backfill_ids(&mut rows),
            Err(PreprocessError::NoValidIdentifier)
        );
    }
}
