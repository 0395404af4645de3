//! Normalization passes, applied in fixed order.
//!
//! The first three passes work on raw text before any splitting: the
//! separator swap must happen first so the later column-indexed pass sees
//! tab-delimited cells. The decimal pass runs per record and only on data
//! rows, never the header.

use crate::record::Record;

/// 1-based columns whose numeric cells use comma decimals in the raw
/// export (rating average and complexity average).
pub const DECIMAL_COMMA_COLUMNS: [usize; 2] = [9, 11];

/// Replace every occurrence of the source separator with a tab.
pub fn replace_separator(text: &str, separator: &str) -> String {
    text.replace(separator, "\t")
}

/// Drop carriage returns so line endings are LF-only.
pub fn strip_carriage_returns(text: &str) -> String {
    text.replace('\r', "")
}

/// Drop every character outside printable ASCII plus tab/newline/CR.
/// Lossy and silent: the raw export carries stray multi-byte junk that
/// the downstream consumers cannot use.
pub fn sanitize_ascii(text: &str) -> String {
    text.chars()
        .filter(|&c| matches!(c, ' '..='~' | '\t' | '\n' | '\r'))
        .collect()
}

/// Rewrite comma decimals to period decimals in the designated columns,
/// leaving every other column untouched.
pub fn normalize_decimals(record: &mut Record, columns: &[usize]) {
    for &column in columns {
        record.map_cell(column - 1, |cell| cell.replace(',', "."));
    }
}
