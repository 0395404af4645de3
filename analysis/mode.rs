//! Most frequent atomic value of a comma-joined multi-value column.

use std::collections::HashMap;

use itertools::Itertools;

use crate::table::Game;

#[derive(Debug, Clone, PartialEq)]
pub struct Mode {
    pub value: String,
    pub count: usize,
}

/// Count every trimmed atomic value across all rows and return the most
/// frequent one. Ties are broken by ascending lexicographic order of the
/// trimmed value. None when the column holds no values at all.
pub fn most_frequent<'a, F>(games: &'a [Game], column: F) -> Option<Mode>
where
    F: Fn(&'a Game) -> &'a str,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for game in games {
        let cell = column(game);
        if cell.trim().is_empty() {
            continue;
        }
        for piece in cell.split(',') {
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }
            *counts.entry(piece).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)))
        .next()
        .map(|(value, count)| Mode {
            value: value.to_string(),
            count,
        })
}
