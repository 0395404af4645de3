//! Typed view over the cleaned tab-separated dataset.
//!
//! The fourteen-column shape is the whole schema; making it a named-field
//! struct keeps every consumer off raw positional indexing.

use crate::error::AnalysisError;

pub const COLUMN_COUNT: usize = 14;

#[derive(Debug, Clone, Default)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub year_published: String,
    pub min_players: String,
    pub max_players: String,
    pub play_time: String,
    pub min_age: String,
    pub users_rated: String,
    pub rating_average: String,
    pub bgg_rank: String,
    pub complexity_average: String,
    pub owned_users: String,
    pub mechanics: String,
    pub domains: String,
}

impl Game {
    pub fn from_line(line: &str, line_no: usize) -> Result<Self, AnalysisError> {
        let cells: Vec<&str> = line.split('\t').collect();
        if cells.len() != COLUMN_COUNT {
            return Err(AnalysisError::ColumnCount {
                line: line_no,
                expected: COLUMN_COUNT,
                found: cells.len(),
            });
        }
        Ok(Game {
            id: cells[0].to_string(),
            name: cells[1].to_string(),
            year_published: cells[2].to_string(),
            min_players: cells[3].to_string(),
            max_players: cells[4].to_string(),
            play_time: cells[5].to_string(),
            min_age: cells[6].to_string(),
            users_rated: cells[7].to_string(),
            rating_average: cells[8].to_string(),
            bgg_rank: cells[9].to_string(),
            complexity_average: cells[10].to_string(),
            owned_users: cells[11].to_string(),
            mechanics: cells[12].to_string(),
            domains: cells[13].to_string(),
        })
    }
}

#[derive(Debug)]
pub struct GameTable {
    pub header: Vec<String>,
    pub games: Vec<Game>,
}

impl GameTable {
    pub fn parse(text: &str) -> Result<Self, AnalysisError> {
        let mut lines = text.lines().enumerate();
        let (_, header_line) = lines.next().ok_or(AnalysisError::MissingHeader)?;
        let header: Vec<String> = header_line.split('\t').map(str::to_string).collect();
        if header.len() != COLUMN_COUNT {
            return Err(AnalysisError::ColumnCount {
                line: 1,
                expected: COLUMN_COUNT,
                found: header.len(),
            });
        }

        let games = lines
            .map(|(idx, line)| Game::from_line(line, idx + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GameTable { header, games })
    }
}

/// Parse a numeric cell. Blank cells and cells that fail to parse both
/// yield None so each aggregate can skip them independently.
pub fn numeric(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(cells: &[&str]) -> String {
        cells.join("\t")
    }

    #[test]
    fn parses_a_well_formed_table() {
        let header = line(&[
            "ID",
            "Name",
            "Year Published",
            "Min Players",
            "Max Players",
            "Play Time",
            "Min Age",
            "Users Rated",
            "Rating Average",
            "BGG Rank",
            "Complexity Average",
            "Owned Users",
            "Mechanics",
            "Domains",
        ]);
        let row = line(&[
            "30549",
            "Pandemic",
            "2008",
            "2",
            "4",
            "45",
            "8",
            "102214",
            "7.59",
            "106",
            "2.41",
            "168364",
            "Cooperative Game, Hand Management",
            "Family Games, Strategy Games",
        ]);
        let table = GameTable::parse(&format!("{header}\n{row}\n")).unwrap();
        assert_eq!(table.games.len(), 1);
        let game = &table.games[0];
        assert_eq!(game.name, "Pandemic");
        assert_eq!(game.rating_average, "7.59");
        assert_eq!(game.domains, "Family Games, Strategy Games");
    }

    #[test]
    fn ragged_row_is_rejected_with_its_line_number() {
        let header = line(&["a"; COLUMN_COUNT]);
        let err = GameTable::parse(&format!("{header}\nx\ty\n")).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::ColumnCount {
                line: 2,
                expected: COLUMN_COUNT,
                found: 2
            }
        );
    }

    #[test]
    fn empty_input_has_no_header() {
        assert_eq!(GameTable::parse("").unwrap_err(), AnalysisError::MissingHeader);
    }

    #[test]
    fn numeric_treats_blank_and_malformed_alike() {
        assert_eq!(numeric(" 7.5 "), Some(7.5));
        assert_eq!(numeric(""), None);
        assert_eq!(numeric("   "), None);
        assert_eq!(numeric("n/a"), None);
    }
}
