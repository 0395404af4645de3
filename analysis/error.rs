use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("input file has no header row")]
    MissingHeader,
    #[error("line {line}: expected {expected} columns, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("column '{column}' has no usable numeric values")]
    MissingRequiredData { column: &'static str },
    #[error("not enough paired data to correlate {pair}")]
    InsufficientData { pair: &'static str },
    #[error("column '{column}' has no values to rank")]
    NoModeData { column: &'static str },
}
