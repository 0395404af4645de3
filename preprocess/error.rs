use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PreprocessError {
    #[error("input file has no header row")]
    EmptyInput,
    #[error("no valid identifier found to backfill from")]
    NoValidIdentifier,
}
