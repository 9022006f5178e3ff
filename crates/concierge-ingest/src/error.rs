use thiserror::Error;

/// A field that could not be converted while normalizing one row.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("column {column} has invalid value \"{value}\": {reason}")]
    InvalidField {
        column: &'static str,
        value: String,
        reason: String,
    },
}
