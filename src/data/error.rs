use std::path::PathBuf;

use thiserror::Error;

/// Reasons the dataset could not be loaded.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV missing required column '{0}'")]
    MissingColumn(String),

    #[error("line {line}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },

    #[error("line {line}: empty city name")]
    EmptyCity { line: u64 },
}
