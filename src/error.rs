use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// An input file does not exist. The binary turns this into a controlled exit.
    #[error("input file not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("line {line}: invalid value {value:?} in column '{column}': {reason}")]
    InvalidField {
        line: u64,
        column: &'static str,
        value: String,
        reason: String,
    },

    #[error("sentiment index has more than one row for {date}")]
    DuplicateSentimentDate { date: NaiveDate },

    #[error("failed to render {}: {message}", path.display())]
    Render { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
