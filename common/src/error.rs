//! Error types shared by the matcher and the pipeline

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),

    /// A required column is missing from an input sheet.
    #[error("Schema error: {source_name} is missing required column '{column}'")]
    Schema { source_name: String, column: String },

    /// An input sheet has no usable rows.
    #[error("Schema error: {0} has no entries")]
    EmptySheet(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl Error {
    pub fn schema(source_name: impl Into<String>, column: impl Into<String>) -> Self {
        Error::Schema {
            source_name: source_name.into(),
            column: column.into(),
        }
    }
}

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;
