use thiserror::Error;

#[derive(Error, Debug)]
pub enum VesselMapError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Sheet '{sheet}' not found in {path} (available: {available})")]
    SheetNotFound {
        path: String,
        sheet: String,
        available: String,
    },

    #[error("Failed to read workbook {path}: {message}")]
    ExcelRead { path: String, message: String },

    #[error("Excel generation error: {0}")]
    ExcelGeneration(String),

    #[error("No spreadsheet selected for {0}")]
    NoInputSelected(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] vessel_mapper_common::Error),
}

pub type Result<T> = std::result::Result<T, VesselMapError>;
