use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrateError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON export error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, CrateError>;
