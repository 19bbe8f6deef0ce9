use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrCodeError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("config error: {0}")]
    ConfigError(#[from] serde_json::Error),
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("malformed payload: {0}")]
    PayloadError(String),
}

pub type Result<T> = std::result::Result<T, BrCodeError>;
