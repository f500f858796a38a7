//! Error handling for the job applier application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobApplierError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Ollama unavailable: {0}")]
    LlmUnavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Job source error: {0}")]
    JobSource(String),

    #[error("{0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, JobApplierError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for JobApplierError {
    fn from(err: anyhow::Error) -> Self {
        JobApplierError::Unknown(err.to_string())
    }
}
