//! Error handling for the resume screener application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeScreenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("No readable text found in {0}")]
    NoReadableText(String),

    #[error("Collaborator unavailable: {0}")]
    CollaboratorUnavailable(String),

    #[error("Text processing error: {0}")]
    TextProcessing(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ResumeScreenerError>;

/// Convert collaborator-boundary anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeScreenerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeScreenerError::CollaboratorUnavailable(err.to_string())
    }
}
