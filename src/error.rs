//! Error handling for the resume matcher application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("History error: {0}")]
    History(String),
}

pub type Result<T> = std::result::Result<T, ResumeMatcherError>;

impl ResumeMatcherError {
    /// Whether the error came from reading or decoding an input document
    pub fn is_extraction_failure(&self) -> bool {
        matches!(
            self,
            ResumeMatcherError::Io(_)
                | ResumeMatcherError::PdfExtraction(_)
                | ResumeMatcherError::UnsupportedFormat(_)
                | ResumeMatcherError::InvalidInput(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_failure_classification() {
        assert!(ResumeMatcherError::PdfExtraction("bad xref".to_string()).is_extraction_failure());
        assert!(ResumeMatcherError::UnsupportedFormat("x.xyz".to_string()).is_extraction_failure());
        assert!(!ResumeMatcherError::Configuration("oops".to_string()).is_extraction_failure());
        assert!(!ResumeMatcherError::History("locked".to_string()).is_extraction_failure());
    }
}
