//! Error handling for the resume matcher

use thiserror::Error;

/// The upstream document parser could not produce usable text.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("could not extract text from {source_label}: {reason}")]
pub struct ExtractionError {
    pub source_label: String,
    pub reason: String,
}

impl ExtractionError {
    pub fn new(source_label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ResumeMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl ResumeMatcherError {
    /// True when the request failed before scoring because no text could be extracted.
    pub fn is_extraction_failure(&self) -> bool {
        matches!(self, ResumeMatcherError::Extraction(_))
    }
}

pub type Result<T> = std::result::Result<T, ResumeMatcherError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeMatcherError {
    fn from(err: anyhow::Error) -> Self {
        ResumeMatcherError::AnalysisFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_error_is_distinct() {
        let err: ResumeMatcherError = ExtractionError::new("resume.pdf", "not a PDF").into();
        assert!(err.is_extraction_failure());
        assert!(err.to_string().contains("resume.pdf"));
        assert!(err.to_string().contains("not a PDF"));

        let other = ResumeMatcherError::Configuration("bad limit".to_string());
        assert!(!other.is_extraction_failure());
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: ResumeMatcherError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, ResumeMatcherError::AnalysisFailed(ref msg) if msg == "boom"));
    }
}
