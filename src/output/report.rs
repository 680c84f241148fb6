//! Report structures wrapping an analysis result with run metadata

use crate::processing::analyzer::{AnalysisOptions, AnalysisResult, MatchBand};
use crate::processing::document::RawDocument;
use crate::processing::text_processor::StopWords;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What gets rendered and saved: the score record plus where it came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub result: AnalysisResult,

    /// Feedback band of `result.match_score`
    pub band: MatchBand,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,

    /// Version of the matcher used
    pub matcher_version: String,

    /// Resume source (file path or label)
    pub resume_source: String,

    /// Job description source (file path or "inline")
    pub job_source: String,

    pub resume_word_count: usize,
    pub job_word_count: usize,

    pub vector_stop_words: StopWords,
    pub keyword_stop_words: StopWords,

    pub processing_time_ms: u64,
}

impl AnalysisReport {
    pub fn new(
        result: AnalysisResult,
        resume: &RawDocument,
        job: &RawDocument,
        sources: (&str, &str),
        options: &AnalysisOptions,
        processing_time_ms: u64,
    ) -> Self {
        let band = result.band();
        Self {
            result,
            band,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                matcher_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_source: sources.0.to_string(),
                job_source: sources.1.to_string(),
                resume_word_count: resume.word_count(),
                job_word_count: job.word_count(),
                vector_stop_words: options.vector_stop_words,
                keyword_stop_words: options.keyword_stop_words,
                processing_time_ms,
            },
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_report() -> AnalysisReport {
    let result = AnalysisResult {
        match_score: 34.46,
        missing_keywords: vec!["deep".to_string(), "sql".to_string()],
        qualitative_feedback: Some(MatchBand::NeedsImprovement.feedback().to_string()),
    };
    AnalysisReport::new(
        result,
        &RawDocument::resume("Python developer with machine learning experience"),
        &RawDocument::job_description("Looking for a Python developer with deep learning and SQL skills"),
        ("resumes/jane.pdf", "inline"),
        &AnalysisOptions::default(),
        3,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_metadata() {
        let report = sample_report();
        assert_eq!(report.band, MatchBand::NeedsImprovement);
        assert_eq!(report.metadata.resume_word_count, 6);
        assert_eq!(report.metadata.job_word_count, 11);
        assert_eq!(report.metadata.vector_stop_words, StopWords::English);
        assert_eq!(report.metadata.matcher_version, env!("CARGO_PKG_VERSION"));
    }
}
