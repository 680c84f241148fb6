//! Similarity engine: TF-IDF cosine score plus the job keywords missing from the resume

use crate::error::{ExtractionError, Result, ResumeMatcherError};
use crate::input::text_extractor::TextExtractor;
use crate::processing::document::{DocumentOrigin, RawDocument};
use crate::processing::text_processor::{StopWords, TextProcessor};
use crate::processing::tfidf::TfidfVectorizer;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hard ceiling on the number of missing keywords reported
pub const MAX_MISSING_KEYWORDS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Cosine similarity as a percentage (0-100), two decimals
    pub match_score: f64,

    /// Job description words absent from the resume
    pub missing_keywords: Vec<String>,

    pub qualitative_feedback: Option<String>,
}

impl AnalysisResult {
    pub fn band(&self) -> MatchBand {
        MatchBand::from_score(self.match_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchBand {
    NeedsImprovement,
    Good,
    Excellent,
}

impl MatchBand {
    /// `< 50`, `[50, 75)`, `>= 75`
    pub fn from_score(score: f64) -> Self {
        if score >= 75.0 {
            MatchBand::Excellent
        } else if score >= 50.0 {
            MatchBand::Good
        } else {
            MatchBand::NeedsImprovement
        }
    }

    pub fn feedback(&self) -> &'static str {
        match self {
            MatchBand::NeedsImprovement => {
                "Needs improvement: the resume covers little of the job description. Add the missing skills and terminology you can honestly claim."
            }
            MatchBand::Good => {
                "Good match: tailor the resume further by working in the missing keywords."
            }
            MatchBand::Excellent => {
                "Excellent match: the resume already reflects most of the job description."
            }
        }
    }
}

impl fmt::Display for MatchBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchBand::NeedsImprovement => write!(f, "Needs Improvement"),
            MatchBand::Good => write!(f, "Good"),
            MatchBand::Excellent => write!(f, "Excellent"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Stop-word handling for the TF-IDF vocabulary
    pub vector_stop_words: StopWords,

    /// Stop-word handling for the keyword gap, independent of the vector step
    pub keyword_stop_words: StopWords,

    pub missing_keyword_limit: usize,
    pub include_feedback: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            vector_stop_words: StopWords::English,
            keyword_stop_words: StopWords::None,
            missing_keyword_limit: MAX_MISSING_KEYWORDS,
            include_feedback: true,
        }
    }
}

impl AnalysisOptions {
    pub fn validate(&self) -> Result<()> {
        if self.missing_keyword_limit == 0 || self.missing_keyword_limit > MAX_MISSING_KEYWORDS {
            return Err(ResumeMatcherError::Configuration(format!(
                "missing_keyword_limit must be between 1 and {}, got {}",
                MAX_MISSING_KEYWORDS, self.missing_keyword_limit
            )));
        }
        Ok(())
    }
}

/// Stateless apart from its options: every call fits its own vectorizer.
#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    options: AnalysisOptions,
}

impl SimilarityEngine {
    pub fn new(options: AnalysisOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    pub fn analyze(&self, resume_text: &str, job_text: &str) -> Result<AnalysisResult> {
        let processor = TextProcessor::new();

        let match_score = self.match_score(&processor, resume_text, job_text);
        let missing_keywords = self.missing_keywords(&processor, resume_text, job_text);

        let qualitative_feedback = self
            .options
            .include_feedback
            .then(|| MatchBand::from_score(match_score).feedback().to_string());

        info!(
            "Match score {:.2}% with {} missing keywords",
            match_score,
            missing_keywords.len()
        );

        Ok(AnalysisResult {
            match_score,
            missing_keywords,
            qualitative_feedback,
        })
    }

    pub fn analyze_documents(&self, resume: &RawDocument, job: &RawDocument) -> Result<AnalysisResult> {
        if resume.origin() != DocumentOrigin::Resume {
            return Err(ResumeMatcherError::InvalidInput(format!(
                "expected a resume, got a {}",
                resume.origin()
            )));
        }
        if job.origin() != DocumentOrigin::JobDescription {
            return Err(ResumeMatcherError::InvalidInput(format!(
                "expected a job description, got a {}",
                job.origin()
            )));
        }
        self.analyze(resume.content(), job.content())
    }

    /// Scores text handed over by an extractor. A failed extraction is returned as-is
    /// and nothing is vectorized.
    pub fn analyze_extracted(
        &self,
        resume: std::result::Result<String, ExtractionError>,
        job_text: &str,
    ) -> Result<AnalysisResult> {
        let resume_text = resume?;
        self.analyze(&resume_text, job_text)
    }

    pub fn analyze_pdf<E: TextExtractor>(
        &self,
        extractor: &E,
        resume_bytes: &[u8],
        job_text: &str,
    ) -> Result<AnalysisResult> {
        self.analyze_extracted(extractor.extract(resume_bytes), job_text)
    }

    fn match_score(&self, processor: &TextProcessor, resume_text: &str, job_text: &str) -> f64 {
        let vectorizer = TfidfVectorizer::new(processor, self.options.vector_stop_words);
        let matrix = vectorizer.fit_transform(&[resume_text, job_text]);
        debug!("Fitted TF-IDF vocabulary of {} terms", matrix.vocabulary.len());

        let similarity = match (matrix.row(0), matrix.row(1)) {
            (Some(resume), Some(job)) => resume.cosine_similarity(job),
            _ => 0.0,
        };

        round_percentage(similarity * 100.0)
    }

    fn missing_keywords(&self, processor: &TextProcessor, resume_text: &str, job_text: &str) -> Vec<String> {
        let stop_words = self.options.keyword_stop_words;
        let resume_tokens = processor.tokenize_filtered(resume_text, stop_words);
        let job_tokens = processor.tokenize_filtered(job_text, stop_words);

        job_tokens
            .difference(&resume_tokens)
            .take(self.options.missing_keyword_limit)
            .map(str::to_string)
            .collect()
    }
}

/// Scores one resume/job pair with the given options.
pub fn analyze(resume_text: &str, job_text: &str, options: &AnalysisOptions) -> Result<AnalysisResult> {
    SimilarityEngine::new(options.clone())?.analyze(resume_text, job_text)
}

fn round_percentage(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    ((value * 100.0).round() / 100.0).clamp(0.0, 100.0)
}
