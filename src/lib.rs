//! Resume matcher library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod output;

pub use config::Config;
pub use error::{ExtractionError, Result, ResumeMatcherError};
pub use processing::analyzer::{analyze, AnalysisOptions, AnalysisResult, MatchBand, SimilarityEngine};
pub use processing::text_processor::{tokenize, StopWords};
