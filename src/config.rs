//! Configuration management for the resume matcher

use crate::error::{Result, ResumeMatcherError};
use crate::processing::analyzer::{AnalysisOptions, MAX_MISSING_KEYWORDS};
use crate::processing::text_processor::StopWords;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub vector_stop_words: StopWords,
    pub keyword_stop_words: StopWords,
    pub missing_keyword_limit: usize,
    pub include_feedback: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        let options = AnalysisOptions::default();
        Self {
            analysis: AnalysisConfig {
                vector_stop_words: options.vector_stop_words,
                keyword_stop_words: options.keyword_stop_words,
                missing_keyword_limit: options.missing_keyword_limit,
                include_feedback: options.include_feedback,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                pretty_json: true,
            },
        }
    }
}

impl Config {
    /// Loads the config at the default location, writing the defaults there first if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeMatcherError::Configuration(format!("Failed to parse config {}: {}", path.display(), e))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-matcher")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let limit = self.analysis.missing_keyword_limit;
        if limit == 0 || limit > MAX_MISSING_KEYWORDS {
            return Err(ResumeMatcherError::Configuration(format!(
                "analysis.missing_keyword_limit must be between 1 and {}, got {}",
                MAX_MISSING_KEYWORDS, limit
            )));
        }
        Ok(())
    }

    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            vector_stop_words: self.analysis.vector_stop_words,
            keyword_stop_words: self.analysis.keyword_stop_words,
            missing_keyword_limit: self.analysis.missing_keyword_limit,
            include_feedback: self.analysis.include_feedback,
        }
    }
}
