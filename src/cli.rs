//! CLI interface for the resume matcher

use crate::config::OutputFormat;
use crate::processing::text_processor::StopWords;
use clap::{Parser, Subcommand};
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Score a resume against a job description")]
#[command(long_about = "Compare a resume (PDF, TXT, MD) with a job description using TF-IDF cosine similarity and list the job keywords the resume is missing")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job description
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long, required_unless_present = "job_text", conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description given inline
        #[arg(long)]
        job_text: Option<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Stop words for the similarity score: english, none
        #[arg(long)]
        stop_words: Option<String>,

        /// Stop words for the missing-keyword list: english, none
        #[arg(long)]
        keyword_stop_words: Option<String>,

        /// Omit the qualitative feedback line
        #[arg(long)]
        no_feedback: bool,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown", format)),
    }
}

pub fn parse_stop_words(value: &str) -> Result<StopWords, String> {
    match value.to_lowercase().as_str() {
        "english" | "en" => Ok(StopWords::English),
        "none" | "off" => Ok(StopWords::None),
        _ => Err(format!("Invalid stop-word setting: {}. Supported: english, none", value)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_with_inline_job() {
        let cli = Cli::try_parse_from([
            "resume-matcher", "analyze", "--resume", "cv.pdf", "--job-text", "Rust developer", "-o", "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze { resume, job, job_text, output, .. } => {
                assert_eq!(resume, PathBuf::from("cv.pdf"));
                assert!(job.is_none());
                assert_eq!(job_text.as_deref(), Some("Rust developer"));
                assert_eq!(output.as_deref(), Some("json"));
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_job_source_required_and_exclusive() {
        assert!(Cli::try_parse_from(["resume-matcher", "analyze", "--resume", "cv.pdf"]).is_err());
        assert!(Cli::try_parse_from([
            "resume-matcher", "analyze", "--resume", "cv.pdf", "--job", "job.txt", "--job-text", "x",
        ])
        .is_err());
    }

    #[test]
    fn test_parsers() {
        assert_eq!(parse_output_format("MD"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("html").is_err());
        assert_eq!(parse_stop_words("English"), Ok(StopWords::English));
        assert_eq!(parse_stop_words("none"), Ok(StopWords::None));
        assert!(parse_stop_words("french").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.PDF"), &["pdf", "txt"]).is_ok());
        assert!(validate_file_extension(Path::new("cv.docx"), &["pdf", "txt"]).is_err());
        assert!(validate_file_extension(Path::new("cv"), &["pdf"]).is_err());
    }
}
