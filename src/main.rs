//! Resume matcher: TF-IDF resume and job description match scorer

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_matcher::cli::{self, Cli, Commands, ConfigAction};
use resume_matcher::config::Config;
use resume_matcher::input::InputManager;
use resume_matcher::output::{save_report_to_file, AnalysisReport, ReportGenerator};
use resume_matcher::processing::analyzer::SimilarityEngine;
use resume_matcher::processing::document::{DocumentOrigin, RawDocument};
use resume_matcher::{ExtractionError, Result, ResumeMatcherError};
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, config_path).await {
        if e.is_extraction_failure() {
            error!("Could not extract text: {}", e);
            process::exit(2);
        }
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            output,
            save,
            stop_words,
            keyword_stop_words,
            no_feedback,
        } => {
            info!("Starting resume match analysis");

            // A file we cannot read as text is an extraction failure, same as a corrupt one
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ExtractionError::new(resume.display().to_string(), e))?;
            if let Some(job) = &job {
                cli::validate_file_extension(job, &["txt", "md"])
                    .map_err(|e| ExtractionError::new(job.display().to_string(), e))?;
            }

            // CLI flags override the config file
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeMatcherError::InvalidInput)?,
                None => config.output.format,
            };
            let mut options = config.analysis_options();
            if let Some(value) = stop_words {
                options.vector_stop_words = cli::parse_stop_words(&value).map_err(ResumeMatcherError::InvalidInput)?;
            }
            if let Some(value) = keyword_stop_words {
                options.keyword_stop_words = cli::parse_stop_words(&value).map_err(ResumeMatcherError::InvalidInput)?;
            }
            if no_feedback {
                options.include_feedback = false;
            }
            let engine = SimilarityEngine::new(options)?;

            let start_time = Instant::now();
            let input_manager = InputManager::new();

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .map_err(|e| ResumeMatcherError::OutputFormatting(e.to_string()))?,
            );
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner.set_message(format!("Extracting {}", resume.display()));
            let resume_doc = input_manager.load_document(&resume, DocumentOrigin::Resume).await;
            spinner.finish_and_clear();
            let resume_doc = resume_doc?;

            let (job_doc, job_source) = match (job, job_text) {
                (Some(path), _) => (
                    input_manager.load_document(&path, DocumentOrigin::JobDescription).await?,
                    path.display().to_string(),
                ),
                (None, Some(text)) => (RawDocument::job_description(text), "inline".to_string()),
                (None, None) => {
                    return Err(ResumeMatcherError::InvalidInput(
                        "Provide --job or --job-text".to_string(),
                    ))
                }
            };

            let result = engine.analyze_documents(&resume_doc, &job_doc)?;
            let report = AnalysisReport::new(
                result,
                &resume_doc,
                &job_doc,
                (&resume.display().to_string(), &job_source),
                engine.options(),
                start_time.elapsed().as_millis() as u64,
            );

            let generator = ReportGenerator::with_options(config.output.color_output, config.output.pretty_json, true);
            let rendered = generator.generate_report(&report, &output_format)?;
            println!("{}", rendered);

            if let Some(path) = save {
                // Saved files never carry terminal color codes
                let plain = ReportGenerator::with_options(false, config.output.pretty_json, true)
                    .generate_report(&report, &output_format)?;
                save_report_to_file(&plain, &path)?;
                println!("💾 Report saved to {}", path.display());
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("{}", render_config(&config)?);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(&config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

fn render_config(config: &Config) -> anyhow::Result<String> {
    toml::to_string_pretty(config).context("Failed to render configuration")
}
