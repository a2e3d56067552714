//! Resume screener: contact, skill and section extraction with job matching

mod cli;
mod config;
mod error;
mod input;
mod model;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{Result, ResumeScreenerError};
use log::{error, info};
use model::{HashingEmbedder, LeadSummarizer};
use output::{error_json, save_report_to_file, ReportGenerator, ScreeningReport};
use processing::{ResumeMatcher, ResumeParser, SkillMatcher};
use std::path::Path;
use std::process;
use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Parse {
            resume,
            format,
            detailed,
            save,
        } => {
            let output_format =
                cli::parse_output_format(&format).map_err(ResumeScreenerError::InvalidInput)?;

            cli::validate_file_extension(&resume, &["pdf", "docx"])
                .map_err(|e| ResumeScreenerError::InvalidInput(format!("Resume file: {}", e)))?;

            info!("Screening resume {}", resume.display());

            let skills = Arc::new(SkillMatcher::new(&config.vocabulary));
            let summarizer = Arc::new(LeadSummarizer);
            let parser = ResumeParser::new(&config, skills, summarizer);

            let started = Instant::now();
            let parsed = match parser.parse(&resume).await {
                Ok(parsed) => parsed,
                Err(e) => return fail(e, &output_format),
            };

            let report = ScreeningReport::from_parse(
                &parsed,
                &resume.to_string_lossy(),
                started.elapsed().as_millis() as u64,
            );

            emit_report(&report, &output_format, detailed, save.as_deref())?;
        }

        Commands::Match {
            resume,
            job,
            format,
            detailed,
            save,
        } => {
            let output_format =
                cli::parse_output_format(&format).map_err(ResumeScreenerError::InvalidInput)?;

            cli::validate_file_extension(&resume, &["pdf", "docx"])
                .map_err(|e| ResumeScreenerError::InvalidInput(format!("Resume file: {}", e)))?;

            cli::validate_file_extension(&job, &["txt", "md"]).map_err(|e| {
                ResumeScreenerError::InvalidInput(format!("Job description file: {}", e))
            })?;

            info!(
                "Screening resume {} against {}",
                resume.display(),
                job.display()
            );

            let skills = Arc::new(SkillMatcher::new(&config.vocabulary));
            let embedder = Arc::new(HashingEmbedder::new(config.models.embedding_dimension));
            let summarizer = Arc::new(LeadSummarizer);
            let parser = ResumeParser::new(&config, Arc::clone(&skills), summarizer);
            let matcher = ResumeMatcher::new(&config.matching, embedder, skills);

            let started = Instant::now();
            let parsed = match parser.parse(&resume).await {
                Ok(parsed) => parsed,
                Err(e) => return fail(e, &output_format),
            };

            let job_text = match tokio::fs::read_to_string(&job).await {
                Ok(text) => text,
                Err(e) => return fail(ResumeScreenerError::Io(e), &output_format),
            };

            let result = matcher.match_resume(&parsed.text, &job_text);

            let report = ScreeningReport::from_match(
                &parsed,
                &result,
                &resume.to_string_lossy(),
                &job.to_string_lossy(),
                started.elapsed().as_millis() as u64,
            );

            emit_report(&report, &output_format, detailed, save.as_deref())?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config file: {}", Config::config_path().display());
                println!("Match threshold: {:.2}", config.matching.match_threshold);
                println!(
                    "Header threshold: {} (max {} words)",
                    config.sections.header_threshold, config.sections.max_header_words
                );
                println!(
                    "Summary bounds: {}-{} characters",
                    config.summary.min_length, config.summary.max_length
                );
                println!(
                    "Embedding dimension: {}",
                    config.models.embedding_dimension
                );
                println!(
                    "Skill vocabulary: {} skills, {} abbreviations",
                    config.vocabulary.skills.len(),
                    config.vocabulary.abbreviations.len()
                );
                println!(
                    "\nWork section keywords: {}",
                    config.sections.work_keywords.join(", ")
                );
                println!(
                    "Education section keywords: {}",
                    config.sections.education_keywords.join(", ")
                );
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

/// Fatal pipeline errors still show up on stdout as a structured object when
/// the caller asked for JSON.
fn fail(e: ResumeScreenerError, format: &OutputFormat) -> Result<()> {
    if matches!(format, OutputFormat::Json) {
        println!("{}", error_json(&e.to_string()));
    }
    Err(e)
}

fn emit_report(
    report: &ScreeningReport,
    format: &OutputFormat,
    detailed: bool,
    save: Option<&Path>,
) -> Result<()> {
    // Color codes would end up in saved files, so disable them there.
    let generator = ReportGenerator::with_options(save.is_none(), detailed, true);
    let content = generator.generate_report(report, format)?;

    match save {
        Some(path) => {
            save_report_to_file(&content, path)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}
