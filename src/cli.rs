//! CLI interface for the resume screener

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Resume extraction and job matching tool")]
#[command(
    long_about = "Extract contact details, skills and sections from PDF/DOCX resumes and score them against job descriptions"
)]
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
    /// Parse a resume and print the extracted record
    Parse {
        /// Path to resume file (PDF, DOCX)
        resume: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        format: String,

        /// Include section bodies in console output
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Score a resume against a job description
    Match {
        /// Path to resume file (PDF, DOCX)
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        format: String,

        /// Include section bodies in console output
        #[arg(short, long)]
        detailed: bool,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show configuration
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
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
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
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format_is_case_insensitive() {
        assert!(matches!(
            parse_output_format("JSON"),
            Ok(OutputFormat::Json)
        ));
        assert!(matches!(
            parse_output_format("console"),
            Ok(OutputFormat::Console)
        ));
        assert!(parse_output_format("yaml").is_err());
    }

    #[test]
    fn test_validate_file_extension_checks_allowed_list() {
        assert!(validate_file_extension(&PathBuf::from("resume.PDF"), &["pdf", "docx"]).is_ok());
        assert!(validate_file_extension(&PathBuf::from("resume.txt"), &["pdf", "docx"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("resume"), &["pdf", "docx"]).is_err());
    }
}
