//! Output formatters for screening reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ScreeningReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting screening reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and a per-field layout
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping reports into other tools
pub struct JsonFormatter {
    pretty: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!(
                "\n{} {}\n",
                prefix.color(color).bold(),
                title.color(color).bold()
            )
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_verdict(&self, is_match: bool) -> String {
        let (verdict, color) = if is_match {
            ("MATCH", Color::Green)
        } else {
            ("NO MATCH", Color::Red)
        };

        if self.use_colors {
            format!("[{}]", verdict.color(color).bold())
        } else {
            format!("[{}]", verdict)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📋 RESUME SCREENING REPORT", 1));
        output.push_str(&format!(
            "Resume: {} | Generated: {} | Processing time: {}ms\n",
            report.metadata.resume_file,
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("Contact", 2));
        output.push_str(&format!("  📧 Email: {}\n", report.resume.email));
        output.push_str(&format!("  📞 Phone: {}\n", report.resume.phone));
        output.push_str(&format!("  💼 LinkedIn: {}\n", report.resume.linkedin));
        output.push_str(&format!("  🐙 GitHub: {}\n", report.resume.github));

        output.push_str(&self.format_header("Skills", 2));
        output.push_str(&format!("  {}\n", report.resume.skills.join(", ")));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!("  {}\n", report.resume.summary));

        if self.detailed {
            output.push_str(&self.format_header("Work Experience", 2));
            output.push_str(&format!("{}\n", report.resume.work_experience));

            output.push_str(&self.format_header("Education", 2));
            output.push_str(&format!("{}\n", report.resume.education));
        }

        if let Some(job_match) = &report.job_match {
            output.push_str(&self.format_header("Job Match", 2));
            if let Some(job_file) = &report.metadata.job_file {
                output.push_str(&format!("  💼 Job Description: {}\n", job_file));
            }
            output.push_str(&format!(
                "  🎯 Score: {:.1}% {}\n",
                job_match.score * 100.0,
                self.format_verdict(job_match.is_match)
            ));
            output.push_str(&format!(
                "  🔧 Matched Skills: {}\n",
                job_match.matched_skills.join(", ")
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
        }
    }

    pub fn generate_report(&self, report: &ScreeningReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Fatal errors in JSON mode still produce machine-readable output.
pub fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::ReportMetadata;
    use crate::processing::{MatchRecord, ResumeRecord};
    use chrono::Utc;

    fn sample_report(with_match: bool) -> ScreeningReport {
        ScreeningReport {
            resume: ResumeRecord {
                email: "jane@example.com".to_string(),
                phone: "Not Found".to_string(),
                linkedin: "https://linkedin.com/in/janedoe".to_string(),
                github: "Not Found".to_string(),
                skills: vec!["Python".to_string(), "SQL".to_string()],
                work_experience: "Software Engineer at Acme".to_string(),
                education: "No Data".to_string(),
                summary: "Summary not available".to_string(),
                text: "Jane Doe".to_string(),
            },
            job_match: with_match.then(|| MatchRecord {
                is_match: true,
                score: 0.75,
                matched_skills: vec!["Python".to_string()],
            }),
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                screener_version: "0.1.0".to_string(),
                resume_file: "resume.pdf".to_string(),
                job_file: with_match.then(|| "job.txt".to_string()),
                processing_time_ms: 42,
            },
        }
    }

    #[test]
    fn test_console_report_shows_sentinels_verbatim() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&sample_report(false)).unwrap();

        assert!(output.contains("Email: jane@example.com"));
        assert!(output.contains("Phone: Not Found"));
        assert!(output.contains("Summary not available"));
        assert!(output.contains("Python, SQL"));
        assert!(!output.contains("Job Match"));
    }

    #[test]
    fn test_console_report_renders_match_verdict() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&sample_report(true)).unwrap();

        assert!(output.contains("Score: 75.0% [MATCH]"));
        assert!(output.contains("Matched Skills: Python"));
        assert!(output.contains("Job Description: job.txt"));
    }

    #[test]
    fn test_detailed_console_report_includes_section_bodies() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_report(&sample_report(false)).unwrap();

        assert!(output.contains("Work Experience"));
        assert!(output.contains("Software Engineer at Acme"));
    }

    #[test]
    fn test_json_report_uses_match_key() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_report(&sample_report(true)).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["job_match"]["match"], serde_json::Value::Bool(true));
        assert_eq!(value["resume"]["phone"], "Not Found");
    }

    #[test]
    fn test_error_json_is_a_structured_object() {
        let output = error_json("No readable text found in resume.pdf");
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["error"], "No readable text found in resume.pdf");
    }
}
