//! Serializable report assembled at the end of a screening run

use crate::processing::{MatchRecord, MatchResult, ParsedResume, ResumeRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one screening run produced, in wire form. Formatters render
/// this structure and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    /// Extracted resume fields, sentinel filled
    pub resume: ResumeRecord,

    /// Scoring outcome, present only when a job description was supplied
    pub job_match: Option<MatchRecord>,

    /// Report metadata and generation info
    pub metadata: ReportMetadata,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,

    /// Version of the screener used
    pub screener_version: String,

    /// Resume file analyzed
    pub resume_file: String,

    /// Job description file, when one was scored
    pub job_file: Option<String>,

    /// Total processing time
    pub processing_time_ms: u64,
}

impl ScreeningReport {
    /// Report for a parse-only run.
    pub fn from_parse(resume: &ParsedResume, resume_file: &str, processing_time_ms: u64) -> Self {
        Self {
            resume: resume.to_record(),
            job_match: None,
            metadata: Self::metadata(resume_file, None, processing_time_ms),
        }
    }

    /// Report for a parse-and-score run.
    pub fn from_match(
        resume: &ParsedResume,
        outcome: &MatchResult,
        resume_file: &str,
        job_file: &str,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            resume: resume.to_record(),
            job_match: Some(outcome.to_record()),
            metadata: Self::metadata(resume_file, Some(job_file), processing_time_ms),
        }
    }

    fn metadata(
        resume_file: &str,
        job_file: Option<&str>,
        processing_time_ms: u64,
    ) -> ReportMetadata {
        ReportMetadata {
            generated_at: Utc::now(),
            screener_version: env!("CARGO_PKG_VERSION").to_string(),
            resume_file: resume_file.to_string(),
            job_file: job_file.map(|f| f.to_string()),
            processing_time_ms,
        }
    }
}
