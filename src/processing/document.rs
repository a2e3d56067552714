//! Core data structures for parsed resumes and match results

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sentinels for the serialized records. Callers depend on these exact
/// strings, so they live in one place.
pub const NOT_FOUND: &str = "Not Found";
pub const NO_DATA: &str = "No Data";
pub const NO_SKILLS_FOUND: &str = "No Skills Found";
pub const NO_MATCHING_SKILLS_FOUND: &str = "No Matching Skills Found";
pub const SUMMARY_NOT_AVAILABLE: &str = "Summary not available";

/// Contact and profile identifiers. At most one value per field, first match
/// wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

/// Captured section text, `None` when the section header was never found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeSections {
    pub work_experience: Option<String>,
    pub education: Option<String>,
}

/// Everything the pipeline extracted from one resume.
///
/// Internal representation uses options and sets; the sentinel strings appear
/// only in [`ResumeRecord`] at the output boundary.
#[derive(Debug, Clone)]
pub struct ParsedResume {
    pub contact: ContactInfo,
    pub skills: BTreeSet<String>,
    pub sections: ResumeSections,
    pub summary: Option<String>,
    /// Collapsed text, kept for downstream matching.
    pub text: String,
}

/// Wire form of [`ParsedResume`]: every field always present, absent values
/// replaced by sentinels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeRecord {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub skills: Vec<String>,
    pub work_experience: String,
    pub education: String,
    pub summary: String,
    pub text: String,
}

impl ParsedResume {
    pub fn to_record(&self) -> ResumeRecord {
        let skills = if self.skills.is_empty() {
            vec![NO_SKILLS_FOUND.to_string()]
        } else {
            self.skills.iter().cloned().collect()
        };

        ResumeRecord {
            email: self
                .contact
                .email
                .clone()
                .unwrap_or_else(|| NOT_FOUND.to_string()),
            phone: self
                .contact
                .phone
                .clone()
                .unwrap_or_else(|| NOT_FOUND.to_string()),
            linkedin: self
                .contact
                .linkedin
                .clone()
                .unwrap_or_else(|| NOT_FOUND.to_string()),
            github: self
                .contact
                .github
                .clone()
                .unwrap_or_else(|| NOT_FOUND.to_string()),
            skills,
            work_experience: self
                .sections
                .work_experience
                .clone()
                .unwrap_or_else(|| NO_DATA.to_string()),
            education: self
                .sections
                .education
                .clone()
                .unwrap_or_else(|| NO_DATA.to_string()),
            summary: self
                .summary
                .clone()
                .unwrap_or_else(|| SUMMARY_NOT_AVAILABLE.to_string()),
            text: self.text.clone(),
        }
    }
}

/// Outcome of scoring one resume against one job description. Ephemeral, one
/// per scoring call.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub is_match: bool,
    pub score: f32,
    pub matched_skills: BTreeSet<String>,
}

/// Wire form of [`MatchResult`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    #[serde(rename = "match")]
    pub is_match: bool,
    pub score: f32,
    pub matched_skills: Vec<String>,
}

impl MatchResult {
    pub fn to_record(&self) -> MatchRecord {
        let matched_skills = if self.matched_skills.is_empty() {
            vec![NO_MATCHING_SKILLS_FOUND.to_string()]
        } else {
            self.matched_skills.iter().cloned().collect()
        };

        MatchRecord {
            is_match: self.is_match,
            score: self.score,
            matched_skills,
        }
    }
}
