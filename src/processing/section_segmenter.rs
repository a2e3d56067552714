//! Fuzzy-header section segmentation

use crate::config::SectionConfig;
use crate::processing::document::ResumeSections;
use crate::processing::fuzzy::{HeaderSimilarity, PartialRatio};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    WorkExperience,
    Education,
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectionKind::WorkExperience => write!(f, "work_experience"),
            SectionKind::Education => write!(f, "education"),
        }
    }
}

enum CaptureState {
    Seeking,
    Capturing,
    Done,
}

/// Splits the line-preserving text into named sections.
///
/// Each section kind gets its own full scan: seek a short line that fuzzily
/// matches one of the kind's keywords, capture following lines, stop when a
/// line matches the other kind's keywords. The two scans share no state, so
/// keyword order in one never affects the other.
pub struct SectionSegmenter {
    work_keywords: Vec<String>,
    education_keywords: Vec<String>,
    header_threshold: u8,
    max_header_words: usize,
    similarity: Box<dyn HeaderSimilarity>,
}

impl SectionSegmenter {
    pub fn new(config: &SectionConfig) -> Self {
        Self::with_similarity(config, Box::new(PartialRatio))
    }

    /// Swap in a different similarity scorer, mostly for tests and tuning.
    pub fn with_similarity(config: &SectionConfig, similarity: Box<dyn HeaderSimilarity>) -> Self {
        Self {
            work_keywords: config.work_keywords.clone(),
            education_keywords: config.education_keywords.clone(),
            header_threshold: config.header_threshold,
            max_header_words: config.max_header_words,
            similarity,
        }
    }

    pub fn segment(&self, line_text: &str) -> ResumeSections {
        ResumeSections {
            work_experience: self.extract(line_text, SectionKind::WorkExperience),
            education: self.extract(line_text, SectionKind::Education),
        }
    }

    pub fn extract(&self, line_text: &str, kind: SectionKind) -> Option<String> {
        let (own, other) = match kind {
            SectionKind::WorkExperience => (&self.work_keywords, &self.education_keywords),
            SectionKind::Education => (&self.education_keywords, &self.work_keywords),
        };

        let mut state = CaptureState::Seeking;
        let mut captured: Vec<&str> = Vec::new();

        for line in line_text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match state {
                CaptureState::Seeking => {
                    if self.is_header(line, own) {
                        debug!("Found {} header: '{}'", kind, line);
                        // The header itself is not content.
                        state = CaptureState::Capturing;
                    }
                }
                CaptureState::Capturing => {
                    if self.matches_any_keyword(line, other) {
                        debug!("Stopping {} capture at: '{}'", kind, line);
                        state = CaptureState::Done;
                    } else {
                        captured.push(line);
                    }
                }
                CaptureState::Done => break,
            }
        }

        if captured.is_empty() {
            None
        } else {
            Some(captured.join("\n"))
        }
    }

    /// A header is a short line that fuzzily matches one of the keywords.
    /// The word limit keeps narrative sentences that mention "experience"
    /// from opening a section.
    fn is_header(&self, line: &str, keywords: &[String]) -> bool {
        line.split_whitespace().count() <= self.max_header_words
            && self.matches_any_keyword(line, keywords)
    }

    fn matches_any_keyword(&self, line: &str, keywords: &[String]) -> bool {
        keywords
            .iter()
            .any(|keyword| self.similarity.score(keyword, line) >= self.header_threshold)
    }
}
