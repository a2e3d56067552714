//! Resume parsing pipeline

use crate::config::Config;
use crate::error::{Result, ResumeScreenerError};
use crate::input::{DocumentFormat, InputManager, SourceDocument};
use crate::model::{Summarizer, SummaryBounds};
use crate::processing::contact_extractor::ContactExtractor;
use crate::processing::document::ParsedResume;
use crate::processing::section_segmenter::SectionSegmenter;
use crate::processing::skill_matcher::SkillMatcher;
use crate::processing::text_processor::TextProcessor;
use log::{info, warn};
use std::path::Path;
use std::sync::Arc;

/// Runs a document end to end: load, normalize, then extract contact info,
/// skills, sections and a summary.
///
/// The summarizer is the only stage allowed to fail quietly. A resume with
/// no summary is still a usable record, so summarizer errors log a warning
/// and leave the field empty.
pub struct ResumeParser {
    input: InputManager,
    processor: TextProcessor,
    contact: ContactExtractor,
    segmenter: SectionSegmenter,
    skills: Arc<SkillMatcher>,
    summarizer: Arc<dyn Summarizer>,
    summary_bounds: SummaryBounds,
    summary_input_cap: usize,
}

impl ResumeParser {
    pub fn new(
        config: &Config,
        skills: Arc<SkillMatcher>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        Self {
            input: InputManager::new(),
            processor: TextProcessor::new(),
            contact: ContactExtractor::new(),
            segmenter: SectionSegmenter::new(&config.sections),
            skills,
            summarizer,
            summary_bounds: SummaryBounds {
                min_length: config.summary.min_length,
                max_length: config.summary.max_length,
            },
            summary_input_cap: config.summary.input_cap,
        }
    }

    pub async fn parse(&self, path: &Path) -> Result<ParsedResume> {
        info!("Parsing resume: {}", path.display());
        let source = self.input.load(path).await?;
        self.parse_source(source, &path.display().to_string())
    }

    pub async fn parse_bytes(&self, bytes: &[u8], format: DocumentFormat) -> Result<ParsedResume> {
        let source = self.input.load_bytes(bytes, format).await?;
        self.parse_source(source, "in-memory document")
    }

    fn parse_source(&self, source: SourceDocument, origin: &str) -> Result<ParsedResume> {
        let document = self.processor.normalize(&source.text);
        if document.flat().is_empty() {
            return Err(ResumeScreenerError::NoReadableText(origin.to_string()));
        }

        let contact =
            self.contact
                .extract(document.flat(), document.lines(), &source.hyperlinks);
        let skills = self.skills.find_skills(document.flat());
        let sections = self.segmenter.segment(document.lines());
        let summary = self.generate_summary(document.flat());

        info!(
            "Parsed {}: {} skills, work experience: {}, education: {}",
            origin,
            skills.len(),
            sections.work_experience.is_some(),
            sections.education.is_some()
        );

        Ok(ParsedResume {
            contact,
            skills,
            sections,
            summary,
            text: document.flat().to_string(),
        })
    }

    fn generate_summary(&self, text: &str) -> Option<String> {
        let without_pii = self.processor.strip_pii(text);
        let capped = self
            .processor
            .truncate_chars(&without_pii, self.summary_input_cap);

        match self.summarizer.summarize(capped, self.summary_bounds) {
            Ok(summary) if !summary.trim().is_empty() => Some(summary),
            Ok(_) => None,
            Err(e) => {
                warn!("Summary generation failed: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LeadSummarizer;
    use anyhow::bail;

    const RESUME: &str = "\
Jane Doe
jane.doe@example.com | +1 555-123-4567
linkedin.com/in/janedoe

Built Python services with SQL storage for eight years.

Experience
Software Engineer at Acme

Education
B.S. Computer Science";

    fn parser() -> ResumeParser {
        parser_with(Arc::new(LeadSummarizer))
    }

    fn parser_with(summarizer: Arc<dyn Summarizer>) -> ResumeParser {
        let config = Config::default();
        let skills = Arc::new(SkillMatcher::new(&config.vocabulary));
        ResumeParser::new(&config, skills, summarizer)
    }

    fn source(text: &str) -> SourceDocument {
        SourceDocument {
            text: text.to_string(),
            hyperlinks: Vec::new(),
        }
    }

    #[test]
    fn test_parse_source_fills_every_field() {
        let parsed = parser().parse_source(source(RESUME), "test").unwrap();

        assert_eq!(parsed.contact.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(parsed.contact.phone.as_deref(), Some("+1 555-123-4567"));
        assert_eq!(
            parsed.contact.linkedin.as_deref(),
            Some("https://linkedin.com/in/janedoe")
        );
        assert!(parsed.skills.contains("Python"));
        assert!(parsed.skills.contains("SQL"));
        assert_eq!(
            parsed.sections.work_experience.as_deref(),
            Some("Software Engineer at Acme")
        );
        assert_eq!(
            parsed.sections.education.as_deref(),
            Some("B.S. Computer Science")
        );
        assert!(parsed.summary.is_some());
        assert!(!parsed.text.contains('\n'));
    }

    #[test]
    fn test_summary_never_carries_contact_details() {
        let parsed = parser().parse_source(source(RESUME), "test").unwrap();
        let summary = parsed.summary.unwrap();

        assert!(!summary.contains("jane.doe@example.com"));
        assert!(!summary.contains("555-123-4567"));
    }

    #[test]
    fn test_empty_document_is_rejected() {
        let result = parser().parse_source(source("   \n  "), "test");

        assert!(matches!(
            result,
            Err(ResumeScreenerError::NoReadableText(_))
        ));
    }

    #[test]
    fn test_artifact_only_document_is_rejected() {
        let result = parser().parse_source(source("(cid:3)(cid:14)"), "test");

        assert!(matches!(
            result,
            Err(ResumeScreenerError::NoReadableText(_))
        ));
    }

    #[test]
    fn test_summarizer_failure_leaves_summary_empty() {
        struct Offline;
        impl Summarizer for Offline {
            fn summarize(&self, _text: &str, _bounds: SummaryBounds) -> anyhow::Result<String> {
                bail!("model offline")
            }
        }

        let parsed = parser_with(Arc::new(Offline))
            .parse_source(source(RESUME), "test")
            .unwrap();

        assert_eq!(parsed.summary, None);
        assert!(parsed.skills.contains("Python"));
        assert!(parsed.sections.work_experience.is_some());
    }

    #[test]
    fn test_metadata_hyperlinks_reach_the_contact_extractor() {
        let source = SourceDocument {
            text: "Jane Doe\nEngineer".to_string(),
            hyperlinks: vec!["https://github.com/janedoe".to_string()],
        };
        let parsed = parser().parse_source(source, "test").unwrap();

        assert_eq!(
            parsed.contact.github.as_deref(),
            Some("https://github.com/janedoe")
        );
    }
}
