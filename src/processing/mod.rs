//! Text processing and analysis module

pub mod contact_extractor;
pub mod document;
pub mod fuzzy;
pub mod matcher;
pub mod parser;
pub mod section_segmenter;
pub mod skill_matcher;
pub mod text_processor;

pub use document::{MatchRecord, MatchResult, ParsedResume, ResumeRecord};
pub use matcher::ResumeMatcher;
pub use parser::ResumeParser;
pub use skill_matcher::SkillMatcher;
