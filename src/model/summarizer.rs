//! Summary generation seam and the built-in lead summarizer

use unicode_segmentation::UnicodeSegmentation;

/// Character bounds a summary should respect.
#[derive(Debug, Clone, Copy)]
pub struct SummaryBounds {
    pub min_length: usize,
    pub max_length: usize,
}

pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str, bounds: SummaryBounds) -> anyhow::Result<String>;
}

/// Extracts leading sentences until the minimum length is reached, never
/// crossing the maximum. A first sentence longer than the maximum is cut at
/// a character boundary.
pub struct LeadSummarizer;

impl Summarizer for LeadSummarizer {
    fn summarize(&self, text: &str, bounds: SummaryBounds) -> anyhow::Result<String> {
        let mut summary = String::new();

        for sentence in text.unicode_sentences() {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }

            let current = summary.chars().count();
            if current >= bounds.min_length {
                break;
            }

            let candidate = if summary.is_empty() {
                sentence.chars().count()
            } else {
                current + 1 + sentence.chars().count()
            };

            if candidate > bounds.max_length {
                if summary.is_empty() {
                    summary = sentence.chars().take(bounds.max_length).collect();
                }
                break;
            }

            if !summary.is_empty() {
                summary.push(' ');
            }
            summary.push_str(sentence);
        }

        Ok(summary)
    }
}
