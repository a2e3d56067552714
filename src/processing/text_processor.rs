//! Text normalization and the two text views used by the pipeline

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

/// Cleaned text for one document, produced once per parse and immutable
/// afterwards.
///
/// Two views are kept: a line-preserving one for the section segmenter and
/// literal-URL scanning, and a fully collapsed one for contact and skill
/// scanning. Both derive from the same artifact-stripped base text.
#[derive(Debug, Clone)]
pub struct NormalizedDocument {
    lines: String,
    flat: String,
}

impl NormalizedDocument {
    /// Text with original line breaks, horizontal whitespace tidied per line.
    pub fn lines(&self) -> &str {
        &self.lines
    }

    /// Text with every whitespace run collapsed to a single space.
    pub fn flat(&self) -> &str {
        &self.flat
    }
}

pub struct TextProcessor {
    artifact_regex: Regex,
    whitespace_regex: Regex,
    horizontal_whitespace_regex: Regex,
    matching_punctuation_regex: Regex,
    pii_email_regex: Regex,
    pii_phone_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        // Glyph markers some PDF extractors emit for unmapped characters.
        let artifact_regex = Regex::new(r"\(cid:\d+\)").expect("Invalid artifact regex");

        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");

        let horizontal_whitespace_regex =
            Regex::new(r"[ \t]+").expect("Invalid horizontal whitespace regex");

        let matching_punctuation_regex =
            Regex::new(r"[^\w\s.,;!?]").expect("Invalid matching punctuation regex");

        let pii_email_regex = Regex::new(r"\S+@\S+").expect("Invalid PII email regex");

        let pii_phone_regex =
            Regex::new(r"\(?\+?\d{1,3}[-.\s]?\d{2,4}[-.\s]?\d{2,4}[-.\s]?\d{4}\)?")
                .expect("Invalid PII phone regex");

        Self {
            artifact_regex,
            whitespace_regex,
            horizontal_whitespace_regex,
            matching_punctuation_regex,
            pii_email_regex,
            pii_phone_regex,
        }
    }

    /// Strip extractor artifacts and build both text views.
    pub fn normalize(&self, raw: &str) -> NormalizedDocument {
        let base = self.artifact_regex.replace_all(raw, "");

        let lines = base
            .lines()
            .map(|line| {
                self.horizontal_whitespace_regex
                    .replace_all(line.trim(), " ")
                    .into_owned()
            })
            .collect::<Vec<_>>()
            .join("\n");

        let flat = self
            .whitespace_regex
            .replace_all(&base, " ")
            .trim()
            .to_string();

        NormalizedDocument { lines, flat }
    }

    /// Lowercased matching view used by the similarity scorer: every
    /// character except word characters, whitespace and `. , ; ! ?` becomes
    /// a space, then runs collapse.
    pub fn preprocess_for_matching(&self, text: &str) -> String {
        let stripped = self.matching_punctuation_regex.replace_all(text, " ");
        let collapsed = self.whitespace_regex.replace_all(&stripped, " ");
        collapsed.trim().to_lowercase()
    }

    /// Remove email and phone-like sequences before text leaves the process
    /// for summarization.
    pub fn strip_pii(&self, text: &str) -> String {
        let cleaned = self.pii_email_regex.replace_all(text, "");
        let cleaned = self.pii_phone_regex.replace_all(&cleaned, "");
        self.whitespace_regex
            .replace_all(&cleaned, " ")
            .trim()
            .to_string()
    }

    /// First `max_chars` characters of `text`, cut on a character boundary.
    pub fn truncate_chars<'a>(&self, text: &'a str, max_chars: usize) -> &'a str {
        match text.char_indices().nth(max_chars) {
            Some((idx, _)) => &text[..idx],
            None => text,
        }
    }
}

/// Reduces tokens to comparable base forms for skill matching.
///
/// Both the vocabulary and the document text pass through the same Snowball
/// English stemmer, so inflected forms land on the same stem. Tokens with
/// non-alphabetic characters ("c++", "node.js") are compared verbatim.
pub struct Lemmatizer {
    stemmer: Stemmer,
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    pub fn lemmatize(&self, token: &str) -> String {
        let lowered = token.to_lowercase();
        if lowered.chars().all(|c| c.is_alphabetic()) {
            self.stemmer.stem(&lowered).into_owned()
        } else {
            lowered
        }
    }

    /// Whitespace tokens with surrounding punctuation trimmed and each token
    /// lemmatized. Symbols that occur inside skill names (`+`, `#`, interior
    /// dots) survive the trim, so "C++" and "Node.js" stay intact.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter_map(|raw| {
                let cleaned = clean_token(raw);
                if cleaned.is_empty() {
                    None
                } else {
                    Some(self.lemmatize(cleaned))
                }
            })
            .collect()
    }
}

fn clean_token(raw: &str) -> &str {
    raw.trim_matches(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
}

/// Cleaned, lowercased tokens without stemming. Abbreviation lookups compare
/// against these.
pub fn raw_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|raw| {
            let cleaned = clean_token(raw);
            if cleaned.is_empty() {
                None
            } else {
                Some(cleaned.to_lowercase())
            }
        })
        .collect()
}
