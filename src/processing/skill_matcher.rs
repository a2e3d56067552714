//! Vocabulary-driven skill detection

use crate::config::VocabularyConfig;
use crate::processing::text_processor::{raw_tokens, Lemmatizer};
use log::debug;
use std::collections::{BTreeSet, HashSet};

/// Finds vocabulary skills in free text.
///
/// Every skill matches when all of its lemmatized tokens occur somewhere in
/// the lemmatized document, not necessarily adjacent. Abbreviations map a
/// literal token ("nlp") onto the canonical vocabulary entry.
pub struct SkillMatcher {
    skills: Vec<SkillEntry>,
    abbreviations: Vec<(String, String)>,
    lemmatizer: Lemmatizer,
}

struct SkillEntry {
    name: String,
    tokens: Vec<String>,
}

impl SkillMatcher {
    pub fn new(vocabulary: &VocabularyConfig) -> Self {
        let lemmatizer = Lemmatizer::new();

        let skills: Vec<SkillEntry> = vocabulary
            .skills
            .iter()
            .map(|name| SkillEntry {
                name: name.clone(),
                tokens: lemmatizer.tokenize(name),
            })
            .filter(|entry| !entry.tokens.is_empty())
            .collect();

        // Abbreviations only expand to entries the vocabulary actually lists.
        let abbreviations: Vec<(String, String)> = vocabulary
            .abbreviations
            .iter()
            .filter_map(|(abbrev, canonical)| {
                vocabulary
                    .skills
                    .iter()
                    .find(|skill| skill.eq_ignore_ascii_case(canonical))
                    .map(|skill| (abbrev.to_lowercase(), skill.clone()))
            })
            .collect();

        Self {
            skills,
            abbreviations,
            lemmatizer,
        }
    }

    pub fn find_skills(&self, text: &str) -> BTreeSet<String> {
        let document_tokens: HashSet<String> =
            self.lemmatizer.tokenize(text).into_iter().collect();
        if document_tokens.is_empty() {
            return BTreeSet::new();
        }

        let mut found: BTreeSet<String> = self
            .skills
            .iter()
            .filter(|entry| entry.tokens.iter().all(|t| document_tokens.contains(t)))
            .map(|entry| entry.name.clone())
            .collect();

        let literal_tokens: HashSet<String> = raw_tokens(text).into_iter().collect();
        for (abbrev, canonical) in &self.abbreviations {
            if literal_tokens.contains(abbrev) {
                found.insert(canonical.clone());
            }
        }

        debug!("Found {} skills in text", found.len());
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::collections::HashMap;

    fn matcher() -> SkillMatcher {
        SkillMatcher::new(&Config::default().vocabulary)
    }

    fn custom(skills: &[&str], abbreviations: &[(&str, &str)]) -> SkillMatcher {
        SkillMatcher::new(&VocabularyConfig {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            abbreviations: abbreviations
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        })
    }

    #[test]
    fn test_finds_single_word_skills() {
        let skills = matcher().find_skills("Proficient in Python and SQL, some Excel.");

        assert!(skills.contains("Python"));
        assert!(skills.contains("SQL"));
        assert!(skills.contains("Excel"));
        assert!(!skills.contains("Java"));
    }

    #[test]
    fn test_symbol_heavy_names_survive() {
        let skills = matcher().find_skills("Backend in C++ and Node.js");

        assert!(skills.contains("C++"));
        assert!(skills.contains("Node.js"));
    }

    #[test]
    fn test_multi_word_skills_match_across_the_document() {
        let skills = matcher().find_skills("Applied machine methods to learning platforms");

        // Tokens may appear anywhere, adjacency is not required.
        assert!(skills.contains("Machine Learning"));
    }

    #[test]
    fn test_inflected_forms_land_on_the_same_stem() {
        let matcher = custom(&["Database Management"], &[]);
        let skills = matcher.find_skills("Spent years managing databases");

        assert!(skills.contains("Database Management"));
    }

    #[test]
    fn test_abbreviations_expand_to_canonical_entries() {
        let skills = matcher().find_skills("Worked on NLP and ML products");

        assert!(skills.contains("Natural Language Processing"));
        assert!(skills.contains("Machine Learning"));
    }

    #[test]
    fn test_abbreviations_without_a_vocabulary_entry_are_ignored() {
        let matcher = custom(&["Python"], &[("cv", "Computer Vision")]);
        let skills = matcher.find_skills("Python and CV experience");

        assert_eq!(skills.iter().collect::<Vec<_>>(), vec!["Python"]);
    }

    #[test]
    fn test_empty_text_finds_nothing() {
        assert!(matcher().find_skills("").is_empty());
        assert!(matcher().find_skills("   \n\t ").is_empty());
    }

    #[test]
    fn test_results_are_sorted_and_deduplicated() {
        let skills = matcher().find_skills("SQL, python, Python, sql");
        let listed: Vec<_> = skills.iter().cloned().collect();

        assert_eq!(listed, vec!["Python".to_string(), "SQL".to_string()]);
    }
}
