//! Configuration management for the resume screener

use crate::error::{Result, ResumeScreenerError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub sections: SectionConfig,
    pub matching: MatchingConfig,
    pub summary: SummaryConfig,
    pub vocabulary: VocabularyConfig,
    pub models: ModelConfig,
}

/// Keyword lists and thresholds for the section segmenter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    pub work_keywords: Vec<String>,
    pub education_keywords: Vec<String>,
    /// Fuzzy header score (0-100) a line must reach to open a section.
    pub header_threshold: u8,
    /// Lines longer than this many words are never treated as headers.
    pub max_header_words: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Cosine score at or above which a resume counts as a match.
    pub match_threshold: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    pub min_length: usize,
    pub max_length: usize,
    /// Characters of resume text handed to the summarizer.
    pub input_cap: usize,
}

/// Canonical skill names plus the abbreviation table.
///
/// Treated as data: replace the lists in the config file to screen for a
/// different vocabulary without touching code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyConfig {
    pub skills: Vec<String>,
    pub abbreviations: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Vector width of the built-in hashing embedder.
    pub embedding_dimension: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sections: SectionConfig {
                work_keywords: vec![
                    "work experience".to_string(),
                    "professional experience".to_string(),
                    "employment history".to_string(),
                    "work history".to_string(),
                    "experience".to_string(),
                    "career".to_string(),
                    "employment".to_string(),
                    "professional background".to_string(),
                    "positions held".to_string(),
                    "jobs".to_string(),
                ],
                education_keywords: vec![
                    "education".to_string(),
                    "academic background".to_string(),
                    "qualifications".to_string(),
                    "degrees".to_string(),
                    "university".to_string(),
                    "college".to_string(),
                    "schooling".to_string(),
                    "academics".to_string(),
                    "educational qualifications".to_string(),
                    "studies".to_string(),
                ],
                header_threshold: 70,
                max_header_words: 5,
            },
            matching: MatchingConfig {
                match_threshold: 0.5,
            },
            summary: SummaryConfig {
                min_length: 30,
                max_length: 100,
                input_cap: 1000,
            },
            vocabulary: VocabularyConfig {
                skills: default_skills(),
                abbreviations: default_abbreviations(),
            },
            models: ModelConfig {
                embedding_dimension: 256,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| ResumeScreenerError::Configuration(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from an explicit path when given, otherwise from the default
    /// location (creating it with defaults on first run).
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(p),
            None => Self::load(),
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeScreenerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-screener")
            .join("config.toml")
    }
}

fn default_skills() -> Vec<String> {
    [
        "Python",
        "Java",
        "C++",
        "JavaScript",
        "SQL",
        "Machine Learning",
        "Deep Learning",
        "Natural Language Processing",
        "NLP",
        "Data Science",
        "Artificial Intelligence",
        "AI",
        "TensorFlow",
        "PyTorch",
        "Keras",
        "Scikit-learn",
        "Pandas",
        "NumPy",
        "Matplotlib",
        "Seaborn",
        "Tableau",
        "Power BI",
        "Excel",
        "Git",
        "Docker",
        "Kubernetes",
        "AWS",
        "Azure",
        "GCP",
        "Linux",
        "Bash",
        "HTML",
        "CSS",
        "React",
        "Angular",
        "Node.js",
        "Django",
        "Flask",
        "REST API",
        "GraphQL",
        "MongoDB",
        "PostgreSQL",
        "MySQL",
        "Redis",
        "Spark",
        "Hadoop",
        "R",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_abbreviations() -> HashMap<String, String> {
    [
        ("nlp", "Natural Language Processing"),
        ("ai", "Artificial Intelligence"),
        ("ml", "Machine Learning"),
        ("ds", "Data Science"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keyword_sets_are_disjoint() {
        let config = Config::default();
        for keyword in &config.sections.work_keywords {
            assert!(
                !config.sections.education_keywords.contains(keyword),
                "keyword '{}' appears in both section lists",
                keyword
            );
        }
    }

    #[test]
    fn test_default_abbreviations_point_at_vocabulary_entries() {
        let config = Config::default();
        for canonical in config.vocabulary.abbreviations.values() {
            assert!(
                config.vocabulary.skills.contains(canonical),
                "abbreviation target '{}' missing from the skill list",
                canonical
            );
        }
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let restored: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(restored.sections.header_threshold, 70);
        assert_eq!(restored.matching.match_threshold, 0.5);
        assert_eq!(restored.vocabulary.skills.len(), config.vocabulary.skills.len());
    }
}
