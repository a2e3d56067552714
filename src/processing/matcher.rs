//! Resume-to-job similarity scoring

use crate::config::MatchingConfig;
use crate::model::{cosine_similarity, TextEmbedder};
use crate::processing::document::MatchResult;
use crate::processing::skill_matcher::SkillMatcher;
use crate::processing::text_processor::TextProcessor;
use log::{debug, warn};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Scores a resume against a job description.
///
/// The verdict combines an embedding cosine score with the overlap of
/// vocabulary skills found in both texts. Embedding trouble degrades the
/// score to 0.0 instead of failing the whole run, so the skill overlap is
/// still reported.
pub struct ResumeMatcher {
    embedder: Arc<dyn TextEmbedder>,
    skills: Arc<SkillMatcher>,
    processor: TextProcessor,
    match_threshold: f32,
}

impl ResumeMatcher {
    pub fn new(
        config: &MatchingConfig,
        embedder: Arc<dyn TextEmbedder>,
        skills: Arc<SkillMatcher>,
    ) -> Self {
        Self {
            embedder,
            skills,
            processor: TextProcessor::new(),
            match_threshold: config.match_threshold,
        }
    }

    pub fn match_resume(&self, resume_text: &str, job_description: &str) -> MatchResult {
        let score = self.similarity_score(resume_text, job_description);
        debug!("Similarity score: {:.4}", score);

        MatchResult {
            is_match: score >= self.match_threshold,
            score,
            matched_skills: self.matched_skills(resume_text, job_description),
        }
    }

    fn similarity_score(&self, resume_text: &str, job_description: &str) -> f32 {
        let resume = self.processor.preprocess_for_matching(resume_text);
        let job = self.processor.preprocess_for_matching(job_description);

        // Either side empty scores zero without an embed call.
        if resume.is_empty() || job.is_empty() {
            return 0.0;
        }

        match self.embed_and_score(&resume, &job) {
            Ok(score) => score,
            Err(e) => {
                warn!("Similarity scoring failed: {}", e);
                0.0
            }
        }
    }

    fn embed_and_score(&self, resume: &str, job: &str) -> anyhow::Result<f32> {
        let resume_vector = self.embedder.embed(resume)?;
        let job_vector = self.embedder.embed(job)?;
        let score = cosine_similarity(&resume_vector, &job_vector)?;
        Ok(score.clamp(0.0, 1.0))
    }

    fn matched_skills(&self, resume_text: &str, job_description: &str) -> BTreeSet<String> {
        let resume_skills = self.skills.find_skills(resume_text);
        let job_skills = self.skills.find_skills(job_description);
        resume_skills.intersection(&job_skills).cloned().collect()
    }
}
