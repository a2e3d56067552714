//! Text embedding seam and the built-in hashing embedder

use anyhow::bail;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use unicode_segmentation::UnicodeSegmentation;

/// Turns text into a fixed-length vector.
///
/// Implementations must be deterministic for a given input so repeated runs
/// score identically.
pub trait TextEmbedder: Send + Sync {
    fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>>;
    fn dimension(&self) -> usize;
}

/// Feature-hashed bag-of-words embedder.
///
/// Each word hashes into one of `dimension` buckets and the bucket counts
/// are L2-normalized. Runs without any model files.
pub struct HashingEmbedder {
    dimension: usize,
}

impl HashingEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(256)
    }
}

impl TextEmbedder for HashingEmbedder {
    fn embed(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        let mut vector = vec![0.0f32; self.dimension];

        for word in text.unicode_words() {
            let mut hasher = DefaultHasher::new();
            word.to_lowercase().hash(&mut hasher);
            let bucket = (hasher.finish() % self.dimension as u64) as usize;
            vector[bucket] += 1.0;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        Ok(vector)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> anyhow::Result<f32> {
    if a.len() != b.len() {
        bail!(
            "embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        );
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (norm_a * norm_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embeddings_have_the_configured_dimension() {
        let embedder = HashingEmbedder::new(64);
        let vector = embedder.embed("some resume text").unwrap();

        assert_eq!(vector.len(), 64);
        assert_eq!(embedder.dimension(), 64);
    }

    #[test]
    fn test_nonempty_embeddings_are_unit_length() {
        let embedder = HashingEmbedder::default();
        let vector = embedder.embed("senior software engineer").unwrap();
        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();

        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_identical_texts_score_one() {
        let embedder = HashingEmbedder::default();
        let a = embedder.embed("python machine learning engineer").unwrap();
        let b = embedder.embed("python machine learning engineer").unwrap();
        let score = cosine_similarity(&a, &b).unwrap();

        assert!((score - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_overlapping_texts_outscore_unrelated_ones() {
        let embedder = HashingEmbedder::default();
        let resume = embedder.embed("python machine learning engineer").unwrap();
        let related = embedder.embed("senior python machine learning role").unwrap();
        let unrelated = embedder.embed("baking sourdough bread at home").unwrap();

        let related_score = cosine_similarity(&resume, &related).unwrap();
        let unrelated_score = cosine_similarity(&resume, &unrelated).unwrap();

        assert!(related_score > unrelated_score);
    }

    #[test]
    fn test_empty_text_embeds_to_zero_vector() {
        let embedder = HashingEmbedder::default();
        let zero = embedder.embed("").unwrap();
        let other = embedder.embed("anything").unwrap();

        assert!(zero.iter().all(|&x| x == 0.0));
        assert_eq!(cosine_similarity(&zero, &other).unwrap(), 0.0);
    }

    #[test]
    fn test_mismatched_dimensions_are_rejected() {
        assert!(cosine_similarity(&[1.0, 0.0], &[1.0]).is_err());
    }
}
