//! Approximate string scoring for section header detection

use strsim::levenshtein;

/// Pluggable 0-100 scorer used by the section segmenter, so thresholds stay
/// tunable and testable in isolation.
pub trait HeaderSimilarity: Send + Sync {
    /// Score how strongly `keyword` shows up in `line`, from 0 (nothing in
    /// common) to 100 (contained verbatim).
    fn score(&self, keyword: &str, line: &str) -> u8;
}

/// Best-window partial ratio: the shorter string slides over same-length
/// windows of the longer one, each window scored by normalized Levenshtein
/// distance, best window wins.
pub struct PartialRatio;

impl HeaderSimilarity for PartialRatio {
    fn score(&self, keyword: &str, line: &str) -> u8 {
        partial_ratio(&keyword.to_lowercase(), &line.to_lowercase())
    }
}

pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() || b_chars.is_empty() {
        return 0;
    }

    let (needle, hay) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    let window = needle.len();
    let needle: String = needle.iter().collect();

    let mut best = 0u8;
    for start in 0..=(hay.len() - window) {
        let candidate: String = hay[start..start + window].iter().collect();
        let score = similarity_ratio(&needle, &candidate, window);
        if score > best {
            best = score;
            if best == 100 {
                break;
            }
        }
    }

    best
}

fn similarity_ratio(a: &str, b: &str, length: usize) -> u8 {
    if length == 0 {
        return 100;
    }
    let distance = levenshtein(a, b);
    let ratio = 1.0 - distance as f64 / length as f64;
    (ratio.max(0.0) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_100() {
        assert_eq!(partial_ratio("education", "education"), 100);
    }

    #[test]
    fn test_contained_keyword_scores_100() {
        assert_eq!(partial_ratio("experience", "professional experience (2019-2023)"), 100);
        assert_eq!(partial_ratio("experience", "work experience"), 100);
    }

    #[test]
    fn test_order_of_arguments_does_not_matter() {
        let forward = partial_ratio("experience", "work experience");
        let backward = partial_ratio("work experience", "experience");
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_minor_typo_stays_above_header_threshold() {
        assert!(partial_ratio("experience", "work experiance") >= 70);
    }

    #[test]
    fn test_unrelated_headers_stay_below_threshold() {
        assert!(partial_ratio("education", "experience") < 70);
        assert!(partial_ratio("education", "software engineer at acme") < 70);
        assert!(partial_ratio("experience", "b.s. computer science") < 70);
    }

    #[test]
    fn test_empty_input_scores_zero() {
        assert_eq!(partial_ratio("", "education"), 0);
        assert_eq!(partial_ratio("education", ""), 0);
    }

    #[test]
    fn test_scorer_is_case_insensitive() {
        let scorer = PartialRatio;
        assert_eq!(scorer.score("experience", "WORK EXPERIENCE"), 100);
    }
}
