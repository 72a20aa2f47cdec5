//! Pairwise label similarity: normalized Levenshtein ratio and character
//! n-gram Jaccard index, combined by arithmetic mean.

use std::collections::HashSet;

use labelfold_core::constants::NGRAM_SIZE;
use labelfold_core::{ConsolidationConfig, SimilarityMetrics};

use super::normalize::normalize;

/// Edit-distance similarity in [0, 1]: `1 - levenshtein(a, b) / max(|a|, |b|)`
/// over characters. This is not the indel ratio `2·M / (|a| + |b|)`.
/// 0.0 when either side is empty.
pub fn levenshtein_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    strsim::normalized_levenshtein(a, b)
}

/// Jaccard index over character n-grams.
///
/// Strings shorter than `n` characters have no n-grams, so the
/// Levenshtein ratio stands in for them.
pub fn jaccard_ngram(a: &str, b: &str, n: usize) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    if n == 0 || a_chars.len() < n || b_chars.len() < n {
        return levenshtein_ratio(a, b);
    }

    let a_grams = ngrams(&a_chars, n);
    let b_grams = ngrams(&b_chars, n);
    let union = a_grams.union(&b_grams).count();
    if union == 0 {
        return 0.0;
    }
    a_grams.intersection(&b_grams).count() as f64 / union as f64
}

fn ngrams(chars: &[char], n: usize) -> HashSet<String> {
    chars.windows(n).map(|w| w.iter().collect()).collect()
}

/// Scores label pairs under one normalization mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityScorer {
    aggressive: bool,
}

impl SimilarityScorer {
    pub fn new(aggressive: bool) -> Self {
        Self { aggressive }
    }

    pub fn from_config(config: &ConsolidationConfig) -> Self {
        Self::new(config.aggressive_normalization())
    }

    pub fn normalize(&self, label: &str) -> String {
        normalize(label, self.aggressive)
    }

    /// Similarity metrics between two raw labels.
    pub fn similarity(&self, a: &str, b: &str) -> SimilarityMetrics {
        let a = self.normalize(a);
        let b = self.normalize(b);
        if a == b {
            return SimilarityMetrics::identical();
        }
        SimilarityMetrics {
            levenshtein_ratio: levenshtein_ratio(&a, &b),
            jaccard_ngram: jaccard_ngram(&a, &b, NGRAM_SIZE),
            semantic_similarity: None,
        }
    }

    pub fn combined_score(&self, a: &str, b: &str) -> f64 {
        self.similarity(a, b).combined_score()
    }
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::from_config(&ConsolidationConfig::default())
    }
}
