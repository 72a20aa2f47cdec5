use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Pairwise similarity between two normalized labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimilarityMetrics {
    /// Normalized edit-distance similarity (0.0–1.0).
    pub levenshtein_ratio: f64,
    /// Jaccard index over character trigrams (0.0–1.0).
    pub jaccard_ngram: f64,
    /// Reserved for embedding-based similarity. Never populated today.
    pub semantic_similarity: Option<f64>,
}

impl SimilarityMetrics {
    /// Metrics for two labels that normalize identically.
    pub fn identical() -> Self {
        Self {
            levenshtein_ratio: 1.0,
            jaccard_ngram: 1.0,
            semantic_similarity: Some(1.0),
        }
    }

    /// Arithmetic mean of the populated metrics.
    pub fn combined_score(&self) -> f64 {
        let mut sum = self.levenshtein_ratio + self.jaccard_ngram;
        let mut count = 2.0;
        if let Some(semantic) = self.semantic_similarity {
            sum += semantic;
            count += 1.0;
        }
        sum / count
    }
}
