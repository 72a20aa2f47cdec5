//! Similarity and distance matrices over group canonical names.

use labelfold_core::DistanceMatrix;

use super::similarity::SimilarityScorer;

/// Row-major N×N similarity matrix: 1.0 on the diagonal, combined score
/// elsewhere.
pub fn similarity_matrix(names: &[&str], scorer: &SimilarityScorer) -> Vec<f64> {
    let n = names.len();
    let mut matrix = vec![0.0; n * n];
    for i in 0..n {
        matrix[i * n + i] = 1.0;
        for j in (i + 1)..n {
            let score = scorer.combined_score(names[i], names[j]);
            matrix[i * n + j] = score;
            matrix[j * n + i] = score;
        }
    }
    matrix
}

/// Distance matrix `1 - S` over the given names.
pub fn distance_matrix(names: &[&str], scorer: &SimilarityScorer) -> DistanceMatrix {
    let similarities = similarity_matrix(names, scorer);
    DistanceMatrix::from_similarities(names.len(), &similarities)
        .unwrap_or_else(|| DistanceMatrix::zeros(names.len()))
}
