use crate::errors::ClusteringError;
use crate::models::DistanceMatrix;

/// Agglomerative clustering backend.
///
/// Given an N×N distance matrix, assign every point to one of exactly
/// `target_clusters` flat clusters. The returned vector has length N and
/// holds cluster ids in `0..target_clusters`.
pub trait Agglomerator: Send + Sync {
    fn agglomerate(
        &self,
        distances: &DistanceMatrix,
        target_clusters: usize,
    ) -> Result<Vec<usize>, ClusteringError>;

    /// Backend name, for logs.
    fn name(&self) -> &str;
}
