//! Agglomerative clustering with Ward linkage.
//!
//! Uses the Lance–Williams recurrence on the supplied distances, merging the
//! closest pair of active clusters until exactly `target_clusters` remain.
//! Ties go to the lowest `(i, j)` index pair, so results are deterministic.

use labelfold_core::errors::ClusteringError;
use labelfold_core::traits::Agglomerator;
use labelfold_core::DistanceMatrix;

/// Default in-process Ward agglomerator. O(N³) time, O(N²) memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct WardAgglomerator;

impl WardAgglomerator {
    pub fn new() -> Self {
        Self
    }
}

impl Agglomerator for WardAgglomerator {
    fn agglomerate(
        &self,
        distances: &DistanceMatrix,
        target_clusters: usize,
    ) -> Result<Vec<usize>, ClusteringError> {
        let n = distances.len();
        if target_clusters == 0 || target_clusters > n {
            return Err(ClusteringError::InvalidTarget {
                target: target_clusters,
                points: n,
            });
        }
        if target_clusters == n {
            return Ok((0..n).collect());
        }
        if distances.is_degenerate() {
            return Err(ClusteringError::DegenerateMatrix {
                reason: format!("{n}x{n} matrix has non-finite or negative entries"),
            });
        }

        let mut d: Vec<Vec<f64>> = (0..n)
            .map(|i| (0..n).map(|j| distances.get(i, j)).collect())
            .collect();
        let mut sizes = vec![1usize; n];
        let mut active = vec![true; n];
        // Each active cluster is represented by its lowest member index.
        let mut members: Vec<Vec<usize>> = (0..n).map(|i| vec![i]).collect();
        let mut remaining = n;

        while remaining > target_clusters {
            let Some((i, j, d_ij)) = closest_pair(&d, &active) else {
                break;
            };

            for k in 0..n {
                if !active[k] || k == i || k == j {
                    continue;
                }
                let (n_i, n_j, n_k) = (sizes[i] as f64, sizes[j] as f64, sizes[k] as f64);
                let merged = ((n_i + n_k) * d[i][k].powi(2) + (n_j + n_k) * d[j][k].powi(2)
                    - n_k * d_ij.powi(2))
                    / (n_i + n_j + n_k);
                let merged = merged.max(0.0).sqrt();
                d[i][k] = merged;
                d[k][i] = merged;
            }

            sizes[i] += sizes[j];
            active[j] = false;
            let absorbed = std::mem::take(&mut members[j]);
            members[i].extend(absorbed);
            remaining -= 1;
        }

        let mut assignment = vec![0usize; n];
        for (cluster_id, rep) in (0..n).filter(|&r| active[r]).enumerate() {
            for &point in &members[rep] {
                assignment[point] = cluster_id;
            }
        }
        Ok(assignment)
    }

    fn name(&self) -> &str {
        "ward"
    }
}

/// Closest pair of active clusters, `i < j`.
fn closest_pair(d: &[Vec<f64>], active: &[bool]) -> Option<(usize, usize, f64)> {
    let n = active.len();
    let mut best: Option<(usize, usize, f64)> = None;
    for i in (0..n).filter(|&i| active[i]) {
        for j in ((i + 1)..n).filter(|&j| active[j]) {
            let dist = d[i][j];
            if best.map_or(true, |(_, _, b)| dist < b) {
                best = Some((i, j, dist));
            }
        }
    }
    best
}
