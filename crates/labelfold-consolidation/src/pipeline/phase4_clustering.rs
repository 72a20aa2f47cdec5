//! Phase 4: Hierarchical clustering — Ward agglomeration over canonical names.
//!
//! Runs only when the group count exceeds `max_categories`. Groups are cut
//! into exactly `max_categories` clusters; each cluster becomes one group
//! named after its largest sub-group, with score 0.7.

use labelfold_core::constants::CLUSTERED_GROUP_SCORE;
use labelfold_core::traits::Agglomerator;
use labelfold_core::LabelGroup;
use tracing::debug;

use super::GroupIds;
use crate::algorithms::distance::distance_matrix;
use crate::algorithms::similarity::SimilarityScorer;

/// Result of the clustering phase.
#[derive(Debug, Clone)]
pub enum ClusteringOutcome {
    /// Groups were merged into clusters.
    Clustered(Vec<LabelGroup>),
    /// Clustering could not run; the input groups are returned untouched.
    Skipped {
        groups: Vec<LabelGroup>,
        reason: String,
    },
}

pub fn cluster_groups(
    groups: Vec<LabelGroup>,
    target_clusters: usize,
    scorer: &SimilarityScorer,
    agglomerator: &dyn Agglomerator,
    ids: &mut GroupIds,
) -> ClusteringOutcome {
    if groups.len() < 2 {
        return ClusteringOutcome::Skipped {
            groups,
            reason: "fewer than two groups".to_string(),
        };
    }

    let names: Vec<&str> = groups.iter().map(|g| g.canonical_name.as_str()).collect();
    let distances = distance_matrix(&names, scorer);
    if distances.is_degenerate() {
        return ClusteringOutcome::Skipped {
            groups,
            reason: "degenerate distance matrix".to_string(),
        };
    }

    let assignment = match agglomerator.agglomerate(&distances, target_clusters) {
        Ok(assignment) => assignment,
        Err(e) => {
            return ClusteringOutcome::Skipped {
                groups,
                reason: e.to_string(),
            }
        }
    };
    if assignment.len() != groups.len() {
        let reason = format!(
            "{} returned {} assignments for {} groups",
            agglomerator.name(),
            assignment.len(),
            groups.len()
        );
        return ClusteringOutcome::Skipped { groups, reason };
    }

    let cluster_count = assignment.iter().max().map_or(0, |m| m + 1);
    let mut buckets: Vec<Vec<LabelGroup>> = (0..cluster_count).map(|_| Vec::new()).collect();
    for (group, cluster_id) in groups.into_iter().zip(assignment) {
        buckets[cluster_id].push(group);
    }

    let merged: Vec<LabelGroup> = buckets
        .into_iter()
        .filter(|bucket| !bucket.is_empty())
        .map(|bucket| merge_cluster(bucket, ids))
        .collect();
    debug!(
        backend = agglomerator.name(),
        clusters = merged.len(),
        "hierarchical clustering merged groups"
    );
    ClusteringOutcome::Clustered(merged)
}

/// Merge the groups of one cluster. The name comes from the sub-group with
/// the most members, first one on ties.
fn merge_cluster(members: Vec<LabelGroup>, ids: &mut GroupIds) -> LabelGroup {
    let mut largest: Option<&LabelGroup> = None;
    for group in &members {
        if largest.map_or(true, |l| group.member_count() > l.member_count()) {
            largest = Some(group);
        }
    }
    let canonical = largest.map(|g| g.canonical_name.clone()).unwrap_or_default();
    let labels = members.into_iter().flat_map(|g| g.labels).collect();
    LabelGroup::new(ids.allocate(), canonical, labels, CLUSTERED_GROUP_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::ward::WardAgglomerator;
    use labelfold_core::errors::ClusteringError;
    use labelfold_core::{DistanceMatrix, Label};

    fn group(id: usize, names: &[&str]) -> LabelGroup {
        LabelGroup::new(
            id,
            names[0],
            names.iter().map(|n| Label::new(n)).collect(),
            1.0,
        )
    }

    struct FailingAgglomerator;

    impl Agglomerator for FailingAgglomerator {
        fn agglomerate(
            &self,
            distances: &DistanceMatrix,
            _target: usize,
        ) -> Result<Vec<usize>, ClusteringError> {
            Err(ClusteringError::DegenerateMatrix {
                reason: format!("refusing {} points", distances.len()),
            })
        }
        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn clusters_to_target_and_names_after_largest() {
        let groups = vec![
            group(0, &["Invoice"]),
            group(1, &["Invoices", "invoices", "INVOICES"]),
            group(2, &["Travel"]),
            group(3, &["Travels"]),
        ];
        let mut ids = GroupIds::starting_at(4);
        let outcome = cluster_groups(
            groups,
            2,
            &SimilarityScorer::new(true),
            &WardAgglomerator,
            &mut ids,
        );
        let ClusteringOutcome::Clustered(merged) = outcome else {
            panic!("clustering should run");
        };
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].canonical_name, "Invoices");
        assert_eq!(merged[0].member_count(), 4);
        assert_eq!(merged[1].canonical_name, "Travel");
        assert!(merged.iter().all(|g| g.similarity_score == CLUSTERED_GROUP_SCORE));
        assert_eq!(merged[0].group_id, 4);
    }

    #[test]
    fn backend_failure_skips_phase() {
        let groups = vec![group(0, &["a"]), group(1, &["b"]), group(2, &["c"])];
        let mut ids = GroupIds::starting_at(3);
        let outcome = cluster_groups(
            groups,
            2,
            &SimilarityScorer::new(true),
            &FailingAgglomerator,
            &mut ids,
        );
        match outcome {
            ClusteringOutcome::Skipped { groups, reason } => {
                assert_eq!(groups.len(), 3);
                assert!(reason.contains("refusing 3 points"));
            }
            ClusteringOutcome::Clustered(_) => panic!("expected skip"),
        }
    }

    #[test]
    fn single_group_is_skipped() {
        let mut ids = GroupIds::starting_at(1);
        let outcome = cluster_groups(
            vec![group(0, &["a"])],
            1,
            &SimilarityScorer::new(true),
            &WardAgglomerator,
            &mut ids,
        );
        assert!(matches!(outcome, ClusteringOutcome::Skipped { .. }));
    }
}
