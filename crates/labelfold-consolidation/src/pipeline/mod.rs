//! 7-phase consolidation pipeline orchestrator.
//!
//! Phase 1: Filter → Phase 2: Exact → Phase 3: Fuzzy →
//! Phase 4: Clustering (if over limit) → Phase 5: Forced (if still over) →
//! Phase 6: Naming → Phase 7: Mapping

pub mod phase1_filter;
pub mod phase2_exact;
pub mod phase3_fuzzy;
pub mod phase4_clustering;
pub mod phase5_forced;
pub mod phase6_naming;
pub mod phase7_mapping;

use std::time::Instant;

use labelfold_core::constants::OTHER_BUCKET_NAME;
use labelfold_core::traits::Agglomerator;
use labelfold_core::{
    ConsolidationConfig, ConsolidationOutcome, ConsolidationResult, ConsolidationStats, Label,
};
use tracing::{info, warn};

use crate::algorithms::similarity::SimilarityScorer;
use phase4_clustering::ClusteringOutcome;

/// Hands out group ids that are unique within one run.
#[derive(Debug, Clone, Default)]
pub struct GroupIds {
    next: usize,
}

impl GroupIds {
    pub fn starting_at(next: usize) -> Self {
        Self { next }
    }

    pub fn allocate(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Run the full consolidation pipeline over one batch of labels.
///
/// Statistics are returned alongside the result; nothing is kept between
/// calls.
pub fn run_pipeline(
    labels: Vec<Label>,
    config: &ConsolidationConfig,
    agglomerator: &dyn Agglomerator,
) -> ConsolidationOutcome {
    let started = Instant::now();
    let scorer = SimilarityScorer::from_config(config);
    let mut stats = ConsolidationStats::default();
    let mut warnings = Vec::new();

    // Phase 1: Filter.
    let labels = phase1_filter::filter_labels(labels);
    info!(count = labels.len(), "Phase 1: filtered labels");

    if labels.is_empty() {
        stats.processing_time_seconds = started.elapsed().as_secs_f64();
        return ConsolidationOutcome {
            result: ConsolidationResult::empty(config.clone()),
            stats,
        };
    }

    let original_count = labels.len();
    stats.total_labels_processed = original_count;
    let mut ids = GroupIds::default();

    // Phase 2: Exact grouping.
    let exact = phase2_exact::group_exact(labels, &scorer, &mut ids);
    info!(
        groups = exact.groups.len(),
        singletons = exact.singletons.len(),
        "Phase 2: exact grouping complete"
    );

    // Phase 3: Fuzzy matching.
    let mut groups = exact.groups;
    let absorbed = phase3_fuzzy::assign_fuzzy(
        exact.singletons,
        &mut groups,
        &scorer,
        config.similarity_threshold(),
        &mut ids,
    );
    info!(groups = groups.len(), absorbed, "Phase 3: fuzzy matching complete");

    stats.duplicate_labels_found = groups
        .iter()
        .filter(|g| g.member_count() > 1)
        .map(|g| g.member_count() - 1)
        .sum();

    let max_categories = config.max_categories();

    // Phase 4: Hierarchical clustering.
    if groups.len() > max_categories {
        let method = config.clustering_method();
        if !method.is_implemented() {
            warn!(%method, "clustering method not implemented, using hierarchical");
            warnings.push(format!(
                "Clustering method '{method}' is not implemented; used hierarchical"
            ));
        }

        match phase4_clustering::cluster_groups(
            groups,
            max_categories,
            &scorer,
            agglomerator,
            &mut ids,
        ) {
            ClusteringOutcome::Clustered(clustered) => {
                groups = clustered;
                stats.semantic_groups_created = groups.len();
                info!(groups = groups.len(), "Phase 4: hierarchical clustering complete");
            }
            ClusteringOutcome::Skipped {
                groups: unchanged,
                reason,
            } => {
                warn!(%reason, "Phase 4: hierarchical clustering skipped");
                warnings.push(format!("Hierarchical clustering skipped: {reason}"));
                groups = unchanged;
            }
        }
    }

    // Phase 5: Forced consolidation.
    if groups.len() > max_categories {
        let forced =
            phase5_forced::force_consolidate(groups, max_categories, original_count, &mut ids);
        info!(
            merged_groups = forced.merged_groups,
            forced_merges = forced.forced_merges,
            "Phase 5: forced consolidation complete"
        );
        warnings.push(format!(
            "Forced consolidation merged {} groups into '{}'",
            forced.merged_groups, OTHER_BUCKET_NAME
        ));
        stats.forced_merges = forced.forced_merges;
        groups = forced.groups;
    }

    // Phase 6: Canonical naming.
    phase6_naming::assign_canonical_names(&mut groups, &scorer);

    // Phase 7: Mapping.
    let mapping = phase7_mapping::build_mapping(&groups);

    let final_count = groups.len();
    stats.record_group_sizes(&groups);
    stats.processing_time_seconds = started.elapsed().as_secs_f64();

    info!(
        original = original_count,
        final_count,
        seconds = format!("{:.3}", stats.processing_time_seconds),
        "Consolidation pipeline complete"
    );

    ConsolidationOutcome {
        result: ConsolidationResult {
            original_count,
            final_count,
            consolidation_ratio: final_count as f64 / original_count as f64,
            label_groups: groups,
            mapping,
            config_used: config.clone(),
            warnings,
        },
        stats,
    }
}
