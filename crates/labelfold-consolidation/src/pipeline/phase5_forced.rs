//! Phase 5: Forced consolidation — similarity-agnostic cap enforcement.
//!
//! Keeps the `max_categories - 1` largest groups and folds everything else
//! into a single "other" bucket with score 0.5.

use labelfold_core::constants::{FORCED_GROUP_SCORE, OTHER_BUCKET_NAME};
use labelfold_core::LabelGroup;

use super::GroupIds;

/// Result of forced consolidation.
#[derive(Debug, Clone)]
pub struct ForcedOutcome {
    pub groups: Vec<LabelGroup>,
    /// `total_labels - Σ kept member counts`. Diagnostic only: when clustering
    /// already ran this also counts labels merged by that phase.
    pub forced_merges: usize,
    /// Number of groups folded into the "other" bucket.
    pub merged_groups: usize,
}

pub fn force_consolidate(
    mut groups: Vec<LabelGroup>,
    max_categories: usize,
    total_labels: usize,
    ids: &mut GroupIds,
) -> ForcedOutcome {
    // Stable: equal-sized groups keep their relative order.
    groups.sort_by(|a, b| b.member_count().cmp(&a.member_count()));

    let keep = max_categories.saturating_sub(1).min(groups.len());
    let overflow = groups.split_off(keep);
    let kept_members: usize = groups.iter().map(LabelGroup::member_count).sum();
    let forced_merges = total_labels.saturating_sub(kept_members);
    let merged_groups = overflow.len();

    if !overflow.is_empty() {
        let labels = overflow.into_iter().flat_map(|g| g.labels).collect();
        groups.push(LabelGroup::new(
            ids.allocate(),
            OTHER_BUCKET_NAME,
            labels,
            FORCED_GROUP_SCORE,
        ));
    }

    ForcedOutcome {
        groups,
        forced_merges,
        merged_groups,
    }
}
