use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::label_group::LabelGroup;

/// Statistics of a single consolidation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsolidationStats {
    pub total_labels_processed: usize,
    /// Labels absorbed into an existing group during exact/fuzzy grouping.
    pub duplicate_labels_found: usize,
    /// Group count after hierarchical clustering; 0 when it did not run.
    pub semantic_groups_created: usize,
    /// Best-effort diagnostic: labels left outside the groups kept by
    /// forced consolidation. 0 when it did not run.
    pub forced_merges: usize,
    pub processing_time_seconds: f64,
    pub largest_group_size: usize,
    pub smallest_group_size: usize,
    pub average_group_size: f64,
}

impl ConsolidationStats {
    /// Fill in the group-size aggregates from the final groups.
    pub fn record_group_sizes(&mut self, groups: &[LabelGroup]) {
        let sizes = groups.iter().map(LabelGroup::member_count);
        self.largest_group_size = sizes.clone().max().unwrap_or(0);
        self.smallest_group_size = sizes.clone().min().unwrap_or(0);
        self.average_group_size = if groups.is_empty() {
            0.0
        } else {
            sizes.sum::<usize>() as f64 / groups.len() as f64
        };
    }
}
