use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::consolidation_stats::ConsolidationStats;
use super::label_group::LabelGroup;
use crate::config::ConsolidationConfig;
use crate::constants::NO_VALID_LABELS_WARNING;

/// Output of one consolidation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsolidationResult {
    /// Number of valid (non-empty, trimmed) input labels.
    pub original_count: usize,
    /// Number of output groups.
    pub final_count: usize,
    /// `final_count / original_count`, 0.0 for empty input.
    pub consolidation_ratio: f64,
    /// Output groups in their final order.
    pub label_groups: Vec<LabelGroup>,
    /// Every distinct input label mapped to its group's canonical name.
    pub mapping: BTreeMap<String, String>,
    /// The configuration the run used.
    pub config_used: ConsolidationConfig,
    /// Non-fatal conditions encountered during the run.
    pub warnings: Vec<String>,
}

impl ConsolidationResult {
    /// Zeroed result for input without a single usable label.
    pub fn empty(config: ConsolidationConfig) -> Self {
        Self {
            original_count: 0,
            final_count: 0,
            consolidation_ratio: 0.0,
            label_groups: Vec::new(),
            mapping: BTreeMap::new(),
            config_used: config,
            warnings: vec![NO_VALID_LABELS_WARNING.to_string()],
        }
    }

    /// Percentage of labels eliminated by consolidation.
    pub fn reduction_percentage(&self) -> f64 {
        if self.original_count == 0 {
            return 0.0;
        }
        (self.original_count as f64 - self.final_count as f64) / self.original_count as f64
            * 100.0
    }

    /// Canonical bucket for a raw label, if the label was part of the input.
    pub fn canonical_for(&self, raw_label: &str) -> Option<&str> {
        self.mapping.get(raw_label.trim()).map(String::as_str)
    }

    /// First group carrying the given canonical name.
    pub fn group_named(&self, canonical_name: &str) -> Option<&LabelGroup> {
        self.label_groups
            .iter()
            .find(|g| g.canonical_name == canonical_name)
    }
}

/// A result together with the run statistics that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsolidationOutcome {
    pub result: ConsolidationResult,
    pub stats: ConsolidationStats,
}
