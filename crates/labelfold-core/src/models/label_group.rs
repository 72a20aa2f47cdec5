use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::label::Label;

/// A set of labels consolidated under one canonical name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LabelGroup {
    /// Unique within one consolidation run.
    pub group_id: usize,
    /// Representative name for every member.
    pub canonical_name: String,
    /// Members in the order they joined. Never empty.
    pub labels: Vec<Label>,
    /// Confidence of the grouping as a whole (0.0–1.0).
    pub similarity_score: f64,
}

impl LabelGroup {
    pub fn new(
        group_id: usize,
        canonical_name: impl Into<String>,
        labels: Vec<Label>,
        similarity_score: f64,
    ) -> Self {
        Self {
            group_id,
            canonical_name: canonical_name.into(),
            labels,
            similarity_score: similarity_score.clamp(0.0, 1.0),
        }
    }

    pub fn member_count(&self) -> usize {
        self.labels.len()
    }

    pub fn total_email_count(&self) -> u64 {
        self.labels.iter().map(|l| l.email_count).sum()
    }

    pub fn original_names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| l.original_name.as_str())
    }
}
