use crate::models::{ConsolidationOutcome, ConsolidationResult, Label};

/// Label consolidation: reduce many free-form labels to a bounded set of
/// canonical categories.
pub trait ILabelConsolidator: Send + Sync {
    /// Consolidate labels, returning the result together with run statistics.
    fn consolidate_labels(&self, labels: Vec<Label>) -> ConsolidationOutcome;

    /// Consolidate raw label strings.
    fn consolidate(&self, labels: &[String]) -> ConsolidationResult {
        self.consolidate_labels(labels.iter().map(Label::new).collect())
            .result
    }
}
