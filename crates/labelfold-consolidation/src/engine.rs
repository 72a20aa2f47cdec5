//! LabelConsolidator: implements ILabelConsolidator on top of the pipeline.

use labelfold_core::traits::{Agglomerator, ILabelConsolidator};
use labelfold_core::{ConsolidationConfig, ConsolidationOutcome, ConsolidationResult, Label};
use tracing::info_span;

use crate::algorithms::ward::WardAgglomerator;
use crate::pipeline;

/// The consolidation engine.
///
/// Holds only immutable configuration and the clustering backend, so a single
/// instance can serve concurrent callers. Each call builds its own groups and
/// statistics.
pub struct LabelConsolidator {
    config: ConsolidationConfig,
    agglomerator: Box<dyn Agglomerator>,
}

impl LabelConsolidator {
    /// Create an engine using the built-in Ward agglomerator.
    pub fn new(config: ConsolidationConfig) -> Self {
        Self::with_agglomerator(config, Box::new(WardAgglomerator))
    }

    /// Create an engine with a custom clustering backend.
    pub fn with_agglomerator(
        config: ConsolidationConfig,
        agglomerator: Box<dyn Agglomerator>,
    ) -> Self {
        Self {
            config,
            agglomerator,
        }
    }

    pub fn config(&self) -> &ConsolidationConfig {
        &self.config
    }

    /// Consolidate raw label strings.
    pub fn consolidate<S: AsRef<str>>(&self, labels: &[S]) -> ConsolidationResult {
        self.consolidate_with_stats(labels).result
    }

    /// Consolidate raw label strings, returning run statistics as well.
    pub fn consolidate_with_stats<S: AsRef<str>>(&self, labels: &[S]) -> ConsolidationOutcome {
        self.run(labels.iter().map(Label::new).collect())
    }

    /// Consolidate labels that carry email counts or samples.
    pub fn consolidate_labels(&self, labels: Vec<Label>) -> ConsolidationOutcome {
        self.run(labels)
    }

    fn run(&self, labels: Vec<Label>) -> ConsolidationOutcome {
        let span = info_span!(
            "labelfold.consolidation",
            label_count = labels.len(),
            max_categories = self.config.max_categories(),
            backend = self.agglomerator.name()
        );
        let _guard = span.enter();
        pipeline::run_pipeline(labels, &self.config, self.agglomerator.as_ref())
    }
}

impl Default for LabelConsolidator {
    fn default() -> Self {
        Self::new(ConsolidationConfig::default())
    }
}

impl ILabelConsolidator for LabelConsolidator {
    fn consolidate_labels(&self, labels: Vec<Label>) -> ConsolidationOutcome {
        self.run(labels)
    }
}
