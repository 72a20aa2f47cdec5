mod consolidation_result;
mod consolidation_stats;
mod distance_matrix;
mod label;
mod label_group;
mod similarity_metrics;

pub use consolidation_result::{ConsolidationOutcome, ConsolidationResult};
pub use consolidation_stats::ConsolidationStats;
pub use distance_matrix::DistanceMatrix;
pub use label::Label;
pub use label_group::LabelGroup;
pub use similarity_metrics::SimilarityMetrics;
