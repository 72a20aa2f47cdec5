//! # labelfold-core
//!
//! Foundation crate for the labelfold consolidation engine.
//! Defines the label/group/result types, configuration, errors, constants,
//! and the traits the engine is plugged together with.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ClusteringMethod, ConsolidationConfig};
pub use errors::{LabelfoldError, LabelfoldResult};
pub use models::{
    ConsolidationOutcome, ConsolidationResult, ConsolidationStats, DistanceMatrix, Label,
    LabelGroup, SimilarityMetrics,
};
