//! # labelfold-consolidation
//!
//! 7-phase label consolidation pipeline: filter → exact grouping → fuzzy
//! matching → hierarchical (Ward) clustering → forced consolidation →
//! canonical naming → mapping.

pub mod algorithms;
pub mod engine;
pub mod pipeline;

pub use algorithms::normalize::normalize;
pub use algorithms::similarity::SimilarityScorer;
pub use algorithms::ward::WardAgglomerator;
pub use engine::LabelConsolidator;
