pub mod consolidation_config;
pub mod defaults;

pub use consolidation_config::{ClusteringMethod, ConsolidationConfig, ConsolidationConfigDocument};
