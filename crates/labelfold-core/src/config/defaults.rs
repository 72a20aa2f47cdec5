// Single source of truth for all default values.

// --- Consolidation ---
pub const DEFAULT_MAX_CATEGORIES: usize = 25;
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;
pub const DEFAULT_AGGRESSIVE_NORMALIZATION: bool = true;

// --- Content analysis (reserved) ---
pub const DEFAULT_ENABLE_CONTENT_ANALYSIS: bool = false;
pub const DEFAULT_CONTENT_SAMPLE_SIZE: usize = 100;

// --- Environment overrides ---
pub const ENV_MAX_CATEGORIES: &str = "LABELFOLD_MAX_CATEGORIES";
pub const ENV_SIMILARITY_THRESHOLD: &str = "LABELFOLD_SIMILARITY_THRESHOLD";
pub const ENV_AGGRESSIVE_NORMALIZATION: &str = "LABELFOLD_AGGRESSIVE_NORMALIZATION";
pub const ENV_CLUSTERING_METHOD: &str = "LABELFOLD_CLUSTERING_METHOD";
