/// Raised when a `ConsolidationConfig` is built with out-of-range values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("max_categories must be between {min} and {max}, got {value}")]
    MaxCategoriesOutOfRange { value: usize, min: usize, max: usize },

    #[error("similarity_threshold must be between 0.0 and 1.0, got {value}")]
    SimilarityThresholdOutOfRange { value: f64 },

    #[error("content_sample_size must be between {min} and {max}, got {value}")]
    ContentSampleSizeOutOfRange { value: usize, min: usize, max: usize },
}
