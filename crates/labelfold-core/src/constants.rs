/// labelfold version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Canonical name of the catch-all bucket created by forced consolidation.
pub const OTHER_BUCKET_NAME: &str = "other";

/// Warning attached to the result when the input holds no usable label.
pub const NO_VALID_LABELS_WARNING: &str = "No valid labels provided";

/// Confidence assigned to exact-normalization groups and fresh singletons.
pub const EXACT_MATCH_SCORE: f64 = 1.0;

/// Confidence assigned to groups produced by hierarchical clustering.
pub const CLUSTERED_GROUP_SCORE: f64 = 0.7;

/// Confidence assigned to the forced "other" bucket.
pub const FORCED_GROUP_SCORE: f64 = 0.5;

/// Floor applied to a fuzzy score when label terms overlap a group's terms.
pub const TERM_OVERLAP_SCORE: f64 = 0.9;

/// Minimum length of a significant term in fuzzy matching.
pub const MIN_TERM_LENGTH: usize = 3;

/// Minimum length of both terms in a substring containment check.
pub const MIN_CONTAINMENT_LENGTH: usize = 4;

/// Character n-gram size used by the Jaccard metric.
pub const NGRAM_SIZE: usize = 3;

/// Words must be longer than this to become a canonical name.
pub const MIN_CANONICAL_WORD_LENGTH: usize = 2;

/// Valid range of `max_categories`.
pub const MAX_CATEGORIES_RANGE: std::ops::RangeInclusive<usize> = 1..=100;

/// Valid range of `content_sample_size`.
pub const CONTENT_SAMPLE_SIZE_RANGE: std::ops::RangeInclusive<usize> = 1..=1000;
