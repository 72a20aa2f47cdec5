use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::defaults;
use crate::constants::{CONTENT_SAMPLE_SIZE_RANGE, MAX_CATEGORIES_RANGE};
use crate::errors::{ConfigValidationError, LabelfoldError, LabelfoldResult};

/// Algorithm used to reduce the group count when it exceeds `max_categories`.
///
/// Only `Hierarchical` is implemented. The other variants are accepted so
/// that existing config files keep parsing; the engine falls back to
/// hierarchical clustering and records a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ClusteringMethod {
    #[default]
    Hierarchical,
    Dbscan,
    Kmeans,
}

impl ClusteringMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hierarchical => "hierarchical",
            Self::Dbscan => "dbscan",
            Self::Kmeans => "kmeans",
        }
    }

    /// Whether the engine has a real implementation for this method.
    pub fn is_implemented(&self) -> bool {
        matches!(self, Self::Hierarchical)
    }
}

impl fmt::Display for ClusteringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClusteringMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hierarchical" => Ok(Self::Hierarchical),
            "dbscan" => Ok(Self::Dbscan),
            "kmeans" => Ok(Self::Kmeans),
            other => Err(format!(
                "unknown clustering method '{other}', expected hierarchical, dbscan or kmeans"
            )),
        }
    }
}

/// Consolidation engine configuration.
///
/// Fields are private: every constructor validates, so a value of this type
/// always holds in-range settings. Deserialization goes through the same
/// validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(try_from = "ConsolidationConfigDocument")]
#[ts(export)]
pub struct ConsolidationConfig {
    /// Hard upper bound on the number of output groups (1–100).
    max_categories: usize,
    /// Minimum effective score for a fuzzy match (0.0–1.0).
    similarity_threshold: f64,
    /// Strip everything outside `[a-z0-9 ]` during normalization.
    aggressive_normalization: bool,
    /// Reduction algorithm for over-limit group counts.
    clustering_method: ClusteringMethod,
    /// Reserved: email-body analysis is not implemented.
    enable_content_analysis: bool,
    /// Reserved: sample size for email-body analysis (1–1000).
    content_sample_size: usize,
}

/// Raw, unvalidated shape of a config file. Missing keys take defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolidationConfigDocument {
    pub max_categories: usize,
    pub similarity_threshold: f64,
    pub aggressive_normalization: bool,
    pub clustering_method: ClusteringMethod,
    pub enable_content_analysis: bool,
    pub content_sample_size: usize,
}

impl Default for ConsolidationConfigDocument {
    fn default() -> Self {
        Self {
            max_categories: defaults::DEFAULT_MAX_CATEGORIES,
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            aggressive_normalization: defaults::DEFAULT_AGGRESSIVE_NORMALIZATION,
            clustering_method: ClusteringMethod::default(),
            enable_content_analysis: defaults::DEFAULT_ENABLE_CONTENT_ANALYSIS,
            content_sample_size: defaults::DEFAULT_CONTENT_SAMPLE_SIZE,
        }
    }
}

impl From<&ConsolidationConfig> for ConsolidationConfigDocument {
    fn from(config: &ConsolidationConfig) -> Self {
        Self {
            max_categories: config.max_categories,
            similarity_threshold: config.similarity_threshold,
            aggressive_normalization: config.aggressive_normalization,
            clustering_method: config.clustering_method,
            enable_content_analysis: config.enable_content_analysis,
            content_sample_size: config.content_sample_size,
        }
    }
}

impl TryFrom<ConsolidationConfigDocument> for ConsolidationConfig {
    type Error = ConfigValidationError;

    fn try_from(doc: ConsolidationConfigDocument) -> Result<Self, Self::Error> {
        validate_max_categories(doc.max_categories)?;
        validate_similarity_threshold(doc.similarity_threshold)?;
        validate_content_sample_size(doc.content_sample_size)?;
        Ok(Self {
            max_categories: doc.max_categories,
            similarity_threshold: doc.similarity_threshold,
            aggressive_normalization: doc.aggressive_normalization,
            clustering_method: doc.clustering_method,
            enable_content_analysis: doc.enable_content_analysis,
            content_sample_size: doc.content_sample_size,
        })
    }
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            max_categories: defaults::DEFAULT_MAX_CATEGORIES,
            similarity_threshold: defaults::DEFAULT_SIMILARITY_THRESHOLD,
            aggressive_normalization: defaults::DEFAULT_AGGRESSIVE_NORMALIZATION,
            clustering_method: ClusteringMethod::default(),
            enable_content_analysis: defaults::DEFAULT_ENABLE_CONTENT_ANALYSIS,
            content_sample_size: defaults::DEFAULT_CONTENT_SAMPLE_SIZE,
        }
    }
}

impl ConsolidationConfig {
    /// Build a config with the given limit and threshold; everything else defaults.
    pub fn new(
        max_categories: usize,
        similarity_threshold: f64,
    ) -> Result<Self, ConfigValidationError> {
        validate_max_categories(max_categories)?;
        validate_similarity_threshold(similarity_threshold)?;
        Ok(Self {
            max_categories,
            similarity_threshold,
            ..Self::default()
        })
    }

    pub fn with_aggressive_normalization(mut self, aggressive: bool) -> Self {
        self.aggressive_normalization = aggressive;
        self
    }

    pub fn with_clustering_method(mut self, method: ClusteringMethod) -> Self {
        self.clustering_method = method;
        self
    }

    /// Set the reserved content-analysis flags.
    pub fn with_content_analysis(
        mut self,
        enabled: bool,
        sample_size: usize,
    ) -> Result<Self, ConfigValidationError> {
        validate_content_sample_size(sample_size)?;
        self.enable_content_analysis = enabled;
        self.content_sample_size = sample_size;
        Ok(self)
    }

    pub fn max_categories(&self) -> usize {
        self.max_categories
    }

    pub fn similarity_threshold(&self) -> f64 {
        self.similarity_threshold
    }

    pub fn aggressive_normalization(&self) -> bool {
        self.aggressive_normalization
    }

    pub fn clustering_method(&self) -> ClusteringMethod {
        self.clustering_method
    }

    pub fn enable_content_analysis(&self) -> bool {
        self.enable_content_analysis
    }

    pub fn content_sample_size(&self) -> usize {
        self.content_sample_size
    }

    /// Load configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> LabelfoldResult<Self> {
        Self::parse_document(toml_str, "<string>")
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> LabelfoldResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|_| LabelfoldError::ConfigFileNotFound {
                path: path.display().to_string(),
            })?;
        Self::parse_document(&content, &path.display().to_string())
    }

    /// Serialize to TOML, e.g. to write out the effective config of a run.
    pub fn to_toml(&self) -> LabelfoldResult<String> {
        toml::to_string(&ConsolidationConfigDocument::from(self)).map_err(|e| {
            LabelfoldError::ConfigParse {
                path: "<string>".to_string(),
                message: e.to_string(),
            }
        })
    }

    /// Apply `LABELFOLD_*` environment variable overrides.
    pub fn apply_env_overrides(self) -> LabelfoldResult<Self> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Unparseable values are ignored; parsed values are validated, so an
    /// out-of-range override is an error.
    pub fn apply_overrides_from<F>(self, lookup: F) -> LabelfoldResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut doc = ConsolidationConfigDocument::from(&self);

        if let Some(v) = lookup(defaults::ENV_MAX_CATEGORIES).and_then(|v| v.trim().parse().ok()) {
            doc.max_categories = v;
        }
        if let Some(v) =
            lookup(defaults::ENV_SIMILARITY_THRESHOLD).and_then(|v| v.trim().parse().ok())
        {
            doc.similarity_threshold = v;
        }
        if let Some(v) =
            lookup(defaults::ENV_AGGRESSIVE_NORMALIZATION).and_then(|v| parse_bool(&v))
        {
            doc.aggressive_normalization = v;
        }
        if let Some(v) = lookup(defaults::ENV_CLUSTERING_METHOD).and_then(|v| v.parse().ok()) {
            doc.clustering_method = v;
        }

        Ok(Self::try_from(doc)?)
    }

    fn parse_document(content: &str, path: &str) -> LabelfoldResult<Self> {
        let doc: ConsolidationConfigDocument =
            toml::from_str(content).map_err(|e| LabelfoldError::ConfigParse {
                path: path.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self::try_from(doc)?)
    }
}

fn validate_max_categories(value: usize) -> Result<(), ConfigValidationError> {
    if MAX_CATEGORIES_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(ConfigValidationError::MaxCategoriesOutOfRange {
            value,
            min: *MAX_CATEGORIES_RANGE.start(),
            max: *MAX_CATEGORIES_RANGE.end(),
        })
    }
}

fn validate_similarity_threshold(value: f64) -> Result<(), ConfigValidationError> {
    // NaN fails `contains`.
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigValidationError::SimilarityThresholdOutOfRange { value })
    }
}

fn validate_content_sample_size(value: usize) -> Result<(), ConfigValidationError> {
    if CONTENT_SAMPLE_SIZE_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(ConfigValidationError::ContentSampleSizeOutOfRange {
            value,
            min: *CONTENT_SAMPLE_SIZE_RANGE.start(),
            max: *CONTENT_SAMPLE_SIZE_RANGE.end(),
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
