//! Error handling for labelfold.
//! One error enum per concern, `thiserror` only.

pub mod clustering_error;
pub mod config_error;

pub use clustering_error::ClusteringError;
pub use config_error::ConfigValidationError;

/// Top-level error type for the labelfold crates.
#[derive(Debug, thiserror::Error)]
pub enum LabelfoldError {
    #[error("invalid configuration: {0}")]
    ConfigValidation(#[from] ConfigValidationError),

    #[error("failed to parse config {path}: {message}")]
    ConfigParse { path: String, message: String },

    #[error("config file not found: {path}")]
    ConfigFileNotFound { path: String },

    #[error("clustering error: {0}")]
    Clustering(#[from] ClusteringError),
}

/// Convenience alias used across the workspace.
pub type LabelfoldResult<T> = Result<T, LabelfoldError>;
