/// Errors from an agglomeration backend.
///
/// The pipeline treats every variant as "skip clustering" and falls through
/// to forced consolidation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClusteringError {
    #[error("degenerate distance matrix: {reason}")]
    DegenerateMatrix { reason: String },

    #[error("cannot cut {points} points into {target} clusters")]
    InvalidTarget { target: usize, points: usize },
}
