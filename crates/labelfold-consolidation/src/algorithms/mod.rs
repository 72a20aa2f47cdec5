//! Consolidation algorithms: normalization, similarity metrics, term
//! extraction, distance matrices, and Ward agglomeration.

pub mod distance;
pub mod normalize;
pub mod similarity;
pub mod terms;
pub mod ward;
