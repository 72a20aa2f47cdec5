mod agglomerator;
mod consolidator;

pub use agglomerator::Agglomerator;
pub use consolidator::ILabelConsolidator;
