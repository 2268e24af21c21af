//! Reference solution sampling and error norms.

mod exact;
mod metrics;

pub use exact::ExactSolution;
pub use metrics::ErrorNorms;
