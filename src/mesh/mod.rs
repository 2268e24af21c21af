//! Grid representation and spatial domain decomposition.
//!
//! Provides the structured 1D grid and its partitioning across workers:
//! - [`Grid1D`]: uniform grid on [-1, 1] with Dirichlet boundary nodes
//! - [`OwnedRange`] / [`Partition`]: disjoint contiguous index ranges
//! - [`DistributedVector`] / [`LocalSolution`]: per-worker storage and the
//!   halo exchange producing owned+halo views for the evaluators

mod grid1d;
mod halo;
mod partition;

pub use grid1d::{BoundaryFace, Grid1D, GridError};
pub use halo::{DistributedVector, LocalSolution};
pub use partition::{OwnedRange, Partition};
