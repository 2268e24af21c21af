//! Distributed solution storage and halo exchange.
//!
//! A [`DistributedVector`] holds one contiguous slice of the global solution
//! per worker. Before each residual or Jacobian evaluation the workers
//! refresh their ghost values through [`DistributedVector::extended_views`],
//! a synchronous exchange that produces one immutable [`LocalSolution`]
//! (owned values plus halo) per worker. The evaluators read only these views;
//! the halo is never mutated concurrently with a computation that reads it.
//!
//! The halo width follows the residual stencil: 1 for pure upwinding, 2 when
//! a limiter correction is active, because the smoothness ratio at a face
//! reaches one cell past the upwind value.

use super::partition::{OwnedRange, Partition};

/// One worker's view of the solution: owned values plus a halo clipped to the
/// domain.
#[derive(Clone, Debug)]
pub struct LocalSolution {
    range: OwnedRange,
    halo_width: usize,
    /// Global index of `data[0]`; max(range.start - halo_width, 0).
    first: usize,
    data: Vec<f64>,
}

impl LocalSolution {
    /// Build a view directly from the global solution array.
    ///
    /// This is the single-worker / test path; the distributed path goes
    /// through [`DistributedVector::extended_views`].
    pub fn from_global(global: &[f64], range: OwnedRange, halo_width: usize) -> Self {
        let n = global.len();
        assert!(range.end <= n, "owned range exceeds global length");

        let first = range.start.saturating_sub(halo_width);
        let last = (range.end + halo_width).min(n);
        Self {
            range,
            halo_width,
            first,
            data: global[first..last].to_vec(),
        }
    }

    /// The owned index range.
    pub fn range(&self) -> OwnedRange {
        self.range
    }

    /// Halo width this view was built with.
    pub fn halo_width(&self) -> usize {
        self.halo_width
    }

    /// Solution value at global index `i`.
    ///
    /// `i` must lie within the owned range extended by the halo width and
    /// clipped to the domain.
    pub fn value(&self, i: usize) -> f64 {
        debug_assert!(
            i >= self.first && i < self.first + self.data.len(),
            "index {} outside local view [{}, {})",
            i,
            self.first,
            self.first + self.data.len()
        );
        self.data[i - self.first]
    }

    /// The owned values as a slice.
    pub fn owned(&self) -> &[f64] {
        let lo = self.range.start - self.first;
        &self.data[lo..lo + self.range.len()]
    }
}

/// Global solution vector stored as per-worker parts.
///
/// The parts are aligned with a [`Partition`]; concatenated in worker order
/// they form the global array of length `partition.n_points()`.
#[derive(Clone, Debug)]
pub struct DistributedVector {
    partition: Partition,
    parts: Vec<Vec<f64>>,
}

impl DistributedVector {
    /// All-zero vector over the given partition.
    pub fn zeros(partition: &Partition) -> Self {
        let parts = partition.ranges().iter().map(|r| vec![0.0; r.len()]).collect();
        Self {
            partition: partition.clone(),
            parts,
        }
    }

    /// Scatter a global array into per-worker parts.
    pub fn from_global(partition: &Partition, global: &[f64]) -> Self {
        assert_eq!(global.len(), partition.n_points(), "length mismatch");
        let parts = partition
            .ranges()
            .iter()
            .map(|r| global[r.start..r.end].to_vec())
            .collect();
        Self {
            partition: partition.clone(),
            parts,
        }
    }

    /// The partition this vector is distributed over.
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Owned part of worker `w`.
    pub fn part(&self, w: usize) -> &[f64] {
        &self.parts[w]
    }

    /// Value at global index `i`, looked up through the owning worker.
    pub fn value(&self, i: usize) -> f64 {
        let w = self.partition.owner(i);
        self.parts[w][i - self.partition.range(w).start]
    }

    /// Concatenate the parts into a global array.
    pub fn gather(&self) -> Vec<f64> {
        let mut global = Vec::with_capacity(self.partition.n_points());
        for part in &self.parts {
            global.extend_from_slice(part);
        }
        global
    }

    /// Add a global-length increment to the owned parts, in place.
    pub fn apply_increment(&mut self, delta: &[f64]) {
        assert_eq!(delta.len(), self.partition.n_points(), "length mismatch");
        for (w, part) in self.parts.iter_mut().enumerate() {
            let start = self.partition.range(w).start;
            for (k, v) in part.iter_mut().enumerate() {
                *v += delta[start + k];
            }
        }
    }

    /// Refresh every worker's halo and return the extended views.
    ///
    /// This is the synchronous, blocking exchange step: each view is complete
    /// when returned, and evaluation must not start before it. Ghost values
    /// are pulled from whichever worker owns the neighboring indices, so the
    /// exchange also works across empty ranges.
    pub fn extended_views(&self, halo_width: usize) -> Vec<LocalSolution> {
        let n = self.partition.n_points();
        self.partition
            .ranges()
            .iter()
            .map(|&range| {
                let first = range.start.saturating_sub(halo_width);
                let last = (range.end + halo_width).min(n);
                let data = (first..last).map(|i| self.value(i)).collect();
                LocalSolution {
                    range,
                    halo_width,
                    first,
                    data,
                }
            })
            .collect()
    }
}
