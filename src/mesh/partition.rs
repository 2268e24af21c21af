//! Partitioning of the global index range across workers.
//!
//! Each worker owns a contiguous half-open range of point indices; the owned
//! ranges partition [0, n) exactly, with no gap or overlap. Workers are
//! ordered left to right, so worker w+1 owns the indices immediately to the
//! right of worker w.

/// Half-open range [start, end) of globally indexed grid points owned by one
/// worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OwnedRange {
    /// First owned index.
    pub start: usize,
    /// One past the last owned index.
    pub end: usize,
}

impl OwnedRange {
    /// Create a range; `start <= end` is required.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "invalid range [{}, {})", start, end);
        Self { start, end }
    }

    /// Number of owned points.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range owns no points.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether global index `i` is owned.
    pub fn contains(&self, i: usize) -> bool {
        self.start <= i && i < self.end
    }

    /// Iterator over the owned indices.
    pub fn iter(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Decomposition of [0, n_points) into per-worker owned ranges.
#[derive(Clone, Debug)]
pub struct Partition {
    n_points: usize,
    ranges: Vec<OwnedRange>,
}

impl Partition {
    /// Split `n_points` indices across `n_workers` as evenly as possible.
    ///
    /// The remainder of `n_points / n_workers` is spread one extra point each
    /// over the first workers, so sizes differ by at most one.
    pub fn uniform(n_points: usize, n_workers: usize) -> Self {
        assert!(n_workers > 0, "need at least one worker");

        let base = n_points / n_workers;
        let remainder = n_points % n_workers;

        let mut ranges = Vec::with_capacity(n_workers);
        let mut start = 0;
        for w in 0..n_workers {
            let len = base + usize::from(w < remainder);
            ranges.push(OwnedRange::new(start, start + len));
            start += len;
        }

        Self { n_points, ranges }
    }

    /// Global number of points being partitioned.
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Number of workers.
    pub fn n_workers(&self) -> usize {
        self.ranges.len()
    }

    /// Owned range of worker `w`.
    pub fn range(&self, w: usize) -> OwnedRange {
        self.ranges[w]
    }

    /// All owned ranges, ordered left to right.
    pub fn ranges(&self) -> &[OwnedRange] {
        &self.ranges
    }

    /// The worker owning global index `i`.
    pub fn owner(&self, i: usize) -> usize {
        assert!(i < self.n_points, "index {} out of range", i);
        // Ranges are contiguous and ordered, so a scan suffices for the
        // worker counts in play; empty ranges are skipped by `contains`.
        self.ranges
            .iter()
            .position(|r| r.contains(i))
            .expect("ranges cover [0, n_points)")
    }
}
