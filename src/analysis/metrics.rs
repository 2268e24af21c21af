//! Error norms for comparing a computed solution against a reference.

/// Discrete error norms between a computed solution and a reference.
#[derive(Clone, Copy, Debug)]
pub struct ErrorNorms {
    /// Infinity norm: max |u_i - ref_i|
    pub inf: f64,
    /// Mesh-scaled 2-norm: sqrt(h) * ||u - ref||_2, comparable across
    /// refinement levels
    pub l2_scaled: f64,
    /// Number of points compared
    pub n_points: usize,
}

impl ErrorNorms {
    /// Compute norms of `computed - reference` on a grid with spacing `h`.
    ///
    /// # Panics
    ///
    /// Panics if the arrays differ in length or are empty.
    pub fn compute(computed: &[f64], reference: &[f64], h: f64) -> Self {
        assert_eq!(
            computed.len(),
            reference.len(),
            "computed and reference must have same length"
        );
        assert!(!computed.is_empty(), "arrays must not be empty");

        let mut inf: f64 = 0.0;
        let mut sumsq = 0.0;
        for (&c, &r) in computed.iter().zip(reference.iter()) {
            let e = c - r;
            inf = inf.max(e.abs());
            sumsq += e * e;
        }

        Self {
            inf,
            l2_scaled: h.sqrt() * sumsq.sqrt(),
            n_points: computed.len(),
        }
    }
}
