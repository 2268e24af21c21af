//! Domain-decomposition invariance of the assembled system.
//!
//! The residual and Jacobian must not depend on how the grid is split across
//! workers: the face flux shared at an ownership boundary is computed by
//! both neighbors and filtered by ownership, and the two halves must add up
//! to exactly the single-worker result.

use advdiff_rs::{
    AdvectionDiffusion1D, DistributedVector, FluxLimiter, Grid1D, Partition, WindModel,
    assemble_jacobian, assemble_residual, finalize_jacobian,
};

fn random_iterate(n: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 33) as u32 as f64 / u32::MAX as f64 * 2.0 - 1.0
        })
        .collect()
}

fn distributed_residual<W: WindModel>(
    grid: &Grid1D,
    global: &[f64],
    problem: &AdvectionDiffusion1D<W>,
    limiter: FluxLimiter,
    workers: usize,
) -> Vec<f64> {
    let partition = Partition::uniform(grid.n_points(), workers);
    let u = DistributedVector::from_global(&partition, global);
    u.extended_views(limiter.stencil_width())
        .iter()
        .flat_map(|view| assemble_residual(grid, view, problem, limiter))
        .collect()
}

#[test]
fn test_residual_independent_of_worker_count() {
    let n = 17;
    let grid = Grid1D::new(n).unwrap();
    // Sign-changing wind so both upwind directions cross ownership
    // boundaries somewhere
    let problem =
        AdvectionDiffusion1D::new(0.02, |x: f64| (std::f64::consts::PI * x).cos()).unwrap();
    let u = random_iterate(n, 23);

    for limiter in [FluxLimiter::None, FluxLimiter::Centered, FluxLimiter::VanLeer] {
        let reference = distributed_residual(&grid, &u, &problem, limiter, 1);
        for workers in [2, 3, 4, 5, 8, 17, 20] {
            let split = distributed_residual(&grid, &u, &problem, limiter, workers);
            assert_eq!(split.len(), n);
            for i in 0..n {
                assert!(
                    (split[i] - reference[i]).abs() < 1e-14,
                    "limiter {}, workers {}, row {}: {} vs {}",
                    limiter,
                    workers,
                    i,
                    split[i],
                    reference[i]
                );
            }
        }
    }
}

#[test]
fn test_jacobian_independent_of_worker_count() {
    let n = 17;
    let grid = Grid1D::new(n).unwrap();
    let problem =
        AdvectionDiffusion1D::new(0.02, |x: f64| (std::f64::consts::PI * x).cos()).unwrap();
    let u = random_iterate(n, 31);

    for limiter in [FluxLimiter::None, FluxLimiter::Centered] {
        let reference = {
            let partition = Partition::uniform(n, 1);
            let dist = DistributedVector::from_global(&partition, &u);
            let views = dist.extended_views(limiter.stencil_width());
            let tri = assemble_jacobian(&grid, &views[0], &problem, limiter).unwrap();
            finalize_jacobian(n, [tri])
        };

        for workers in [2, 3, 5, 8] {
            let partition = Partition::uniform(n, workers);
            let dist = DistributedVector::from_global(&partition, &u);
            let parts: Vec<_> = dist
                .extended_views(limiter.stencil_width())
                .iter()
                .map(|view| assemble_jacobian(&grid, view, &problem, limiter).unwrap())
                .collect();
            let jac = finalize_jacobian(n, parts);

            for i in 0..n {
                for j in 0..n {
                    assert!(
                        (jac[(i, j)] - reference[(i, j)]).abs() < 1e-14,
                        "limiter {}, workers {}, entry ({}, {})",
                        limiter,
                        workers,
                        i,
                        j
                    );
                }
            }
        }
    }
}
