//! Benchmarks for residual and Jacobian assembly.
//!
//! Run with: `cargo bench --bench assembly_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use advdiff_rs::{
    AdvectionDiffusion1D, ConstantWind, FluxLimiter, Grid1D, LocalSolution, OwnedRange,
    assemble_jacobian, assemble_residual,
};

fn setup(n: usize) -> (Grid1D, AdvectionDiffusion1D<ConstantWind>, Vec<f64>) {
    let grid = Grid1D::new(n).unwrap();
    let problem = AdvectionDiffusion1D::new(0.01, ConstantWind(1.0)).unwrap();
    let u: Vec<f64> = (0..n).map(|i| (0.7 * i as f64).sin()).collect();
    (grid, problem, u)
}

fn bench_residual(c: &mut Criterion) {
    let n = 4097;
    let (grid, problem, u) = setup(n);

    let mut group = c.benchmark_group("residual_assembly");
    for limiter in [FluxLimiter::None, FluxLimiter::Centered, FluxLimiter::VanLeer] {
        let view = LocalSolution::from_global(&u, OwnedRange::new(0, n), limiter.stencil_width());
        group.bench_with_input(
            BenchmarkId::new("limiter", limiter.name()),
            &limiter,
            |b, &limiter| {
                b.iter(|| assemble_residual(black_box(&grid), &view, &problem, limiter))
            },
        );
    }
    group.finish();
}

fn bench_jacobian(c: &mut Criterion) {
    let n = 4097;
    let (grid, problem, u) = setup(n);
    let view = LocalSolution::from_global(&u, OwnedRange::new(0, n), 2);

    let mut group = c.benchmark_group("jacobian_assembly");
    for limiter in [FluxLimiter::None, FluxLimiter::Centered] {
        group.bench_with_input(
            BenchmarkId::new("limiter", limiter.name()),
            &limiter,
            |b, &limiter| {
                b.iter(|| assemble_jacobian(black_box(&grid), &view, &problem, limiter).unwrap())
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_residual, bench_jacobian);
criterion_main!(benches);
