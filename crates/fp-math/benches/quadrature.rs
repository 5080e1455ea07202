use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fp_math::{fd_moments, gauss_legendre, normal_pdf, CovarianceMatrix, Matrix, Normal, Vector};

fn bench_gauss_legendre(c: &mut Criterion) {
    let mut group = c.benchmark_group("gauss_legendre");
    let f = |x: f64| (0.3 * x).exp() * normal_pdf(x);

    group.bench_function("order 8", |b| {
        b.iter(|| gauss_legendre::<8, _, f64>(f, black_box(-5.0), black_box(5.0)))
    });
    group.bench_function("order 16", |b| {
        b.iter(|| gauss_legendre::<16, _, f64>(f, black_box(-5.0), black_box(5.0)))
    });
    group.bench_function("order 24", |b| {
        b.iter(|| gauss_legendre::<24, _, f64>(f, black_box(-5.0), black_box(5.0)))
    });
    group.bench_function("order 32", |b| {
        b.iter(|| gauss_legendre::<32, _, f64>(f, black_box(-5.0), black_box(5.0)))
    });
    group.bench_function("order 48", |b| {
        b.iter(|| gauss_legendre::<48, _, f64>(f, black_box(-5.0), black_box(5.0)))
    });
    group.finish();
}

fn bench_moments(c: &mut Criterion) {
    let vols = Vector::<3>::new(0.3, 0.2, 0.45);
    let corr = Matrix::<3, 3>::new(1.0, 0.6, -0.3, 0.6, 1.0, 0.2, -0.3, 0.2, 1.0);
    let d = Normal::new(
        Vector::<3>::new(-0.045, 0.12, 0.3),
        CovarianceMatrix::from_vols_and_correlations(&vols, &corr),
    );
    let lt = d.laplace_transform_fn();

    c.bench_function("fd_moments 3d", |b| {
        b.iter(|| fd_moments(&lt, black_box(1e-4)))
    });
}

criterion_group!(benches, bench_gauss_legendre, bench_moments);
criterion_main!(benches);
