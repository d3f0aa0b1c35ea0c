//! Benchmarks for conversions into Cartesian coordinates
//!
//! The dedicated `From<Polar3D>` conversion reads rho and phi once, while the
//! generic path asks the polar coordinate for x, y and z separately.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use genvector::{Cartesian3D, Polar3D};

fn polar_to_cartesian(c: &mut Criterion) {
    let polar = Polar3D::new(12.5, 0.8, -2.1);

    let mut group = c.benchmark_group("polar_to_cartesian");
    group.bench_function("specialized", |b| {
        b.iter(|| Cartesian3D::from(black_box(polar)))
    });
    group.bench_function("generic", |b| {
        b.iter(|| Cartesian3D::from_coordinates(black_box(&polar)))
    });
    group.finish();
}

fn eta(c: &mut Criterion) {
    let central = Cartesian3D::new(3.0, 4.0, 1.0);
    let forward = Cartesian3D::new(1e-7, 0.0, 1e4);

    let mut group = c.benchmark_group("eta");
    group.bench_function("stable_branch", |b| b.iter(|| black_box(central).eta()));
    group.bench_function("asymptotic_branch", |b| b.iter(|| black_box(forward).eta()));
    group.finish();
}

criterion_group!(benches, polar_to_cartesian, eta);
criterion_main!(benches);
