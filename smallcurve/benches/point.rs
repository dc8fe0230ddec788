//! smallcurve point arithmetic benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use smallcurve::{
    Point,
    test_vectors::{DH_BASE_POINT, DH_CURVE},
};
use std::hint::black_box;

const POINT_B: Point = Point::new(2373, 2607);

fn bench_point_add<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.bench_function("add", |b| {
        b.iter(|| DH_CURVE.add(black_box(&DH_BASE_POINT), black_box(&POINT_B)))
    });
}

fn bench_point_double<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.bench_function("double", |b| {
        b.iter(|| DH_CURVE.double(black_box(&DH_BASE_POINT)))
    });
}

fn bench_point_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.bench_function("point-scalar mul", |b| {
        b.iter(|| DH_CURVE.scalar_multiply(black_box(&DH_BASE_POINT), black_box(1759)))
    });
}

fn bench_div_mod<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.bench_function("div_mod", |b| {
        b.iter(|| DH_CURVE.div_mod(black_box(1194), black_box(1759)))
    });
}

fn bench_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("point operations");
    bench_point_add(&mut group);
    bench_point_double(&mut group);
    bench_point_mul(&mut group);
    bench_div_mod(&mut group);
    group.finish();
}

criterion_group!(benches, bench_point);
criterion_main!(benches);
