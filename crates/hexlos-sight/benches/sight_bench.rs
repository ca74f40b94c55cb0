//! Benchmarks for hexlos line of sight
//!
//! Measures performance of:
//! - Point classification
//! - Bearing computation
//! - Path tracing at increasing ranges

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hexlos_grid::{classify, GridPoint};
use hexlos_sight::{Bearing, LineOfSight, LosConfig};

/// Benchmark classification across one role period
fn bench_classify(c: &mut Criterion) {
    let points: Vec<GridPoint> = (0..4)
        .flat_map(|x| (0..4).map(move |y| GridPoint::new(x, y)))
        .collect();

    let mut group = c.benchmark_group("classify");
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("role_period", |b| {
        b.iter(|| {
            for &p in &points {
                let _ = black_box(classify(black_box(p)));
            }
        })
    });
    group.finish();
}

/// Benchmark bearing computation
fn bench_bearing(c: &mut Criterion) {
    let destinations = [
        GridPoint::new(4, 0),
        GridPoint::new(10, 2),
        GridPoint::new(0, -4),
        GridPoint::new(-34, 18),
    ];

    c.bench_function("bearing_between", |b| {
        b.iter(|| {
            for &d in &destinations {
                black_box(Bearing::between(GridPoint::ORIGIN, black_box(d)));
            }
        })
    });
}

/// Benchmark tracing at different ranges, one line per bearing kind
fn bench_trace(c: &mut Criterion) {
    let tracers = [
        ("expanded", LineOfSight::new(LosConfig::default())),
        ("collapsed", LineOfSight::new(LosConfig::hexagons_only())),
    ];

    for (label, tracer) in tracers {
        let mut group = c.benchmark_group(format!("trace_{}", label));
        for &hexagons in &[1i64, 10, 100, 1000] {
            let lines = [
                ("straight", GridPoint::new(4 * hexagons, 0)),
                ("corner", GridPoint::new(0, -4 * hexagons)),
                ("zigzag", GridPoint::new(10 * hexagons, 2 * hexagons)),
            ];
            for (kind, destination) in lines {
                group.throughput(Throughput::Elements(hexagons as u64));
                group.bench_with_input(
                    BenchmarkId::new(kind, hexagons),
                    &destination,
                    |b, &d| b.iter(|| tracer.trace(GridPoint::ORIGIN, black_box(d))),
                );
            }
        }
        group.finish();
    }
}

criterion_group!(benches, bench_classify, bench_bearing, bench_trace);
criterion_main!(benches);
