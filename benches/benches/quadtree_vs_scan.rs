// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Point, QuadTree, Rectangle};

const WORLD: f64 = 2000.0;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_uniform_points(count: usize) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            Point::new(
                (rng.next_f64() - 0.5) * WORLD,
                (rng.next_f64() - 0.5) * WORLD,
            )
        })
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let cx = (rng.next_f64() - 0.5) * (WORLD - spread);
        let cy = (rng.next_f64() - 0.5) * (WORLD - spread);
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn build(points: &[Point]) -> QuadTree {
    let mut qt = QuadTree::new(WORLD, WORLD, 6, 16);
    qt.insert_all(points.iter().copied());
    qt
}

fn linear_scan(points: &[Point], range: &Rectangle) -> usize {
    points.iter().filter(|p| range.contains(**p)).count()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_insert");
    for &n in &[1_000usize, 10_000, 50_000] {
        let points = gen_uniform_points(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uniform_n{}", n), |b| {
            b.iter(|| black_box(build(&points).len()));
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_search");
    let query = Rectangle::new(100.0, -50.0, 200.0, 200.0);
    for &n in &[1_000usize, 10_000, 50_000] {
        let points = gen_uniform_points(n);
        let qt = build(&points);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("quadtree_uniform_n{}", n), |b| {
            b.iter(|| black_box(qt.search(&query).len()));
        });
        group.bench_function(format!("scan_uniform_n{}", n), |b| {
            b.iter(|| black_box(linear_scan(&points, &query)));
        });
    }

    let points = gen_clustered_points(32, 512, 60.0);
    let qt = build(&points);
    let mut buf = Vec::new();
    group.bench_function("quadtree_clustered_reused_buffer", |b| {
        b.iter(|| {
            buf.clear();
            qt.search_into(&query, &mut buf);
            black_box(buf.len());
        });
    });
    group.bench_function("scan_clustered", |b| {
        b.iter(|| black_box(linear_scan(&points, &query)));
    });
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_remove");
    let points = gen_uniform_points(10_000);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("remove_all_uniform_n10000", |b| {
        b.iter_batched(
            || build(&points),
            |mut qt| {
                let removed = qt.remove_all(points.iter().copied());
                black_box(removed);
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("remove_range_uniform_n10000", |b| {
        b.iter_batched(
            || build(&points),
            |mut qt| {
                let removed = qt.remove_range(&Rectangle::new(0.0, 0.0, 500.0, 500.0));
                black_box(removed);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_search, bench_remove);
criterion_main!(benches);
