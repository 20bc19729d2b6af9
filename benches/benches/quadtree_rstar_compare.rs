// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Point, QuadTree, Rectangle};

use rstar::{AABB, RTree};

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    let origin = -(n as f64) * cell / 2.0;
    for y in 0..n {
        for x in 0..n {
            out.push(Point::new(
                origin + x as f64 * cell,
                origin + y as f64 * cell,
            ));
        }
    }
    out
}

fn to_rstar_points(v: &[Point]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_point_index_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_index_compare");
    for &n in &[64usize, 128] {
        let cell = 10.0;
        let points = gen_grid_points(n, cell);
        let extent = n as f64 * cell + cell;
        let query = Rectangle::new(50.0, 50.0, 400.0, 400.0);
        let tl = query.top_left();
        let br = query.bottom_right();
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("understory_build_query_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(extent, extent, 6, 16),
                |mut qt| {
                    qt.insert_all(points.iter().copied());
                    black_box(qt.search(&query).len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    let aabb = AABB::from_corners([tl.x, br.y], [br.x, tl.y]);
                    let hits: usize = tree.locate_in_envelope(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_point_index_compare);
criterion_main!(benches);
