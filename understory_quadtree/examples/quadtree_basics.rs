// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory QuadTree: insert, search, remove, search again, clear.
//!
//! Run:
//! - `cargo run -p understory_quadtree --example quadtree_basics`

use understory_quadtree::{QuadTree, Rectangle};

fn main() {
    let mut qt = QuadTree::with_center(0.0, 0.0, 100.0, 100.0, 4, 4);
    qt.insert_xy(-10.0, -10.0);
    qt.insert_xy(10.0, 10.0);
    qt.insert_xy(-10.0, 10.0);
    qt.insert_xy(10.0, -10.0);

    let range = Rectangle::new(10.0, 10.0, 1.0, 1.0);
    for p in qt.search(&range) {
        println!("{p}");
    }

    qt.remove_xy(10.0, 10.0);
    let hits = qt.search(&range);
    println!("after remove: {} hit(s) in {:?}", hits.len(), range);

    qt.clear();
    println!("cleared: {qt:?}");
}
