// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use sightline_measure::{measure, measure_selection};
use sightline_mixed::{MixedOptions, Object, mixed};
use sightline_tree::Node;
use sightline_tree::candidates::snap_candidates;

fn gen_objects(n: usize) -> Vec<Object> {
    (0..n)
        .map(|i| {
            let mut o = Object::new()
                .with("id", format!("node-{i}"))
                .with("type", if i % 3 == 0 { "text" } else { "rect" })
                .with("x", (i * 10) as f64)
                .with("y", 0.0)
                .with("opacity", if i % 2 == 0 { 1.0 } else { 0.5 })
                .with("locked", false);
            if i % 3 == 0 {
                o.insert("text", "label");
                o.insert("fontSize", 14.0);
            }
            o
        })
        .collect()
}

/// A page with `frames` frames of `per_frame` shapes each.
fn gen_scene(frames: usize, per_frame: usize) -> Vec<Node<u32>> {
    let mut id = 0_u32;
    let mut next = || {
        id += 1;
        id
    };
    vec![Node::with_children(
        next(),
        (0..frames)
            .map(|_| {
                let frame = next();
                let shapes = (0..per_frame).map(|_| Node::leaf(next())).collect();
                Node::with_children(frame, shapes)
            })
            .collect(),
    )]
}

fn bench_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    for &n in &[2usize, 16, 128] {
        let objects = gen_objects(n);
        let ignored = ["type"];
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("summarize_n{}", n), |b| {
            b.iter(|| {
                let options = MixedOptions::new("id", ()).ignore_keys(&ignored);
                let props = mixed(black_box(&objects), &options);
                black_box(props.len())
            });
        });
    }
    group.finish();
}

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");
    let a = Rect::from_origin_size((0.0, 0.0), (100.0, 100.0));
    let b = Rect::from_origin_size((140.0, 30.0), (50.0, 50.0));
    group.bench_function("pair_with_guides", |bench| {
        bench.iter(|| {
            let m = measure(black_box(a), black_box(b));
            black_box(m.map(|m| m.guides().count()))
        });
    });
    let selection: Vec<Rect> = (0..32)
        .map(|i| Rect::from_origin_size((f64::from(i) * 3.3, 0.0), (10.0, 10.0)))
        .collect();
    group.bench_function("selection_of_32", |bench| {
        bench.iter(|| black_box(measure_selection(selection.iter().copied(), [b])));
    });
    group.finish();
}

fn bench_candidates(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap_candidates");
    for &(frames, per_frame) in &[(10usize, 10usize), (50, 100)] {
        let scene = gen_scene(frames, per_frame);
        // The first shape in the middle frame.
        let selected = [(frames / 2 * (per_frame + 1) + 3) as u32];
        group.bench_function(format!("frames{}_shapes{}", frames, per_frame), |b| {
            b.iter(|| {
                let found = snap_candidates(black_box(&scene), |n| n.value, &selected);
                black_box(found.len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_mixed, bench_measure, bench_candidates);
criterion_main!(benches);
