// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Vec2};
use sightline_snap::{SnapConfig, anchors_of, axis_aligned, snap_rect, to_9_points};

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

/// `count` sibling boxes scattered over a 2000x2000 artboard.
fn gen_siblings(count: usize) -> Vec<Rect> {
    let mut rng = Rng::new(0x5EED_CAFE_F00D_0001);
    (0..count)
        .map(|_| {
            let x = (rng.next_f64() * 2000.0).round();
            let y = (rng.next_f64() * 2000.0).round();
            let w = 20.0 + (rng.next_f64() * 180.0).round();
            let h = 20.0 + (rng.next_f64() * 180.0).round();
            Rect::from_origin_size((x, y), (w, h))
        })
        .collect()
}

fn bench_axis_aligned(c: &mut Criterion) {
    let mut group = c.benchmark_group("axis_aligned");
    let agent = to_9_points(Rect::from_origin_size((997.3, 1002.6), (120.0, 80.0))).to_array();
    for &n in &[8usize, 64, 512] {
        let targets = anchors_of(gen_siblings(n));
        group.throughput(Throughput::Elements(targets.len() as u64));
        group.bench_function(format!("nine_points_vs_siblings_n{}", n), |b| {
            b.iter(|| {
                let r = axis_aligned(black_box(&agent), black_box(&targets), Vec2::new(5.0, 5.0));
                black_box(r.delta)
            });
        });
    }
    group.finish();
}

fn bench_snap_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap_rect");
    let siblings = gen_siblings(64);
    let config = SnapConfig::default();
    group.bench_function("drag_path_64_siblings", |b| {
        // A short drag across the artboard, one snap per pointer move.
        b.iter_batched(
            || {
                let mut rng = Rng::new(0xD2A6_0000_0000_0042);
                (0..100)
                    .map(|_| {
                        Rect::from_origin_size(
                            (rng.next_f64() * 2000.0, rng.next_f64() * 2000.0),
                            (64.0, 48.0),
                        )
                    })
                    .collect::<Vec<_>>()
            },
            |frames| {
                let mut snapped = 0_usize;
                for agent in frames {
                    let r = snap_rect(agent, &siblings, &config);
                    if r.snap.delta != Vec2::ZERO {
                        snapped += 1;
                    }
                }
                black_box(snapped)
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_axis_aligned, bench_snap_rect);
criterion_main!(benches);
