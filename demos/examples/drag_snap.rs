// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag a card inside a frame and snap it to its neighbours and to ruler guides.
//!
//! Run:
//! - `cargo run -p sightline_demos --example drag_snap`
//! - `RUST_LOG=trace cargo run -p sightline_demos --example drag_snap` to see
//!   each axis decision.

use kurbo::{Rect, Vec2};
use sightline_snap::{Axis, Guide, SnapConfig, snap_rect, snap_to_guides, to_9_points};
use sightline_tree::Node;
use sightline_tree::candidates::snap_candidates;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug)]
struct Shape {
    name: &'static str,
    bounds: Rect,
}

fn shape(name: &'static str, x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape {
        name,
        bounds: Rect::from_origin_size((x, y), (w, h)),
    }
}

fn main() {
    let _ = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .try_init();

    let page = [
        Node::with_children(
            shape("frame", 0.0, 0.0, 400.0, 300.0),
            vec![
                Node::leaf(shape("title", 20.0, 20.0, 360.0, 40.0)),
                Node::leaf(shape("card", 20.0, 80.0, 170.0, 120.0)),
                Node::leaf(shape("aside", 210.0, 80.0, 170.0, 200.0)),
            ],
        ),
        Node::leaf(shape("sticky", 500.0, 0.0, 100.0, 100.0)),
    ];

    // The user grabs "card" and drags it.
    let selection = ["card"];
    let candidates = snap_candidates(&page, |n| n.value.name, &selection);
    let target_names: Vec<&str> = candidates.iter().map(|n| n.value.name).collect();
    println!("candidates: {target_names:?}");
    let targets: Vec<Rect> = candidates.iter().map(|n| n.value.bounds).collect();

    let zoom = 2.0;
    let config = match SnapConfig::for_zoom(zoom) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("bad zoom: {err}");
            return;
        }
    };
    println!("threshold at {zoom}x: {:?}", config.threshold());

    let start = Rect::from_origin_size((20.0, 80.0), (170.0, 120.0));
    for step in [Vec2::new(1.0, 0.0), Vec2::new(-0.6, 1.4), Vec2::new(18.3, 98.2)] {
        let dragged = start + step;
        let r = snap_rect(dragged, &targets, &config);
        println!(
            "dragged to ({:.1}, {:.1}) -> ({:.1}, {:.1}), delta {:?}",
            dragged.x0, dragged.y0, r.translated.x0, r.translated.y0, r.snap.delta
        );
        for axis in [Axis::X, Axis::Y] {
            if r.snap.is_snapped(axis) {
                println!("  {axis}: guides through {:?}", r.snap.anchors.get(axis));
                for (i, anchor) in r.hit_anchors(axis) {
                    println!("    to {:?} of {}", anchor, target_names[i]);
                }
            }
        }
    }

    // Ruler guides dragged out by the user.
    let guides = [Guide::vertical(100.0), Guide::horizontal(250.0)];
    let dragged = start + Vec2::new(-22.0, 49.0);
    let r = snap_to_guides(&to_9_points(dragged).to_array(), &guides, &config);
    println!("ruler snap delta {:?}", r.delta);
    for axis in [Axis::X, Axis::Y] {
        for &i in r.hits.get(axis) {
            println!("  {axis}: hit {:?}", guides[i]);
        }
    }
}
