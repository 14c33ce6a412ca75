// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measure the spacing between a selection and a hovered shape.
//!
//! Run:
//! - `cargo run -p sightline_demos --example measure_guides`

use kurbo::Rect;
use sightline_measure::{Side, measure, measure_selection};
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let _ = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .try_init();

    let selection = [
        Rect::from_origin_size((10.0, 10.0), (40.0, 40.0)),
        Rect::from_origin_size((60.0, 10.0), (40.0, 40.0)),
    ];
    let hovered = Rect::from_origin_size((160.004, 120.0), (80.0, 30.0));

    let Some(m) = measure_selection(selection, [hovered]) else {
        println!("nothing to measure");
        return;
    };
    println!("selection {:?}", m.a);
    println!("hovered   {:?}", m.b);
    for g in m.guides() {
        let label = match g.side {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        };
        println!("{label:>6}: {:.1} along {:?}", g.length, g.line);
        if let Some(aux) = g.auxiliary {
            println!("        auxiliary {aux:?}");
        }
    }

    // Hovering a shape inside the selection measures from the overlap.
    let inner = Rect::from_origin_size((20.0, 20.0), (10.0, 10.0));
    if let Some(m) = measure(selection[0], inner) {
        println!("inset distances {:?}", m.distance.to_array());
    }
}
