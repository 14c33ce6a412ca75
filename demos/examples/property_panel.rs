// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Summarise a mixed selection the way a property panel would show it.
//!
//! Run:
//! - `cargo run -p sightline_demos --example property_panel`

use sightline_mixed::{MixedOptions, Object, PropertyValue, Value, mixed};
use tracing_subscriber::{EnvFilter, fmt};

/// Sentinel shown in place of a value that differs across the selection.
#[derive(Clone, Debug)]
struct Mixed;

#[derive(Debug)]
struct Paint {
    color: &'static str,
}

fn show(value: &Value<Paint>) -> String {
    match value {
        Value::Number(n) => format!("{n}"),
        Value::String(s) => format!("{s:?}"),
        Value::Bool(b) => format!("{b}"),
        Value::Null => "null".into(),
        Value::Other(p) => format!("paint {}", p.color),
    }
}

fn main() {
    let _ = fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .try_init();

    let nodes: Vec<Object<Paint>> = vec![
        Object::new()
            .with("id", "rect-1")
            .with("type", "rect")
            .with("opacity", 1.0)
            .with("rotation", 0.0)
            .with("fill", Value::Other(Paint { color: "#3366ff" })),
        Object::new()
            .with("id", "rect-2")
            .with("type", "rect")
            .with("opacity", 0.4)
            .with("rotation", 0.0)
            .with("fill", Value::Other(Paint { color: "#3366ff" })),
        Object::new()
            .with("id", "label")
            .with("type", "text")
            .with("opacity", 1.0)
            .with("rotation", 0.0)
            .with("fontSize", 14.0),
    ];

    let ignored = ["type"];
    let options = MixedOptions::new("id", Mixed).ignore_keys(&ignored);
    let props = mixed(&nodes, &options);

    for (key, p) in props.iter() {
        let shown = match &p.value {
            Some(PropertyValue::Value(v)) => show(v),
            Some(PropertyValue::Mixed(Mixed)) => "Mixed".into(),
            None => "-".into(),
        };
        let partial = if p.partial { " (partial)" } else { "" };
        println!("{key:>10}: {shown}{partial}  edits -> {:?}", p.ids);
    }

    // Paint groups let a panel edit each distinct fill separately.
    if let Some(fill) = props.get("fill") {
        for (i, group) in fill.values.iter().enumerate() {
            println!("fill #{i}: {} on {:?}", show(group.value), group.ids);
        }
    }
}
