// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sightline Mixed: what a multi-selection has in common.
//!
//! When several objects are selected, a property panel shows one control per
//! property. Some properties hold the same value on every object, some differ,
//! and some exist on only a few of them. [`mixed`] reduces the selection's
//! property bags to one [`MixedProperty`] per key so the panel can show a
//! shared value, a "mixed" placeholder, or a partial indicator, and so edits
//! can be routed to exactly the objects that carry the property.
//!
//! ## Values
//!
//! Property bags hold [`Value`]s. Primitives (numbers, strings, booleans,
//! null) compare by value, with numbers using `SameValueZero` semantics.
//! Compound values live in [`Value::Other`] and compare by identity, so two
//! separately built but equal arrays still count as different values. Any
//! type implementing [`PropertyBag`] can be analyzed; [`Object`] is an
//! insertion-ordered bag provided for convenience.
//!
//! ```
//! use sightline_mixed::{mixed, MixedOptions, Object, PropertyValue, Value};
//!
//! let a: Object = Object::new().with("id", "a").with("x", 10.0).with("fill", "red");
//! let b: Object = Object::new().with("id", "b").with("x", 10.0);
//! let c: Object = Object::new().with("id", "c").with("x", 12.0).with("fill", "red");
//!
//! let objects = [a, b, c];
//! let props = mixed(&objects, &MixedOptions::new("id", "Mixed"));
//!
//! let x = props.get("x").unwrap();
//! assert!(x.mixed);
//! assert_eq!(x.value, Some(PropertyValue::Mixed("Mixed")));
//!
//! let fill = props.get("fill").unwrap();
//! assert!(!fill.mixed && fill.partial);
//! assert_eq!(fill.value, Some(PropertyValue::Value(&Value::from("red"))));
//! assert_eq!(fill.ids, ["a", "c"]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit a `trace`-level event per analysis.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod analyze;
mod bag;
mod value;

pub use analyze::{
    Ignore, MixedOptions, MixedProperties, MixedProperty, PropertyValue, ValueGroup, mixed,
};
pub use bag::{Object, PropertyBag};
pub use value::{Value, ValueKind};
