// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mixed-property analysis itself.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::bag::PropertyBag;
use crate::value::{Value, ValueKind};

/// Keys to leave out of the analysis, in addition to the id key.
#[derive(Clone, Copy, Default)]
pub enum Ignore<'a> {
    /// Analyze every key.
    #[default]
    None,
    /// Skip the listed keys.
    Keys(&'a [&'a str]),
    /// Skip keys for which the predicate returns `true`.
    Predicate(&'a dyn Fn(&str) -> bool),
}

impl Ignore<'_> {
    /// Whether `key` is ignored.
    pub fn ignores(&self, key: &str) -> bool {
        match self {
            Self::None => false,
            Self::Keys(keys) => keys.contains(&key),
            Self::Predicate(f) => f(key),
        }
    }
}

impl fmt::Debug for Ignore<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Keys(keys) => f.debug_tuple("Keys").field(keys).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Options for [`mixed`].
#[derive(Clone, Debug)]
pub struct MixedOptions<'a, S> {
    /// Property holding each object's string identifier. Never analyzed.
    pub id_key: &'a str,
    /// Further keys to skip.
    pub ignored: Ignore<'a>,
    /// Sentinel reported as the value of a property that differs.
    pub mixed: S,
}

impl<'a, S> MixedOptions<'a, S> {
    /// Options with no ignored keys.
    pub fn new(id_key: &'a str, mixed: S) -> Self {
        Self {
            id_key,
            ignored: Ignore::None,
            mixed,
        }
    }

    /// Skip the listed keys.
    #[must_use]
    pub fn ignore_keys(self, keys: &'a [&'a str]) -> Self {
        Self {
            ignored: Ignore::Keys(keys),
            ..self
        }
    }

    /// Skip keys matching `predicate`.
    #[must_use]
    pub fn ignore_if(self, predicate: &'a dyn Fn(&str) -> bool) -> Self {
        Self {
            ignored: Ignore::Predicate(predicate),
            ..self
        }
    }
}

/// The value shown for a property.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue<'a, O, S> {
    /// Every object defining the property agrees on this value.
    Value(&'a Value<O>),
    /// The objects disagree; carries the caller's sentinel.
    Mixed(S),
}

/// Objects sharing one distinct value of a property.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueGroup<'a, O> {
    /// The value, borrowed from the first object carrying it.
    pub value: &'a Value<O>,
    /// Ids of the objects carrying it, in selection order.
    pub ids: Vec<&'a str>,
}

/// Aggregate state of one property across the selection.
#[derive(Clone, Debug, PartialEq)]
pub struct MixedProperty<'a, O, S> {
    /// Kind of the first defined value; `None` for null and compound values.
    pub kind: Option<ValueKind>,
    /// More than one distinct value is present.
    pub mixed: bool,
    /// At least one object lacks the property.
    pub partial: bool,
    /// Ids of the objects defining the property, in selection order.
    pub ids: Vec<&'a str>,
    /// The shared value, the sentinel when mixed, or `None` if no object
    /// defines the property.
    pub value: Option<PropertyValue<'a, O, S>>,
    /// One group per distinct value, in order of first appearance.
    pub values: Vec<ValueGroup<'a, O>>,
}

/// Per-key results of [`mixed`], in key-universe order.
#[derive(Clone, Debug)]
pub struct MixedProperties<'a, O, S> {
    entries: Vec<(&'a str, MixedProperty<'a, O, S>)>,
    index: HashMap<&'a str, usize>,
}

impl<'a, O, S> MixedProperties<'a, O, S> {
    fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Summary for `key`, if any object carries it and it is not ignored.
    pub fn get(&self, key: &str) -> Option<&MixedProperty<'a, O, S>> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Whether `key` has a summary.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterate `(key, summary)` in key-universe order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &MixedProperty<'a, O, S>)> + '_ {
        self.entries.iter().map(|(k, p)| (*k, p))
    }

    /// Keys in key-universe order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Number of analyzed keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key was analyzed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, O, S> IntoIterator for MixedProperties<'a, O, S> {
    type Item = (&'a str, MixedProperty<'a, O, S>);
    type IntoIter = alloc::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Summarise every property across `objects`.
///
/// The key universe is the union of all objects' keys in order of first
/// appearance, minus `options.id_key` and the ignored keys. For each key the
/// defined values are grouped by [`Value::dedupes_with`]; more than one group
/// makes the property mixed.
///
/// Every object is expected to carry a string id under `options.id_key`. An
/// object without one is a caller bug: debug builds panic, release builds
/// leave it out of every `ids` list while still counting its values.
pub fn mixed<'a, B, S>(
    objects: &'a [B],
    options: &MixedOptions<'_, S>,
) -> MixedProperties<'a, B::Other, S>
where
    B: PropertyBag,
    S: Clone,
{
    if objects.is_empty() {
        return MixedProperties::empty();
    }

    let ids: Vec<Option<&'a str>> = objects
        .iter()
        .map(|o| {
            let id = o.id(options.id_key);
            debug_assert!(
                id.is_some(),
                "every object must carry a string id under `{}`",
                options.id_key
            );
            id
        })
        .collect();

    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut universe: Vec<&'a str> = Vec::new();
    for object in objects {
        for key in object.keys() {
            if key == options.id_key || options.ignored.ignores(key) || index.contains_key(key) {
                continue;
            }
            index.insert(key, universe.len());
            universe.push(key);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(objects = objects.len(), keys = universe.len(), "mixed");

    let entries = universe
        .iter()
        .map(|&key| (key, summarize(objects, &ids, key, &options.mixed)))
        .collect();

    MixedProperties { entries, index }
}

fn summarize<'a, B, S>(
    objects: &'a [B],
    ids: &[Option<&'a str>],
    key: &str,
    sentinel: &S,
) -> MixedProperty<'a, B::Other, S>
where
    B: PropertyBag,
    S: Clone,
{
    let mut defined = 0;
    let mut kind = None;
    let mut carriers = Vec::new();
    let mut values: Vec<ValueGroup<'a, B::Other>> = Vec::new();

    for (object, id) in objects.iter().zip(ids) {
        let Some(value) = object.get(key) else {
            continue;
        };
        if defined == 0 {
            kind = value.kind();
        }
        defined += 1;
        carriers.extend(*id);

        match values.iter_mut().find(|g| g.value.dedupes_with(value)) {
            Some(group) => group.ids.extend(*id),
            None => values.push(ValueGroup {
                value,
                ids: id.iter().copied().collect(),
            }),
        }
    }

    let mixed = values.len() > 1;
    let value = if mixed {
        Some(PropertyValue::Mixed(sentinel.clone()))
    } else {
        values.first().map(|g| PropertyValue::Value(g.value))
    };

    MixedProperty {
        kind,
        mixed,
        partial: defined < objects.len(),
        ids: carriers,
        value,
        values,
    }
}
