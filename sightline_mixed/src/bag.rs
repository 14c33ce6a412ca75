// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Schema-less property bags.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::value::Value;

/// An object exposing string-keyed properties.
///
/// Key order matters: the analyzer reports keys in the order they are first
/// seen across the selection.
pub trait PropertyBag {
    /// Payload of [`Value::Other`] in this bag.
    type Other;

    /// Keys present on this object, in order.
    fn keys(&self) -> impl Iterator<Item = &str> + '_;

    /// Value at `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Option<&Value<Self::Other>>;

    /// The string stored at `key`, used to read an object's identifier.
    fn id(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

/// An insertion-ordered property bag.
///
/// Lookups are linear; objects in a design document carry a few dozen
/// properties at most.
#[derive(Clone, Debug, PartialEq)]
pub struct Object<O = ()> {
    entries: Vec<(String, Value<O>)>,
}

impl<O> Default for Object<O> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<O> Object<O> {
    /// Create an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, returning the previous value.
    ///
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value<O>>) -> Option<Value<O>> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(core::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder form of [`Object::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value<O>>) -> Self {
        self.insert(key, value);
        self
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value<O>> {
        let i = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(i).1)
    }

    /// Iterate `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value<O>)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the object has no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<O, K: Into<String>, V: Into<Value<O>>> FromIterator<(K, V)> for Object<O> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Self::new();
        for (k, v) in iter {
            object.insert(k, v);
        }
        object
    }
}

impl<O> PropertyBag for Object<O> {
    type Other = O;

    fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    fn get(&self, key: &str) -> Option<&Value<O>> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

/// Sorted-key bags; keys are reported in lexicographic order.
impl<O> PropertyBag for BTreeMap<String, Value<O>> {
    type Other = O;

    fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        BTreeMap::keys(self).map(String::as_str)
    }

    fn get(&self, key: &str) -> Option<&Value<O>> {
        BTreeMap::get(self, key)
    }
}

impl<B: PropertyBag + ?Sized> PropertyBag for &B {
    type Other = B::Other;

    fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        (**self).keys()
    }

    fn get(&self, key: &str) -> Option<&Value<B::Other>> {
        (**self).get(key)
    }
}
