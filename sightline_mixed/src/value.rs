// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property values and their kinds.

use alloc::string::String;

/// A property value held by an object.
///
/// Numbers, strings, booleans, and `Null` are primitives and compare by value
/// during analysis. `Other` carries anything else (paints, arrays, nested
/// records) and compares by identity: two `Other` values are the same only
/// when they are the same value in memory, never because their payloads match.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<O = ()> {
    /// A number.
    Number(f64),
    /// A string.
    String(String),
    /// A boolean.
    Bool(bool),
    /// An explicit null, distinct from an absent key.
    Null,
    /// A compound value with identity semantics.
    Other(O),
}

/// Kind of a primitive [`Value`], as reported on a mixed property.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// [`Value::Number`].
    Number,
    /// [`Value::String`].
    String,
    /// [`Value::Bool`].
    Boolean,
}

impl<O> Value<O> {
    /// The primitive kind, or `None` for [`Value::Null`] and [`Value::Other`].
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Number(_) => Some(ValueKind::Number),
            Self::String(_) => Some(ValueKind::String),
            Self::Bool(_) => Some(ValueKind::Boolean),
            Self::Null | Self::Other(_) => None,
        }
    }

    /// The number, if this is one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether two values collapse into one during deduplication.
    ///
    /// Numbers use `SameValueZero`: `NaN` matches `NaN` and `0.0` matches
    /// `-0.0`. An `Other` value only matches itself by address.
    pub fn dedupes_with(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Other(_), Self::Other(_)) => core::ptr::eq(self, other),
            _ => false,
        }
    }
}

impl<O> From<f64> for Value<O> {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl<O> From<bool> for Value<O> {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<O> From<String> for Value<O> {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<O> From<&str> for Value<O> {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    type V = Value<Vec<u8>>;

    #[test]
    fn kinds() {
        assert_eq!(V::from(1.0).kind(), Some(ValueKind::Number));
        assert_eq!(V::from("a").kind(), Some(ValueKind::String));
        assert_eq!(V::from(true).kind(), Some(ValueKind::Boolean));
        assert_eq!(V::Null.kind(), None);
        assert_eq!(V::Other(vec![]).kind(), None);
    }

    #[test]
    fn numbers_use_same_value_zero() {
        assert!(V::Number(f64::NAN).dedupes_with(&V::Number(f64::NAN)));
        assert!(V::Number(0.0).dedupes_with(&V::Number(-0.0)));
        assert!(!V::Number(1.0).dedupes_with(&V::Number(2.0)));
    }

    #[test]
    fn primitives_of_different_kinds_differ() {
        assert!(!V::from(1.0).dedupes_with(&V::from("1")));
        assert!(!V::from(false).dedupes_with(&V::Null));
        assert!(V::Null.dedupes_with(&V::Null));
    }

    #[test]
    fn other_dedupes_by_identity() {
        let a = V::Other(vec![1]);
        assert!(!a.dedupes_with(&a.clone()));
        assert!(a.dedupes_with(&a));
    }
}
