//! Single-step lenses into [`Value`] records and sequences.
//!
//! Both lenses focus on `Option<Value>`: `None` is the absent sentinel, read
//! when the key or index is missing, and writing `None` clears the slot.
//!
//! - [`lens_prop`]: reads with [`Value::prop`], writes with
//!   [`Value::assoc`] / [`Value::dissoc`]
//! - [`lens_index`]: reads with [`Value::nth`], writes with
//!   [`Value::update`]
//!
//! # Examples
//!
//! ```
//! use functors_lenses::optics::{lens_index, lens_prop, set, view};
//! use functors_lenses::value::Value;
//!
//! let person = Value::record([
//!     ("firstName", Value::from("Bobo")),
//!     ("lastName", Value::from("Flakes")),
//! ]);
//!
//! let first_name = lens_prop("firstName");
//! assert_eq!(view(&first_name, &person), Some(Value::from("Bobo")));
//!
//! let junior = set(&first_name, Some(Value::from("Bobo Jr.")), &person);
//! assert_eq!(junior.prop("firstName"), Some(&Value::from("Bobo Jr.")));
//! assert_eq!(person.prop("firstName"), Some(&Value::from("Bobo")));
//!
//! let friends = Value::sequence(["Clark", "Bruce", "Barry"].map(Value::from));
//! assert_eq!(view(&lens_index(2), &friends), Some(Value::from("Barry")));
//! ```

use std::fmt;

use super::Lens;
use crate::value::{Key, Value};

/// A lens on the entry stored under one key of a record.
///
/// - `put(Some(value))` binds the key, keeping its position if present and
///   appending it otherwise; a non-record source is replaced by a record.
/// - `put(None)` removes the key.
#[derive(Clone, PartialEq, Eq)]
pub struct PropLens {
    key: Key,
}

impl PropLens {
    /// Creates a lens on `key`.
    #[must_use]
    pub fn new(key: impl Into<Key>) -> Self {
        Self { key: key.into() }
    }

    /// The focused key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Lens<Value, Option<Value>> for PropLens {
    fn get(&self, source: &Value) -> Option<Value> {
        source.prop(&self.key).cloned()
    }

    fn put(&self, focus: Option<Value>, source: &Value) -> Value {
        match focus {
            Some(value) => source.assoc(self.key.clone(), value),
            None => source.dissoc(&self.key),
        }
    }
}

impl fmt::Debug for PropLens {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("PropLens").field(&&*self.key).finish()
    }
}

/// Creates a lens on the record entry under `key`.
#[must_use]
pub fn lens_prop(key: impl Into<Key>) -> PropLens {
    PropLens::new(key)
}

/// A lens on the element at one index of a sequence.
///
/// Writes never change the length of the sequence:
///
/// - `put(Some(value))` replaces an in-bounds element.
/// - `put(None)` blanks an in-bounds element to [`Value::Null`].
/// - Out-of-bounds indices and non-sequence sources come back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexLens {
    index: usize,
}

impl IndexLens {
    /// Creates a lens on `index`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// The focused index.
    pub const fn index(&self) -> usize {
        self.index
    }
}

impl Lens<Value, Option<Value>> for IndexLens {
    fn get(&self, source: &Value) -> Option<Value> {
        source.nth(self.index).cloned()
    }

    fn put(&self, focus: Option<Value>, source: &Value) -> Value {
        source.update(self.index, focus.unwrap_or_default())
    }
}

/// Creates a lens on the sequence element at `index`.
#[must_use]
pub const fn lens_index(index: usize) -> IndexLens {
    IndexLens::new(index)
}
