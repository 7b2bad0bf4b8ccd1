//! Immutable value trees.
//!
//! [`Value`] is a dynamically shaped, immutable tree of records and
//! sequences, the kind of structure key and path lenses navigate. Compound
//! payloads are reference counted, so cloning a value is O(1) and an update
//! only copies the levels it passes through:
//!
//! ```text
//! set position.department.name
//!
//! person ──► position ──► department ──► name        (new)
//!   │           │             └────────► departmentManager (shared)
//!   │           └──────────► title                   (shared)
//!   └──────────► firstName, lastName, ...             (shared)
//! ```
//!
//! The primitives here - [`Value::prop`], [`Value::assoc`],
//! [`Value::dissoc`], [`Value::nth`], [`Value::update`] and
//! [`Value::assoc_index`] - are exactly the getters and setters the key and
//! path lenses in [`optics`](crate::optics) are made of.
//!
//! # Examples
//!
//! ```rust
//! use functors_lenses::value::Value;
//!
//! let person = Value::record([("name", Value::from("Bobo"))]);
//! let with_age = person.assoc("age", Value::from(25));
//!
//! assert_eq!(person.prop("name"), Some(&Value::from("Bobo")));
//! assert_eq!(person.prop("age"), None);
//! assert_eq!(with_age.prop("age"), Some(&Value::from(25)));
//! ```

mod record;
mod sequence;
#[cfg(feature = "serde")]
mod serialization;

use std::fmt;

pub use record::Record;
pub use sequence::Sequence;

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled (default), this is `std::sync::Arc`,
/// which makes values and lenses `Send + Sync`.
///
/// When the `arc` feature is disabled, this is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub type ReferenceCounter<T> = std::rc::Rc<T>;

/// A record key. Cloning a key never copies the string.
pub type Key = ReferenceCounter<str>;

/// An immutable, dynamically shaped value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The empty value. Also fills gaps when a sequence grows.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Text(ReferenceCounter<str>),
    /// An indexed sequence.
    Sequence(Sequence),
    /// An insertion-ordered record.
    Record(Record),
}

impl Value {
    /// Builds a record value from `(key, value)` pairs.
    pub fn record<K, I>(entries: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, Self)>,
    {
        Self::Record(entries.into_iter().collect())
    }

    /// Builds a sequence value from its elements.
    pub fn sequence<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Sequence(elements.into_iter().collect())
    }

    /// Returns `true` for [`Value::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean payload.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Returns the integer payload.
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the numeric payload as a float, widening integers.
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(number) => Some(*number as f64),
            Self::Float(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string payload.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(&**text),
            _ => None,
        }
    }

    /// Returns the record payload.
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Returns the sequence payload.
    pub const fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Self::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// Reads the value under `key`.
    ///
    /// Returns `None` when the key is absent or `self` is not a record.
    pub fn prop(&self, key: &str) -> Option<&Self> {
        self.as_record().and_then(|record| record.get(key))
    }

    /// Returns a copy of `self` with `key` bound to `value`.
    ///
    /// A value that is not a record is replaced by a fresh record holding
    /// only the new entry.
    #[must_use]
    pub fn assoc(&self, key: impl Into<Key>, value: Self) -> Self {
        match self {
            Self::Record(record) => Self::Record(record.insert(key, value)),
            _ => Self::Record(Record::new().insert(key, value)),
        }
    }

    /// Returns a copy of `self` without `key`.
    ///
    /// Anything that is not a record comes back unchanged.
    #[must_use]
    pub fn dissoc(&self, key: &str) -> Self {
        match self {
            Self::Record(record) => Self::Record(record.remove(key)),
            _ => self.clone(),
        }
    }

    /// Reads the element at `index`.
    ///
    /// Returns `None` when out of bounds or `self` is not a sequence.
    pub fn nth(&self, index: usize) -> Option<&Self> {
        self.as_sequence().and_then(|sequence| sequence.get(index))
    }

    /// Returns a copy of `self` with the element at `index` replaced.
    ///
    /// Out-of-bounds indices and non-sequences come back unchanged.
    #[must_use]
    pub fn update(&self, index: usize, value: Self) -> Self {
        self.as_sequence()
            .and_then(|sequence| sequence.update(index, value))
            .map_or_else(|| self.clone(), Self::Sequence)
    }

    /// Returns a copy of `self` with `value` stored at `index`, growing the
    /// sequence with [`Value::Null`] if needed.
    ///
    /// A value that is not a sequence is replaced by a fresh sequence. When
    /// the gap would exceed [`Sequence::MAX_PADDING`], `self` comes back
    /// unchanged.
    #[must_use]
    pub fn assoc_index(&self, index: usize, value: Self) -> Self {
        self.try_assoc_index(index, value).unwrap_or_else(|| self.clone())
    }

    /// Like [`Value::assoc_index`], but returns `None` instead of an
    /// unchanged copy when the gap would exceed [`Sequence::MAX_PADDING`].
    pub fn try_assoc_index(&self, index: usize, value: Self) -> Option<Self> {
        let grown = match self {
            Self::Sequence(sequence) => sequence.assoc(index, value),
            _ => Sequence::new().assoc(index, value),
        };
        grown.map(Self::Sequence)
    }

    /// Maps `transform` over the children of a compound value.
    ///
    /// Sequences map every element and records map every value, keeping
    /// their keys and order. Scalars have no children and come back
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors_lenses::value::Value;
    ///
    /// let shout = |value: &Value| {
    ///     value.as_str().map_or_else(|| value.clone(), |text| Value::from(text.to_uppercase()))
    /// };
    ///
    /// let person = Value::record([("firstName", Value::from("Bobo")), ("age", Value::from(25))]);
    /// assert_eq!(person.map(shout).to_string(), r#"{"firstName": "BOBO", "age": 25}"#);
    ///
    /// let friends = Value::sequence([Value::from("Clark"), Value::from("Bruce")]);
    /// assert_eq!(friends.map(shout).to_string(), r#"["CLARK", "BRUCE"]"#);
    /// ```
    #[must_use]
    pub fn map<F>(&self, transform: F) -> Self
    where
        F: FnMut(&Self) -> Self,
    {
        match self {
            Self::Sequence(sequence) => Self::Sequence(sequence.map(transform)),
            Self::Record(record) => Self::Record(record.map_values(transform)),
            _ => self.clone(),
        }
    }

    /// Returns `true` if both values share the same storage.
    ///
    /// Scalars have no storage of their own and compare by value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(left), Self::Text(right)) => ReferenceCounter::ptr_eq(left, right),
            (Self::Sequence(left), Self::Sequence(right)) => left.ptr_eq(right),
            (Self::Record(left), Self::Record(right)) => left.ptr_eq(right),
            (Self::Text(_) | Self::Sequence(_) | Self::Record(_), _)
            | (_, Self::Text(_) | Self::Sequence(_) | Self::Record(_)) => false,
            (left, right) => left == right,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(formatter, "null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Integer(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number}"),
            Self::Text(text) => write!(formatter, "{:?}", &**text),
            Self::Sequence(sequence) => write!(formatter, "{sequence}"),
            Self::Record(record) => write!(formatter, "{record}"),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Integer(i64::from(number))
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Integer(number)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text.into())
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<Sequence> for Value {
    fn from(sequence: Sequence) -> Self {
        Self::Sequence(sequence)
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::Sequence(elements.into())
    }
}
