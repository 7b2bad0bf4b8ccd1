//! Immutable indexed sequences.

use std::fmt;

use super::{ReferenceCounter, Value};

/// An immutable sequence of values.
///
/// Like [`Record`](super::Record), every update copies the element list
/// shallowly; untouched elements keep sharing storage with the original.
///
/// # Examples
///
/// ```rust
/// use functors_lenses::value::{Sequence, Value};
///
/// let friends: Sequence = ["Clark", "Bruce", "Barry"].into_iter().map(Value::from).collect();
/// let updated = friends.update(0, Value::from("Diana")).unwrap();
///
/// assert_eq!(friends.get(0), Some(&Value::from("Clark")));
/// assert_eq!(updated.get(0), Some(&Value::from("Diana")));
/// assert_eq!(updated.len(), 3);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Sequence {
    elements: ReferenceCounter<Vec<Value>>,
}

impl Sequence {
    /// The largest gap [`Sequence::assoc`] fills with [`Value::Null`].
    pub const MAX_PADDING: usize = 4096;

    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    /// Returns a new sequence with the element at `index` replaced.
    ///
    /// Returns `None` if `index` is out of bounds; the length never changes.
    #[must_use]
    pub fn update(&self, index: usize, value: Value) -> Option<Self> {
        if index >= self.len() {
            return None;
        }
        let mut elements = Vec::clone(&self.elements);
        elements[index] = value;
        Some(Self {
            elements: ReferenceCounter::new(elements),
        })
    }

    /// Returns a new sequence with `value` stored at `index`.
    ///
    /// Indices past the end grow the sequence, filling the gap with
    /// [`Value::Null`]. Returns `None` if the gap would exceed
    /// [`Sequence::MAX_PADDING`] elements.
    #[must_use]
    pub fn assoc(&self, index: usize, value: Value) -> Option<Self> {
        if index.saturating_sub(self.len()) > Self::MAX_PADDING {
            return None;
        }
        let mut elements = Vec::clone(&self.elements);
        if index < elements.len() {
            elements[index] = value;
        } else {
            elements.resize(index, Value::Null);
            elements.push(value);
        }
        Some(Self {
            elements: ReferenceCounter::new(elements),
        })
    }

    /// Returns a new sequence with `value` appended.
    #[must_use]
    pub fn push_back(&self, value: Value) -> Self {
        let mut elements = Vec::clone(&self.elements);
        elements.push(value);
        Self {
            elements: ReferenceCounter::new(elements),
        }
    }

    /// Returns a new sequence with `transform` applied to every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors_lenses::value::{Sequence, Value};
    ///
    /// let numbers: Sequence = (1..=3).map(Value::from).collect();
    /// let doubled = numbers.map(|n| Value::from(n.as_i64().unwrap_or(0) * 2));
    /// assert_eq!(doubled.to_string(), "[2, 4, 6]");
    /// ```
    #[must_use]
    pub fn map<F>(&self, transform: F) -> Self
    where
        F: FnMut(&Value) -> Value,
    {
        self.iter().map(transform).collect()
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    /// Returns `true` if both sequences share the same element storage.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.elements, &other.elements)
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iterable: I) -> Self {
        Self {
            elements: ReferenceCounter::new(iterable.into_iter().collect()),
        }
    }
}

impl From<Vec<Value>> for Sequence {
    fn from(elements: Vec<Value>) -> Self {
        Self {
            elements: ReferenceCounter::new(elements),
        }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}
