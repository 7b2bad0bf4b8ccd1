//! Immutable, insertion-ordered records.

use std::fmt;

use super::{Key, ReferenceCounter, Value};

/// An immutable record of `key -> Value` entries in insertion order.
///
/// Updates never touch the receiver: they shallow-copy the entry list and
/// replace only the affected entry, so every other entry keeps sharing
/// storage with the original.
///
/// Equality ignores entry order, as keys are unique.
///
/// # Examples
///
/// ```rust
/// use functors_lenses::value::{Record, Value};
///
/// let person: Record = [("firstName", Value::from("Bobo"))].into_iter().collect();
/// let updated = person.insert("lastName", Value::from("Flakes"));
///
/// assert_eq!(person.len(), 1);
/// assert_eq!(updated.len(), 2);
/// assert_eq!(updated.get("lastName"), Some(&Value::from("Flakes")));
/// ```
#[derive(Clone, Default)]
pub struct Record {
    entries: ReferenceCounter<Vec<(Key, Value)>>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the record has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(existing, _)| &**existing == key)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.position(key).map(|index| &self.entries[index].1)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Returns a new record with `key` bound to `value`.
    ///
    /// An existing key keeps its position; a new key is appended.
    #[must_use]
    pub fn insert(&self, key: impl Into<Key>, value: Value) -> Self {
        let key = key.into();
        let mut entries = Vec::clone(&self.entries);
        match self.position(&key) {
            Some(index) => entries[index].1 = value,
            None => entries.push((key, value)),
        }
        Self {
            entries: ReferenceCounter::new(entries),
        }
    }

    /// Returns a record without `key`.
    ///
    /// When `key` is absent the result shares storage with `self`.
    #[must_use]
    pub fn remove(&self, key: &str) -> Self {
        match self.position(key) {
            Some(index) => {
                let mut entries = Vec::clone(&self.entries);
                entries.remove(index);
                Self {
                    entries: ReferenceCounter::new(entries),
                }
            }
            None => self.clone(),
        }
    }

    /// Returns a new record with the same keys and `transform` applied to
    /// every value. Entries keep their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors_lenses::value::{Record, Value};
    ///
    /// let ages: Record = [("Bobo", Value::from(25)), ("Clark", Value::from(30))]
    ///     .into_iter()
    ///     .collect();
    /// let older = ages.map_values(|age| Value::from(age.as_i64().unwrap_or(0) + 1));
    /// assert_eq!(older.get("Bobo"), Some(&Value::from(26)));
    /// assert_eq!(older.get("Clark"), Some(&Value::from(31)));
    /// ```
    #[must_use]
    pub fn map_values<F>(&self, mut transform: F) -> Self
    where
        F: FnMut(&Value) -> Value,
    {
        let entries = self
            .entries
            .iter()
            .map(|(key, value)| (key.clone(), transform(value)))
            .collect();
        Self {
            entries: ReferenceCounter::new(entries),
        }
    }

    /// Iterates over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| &**key)
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (&**key, value))
    }

    /// Returns `true` if both records share the same entry storage.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.entries, &other.entries)
    }
}

impl<K: Into<Key>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iterable: I) -> Self {
        let mut entries: Vec<(Key, Value)> = Vec::new();
        for (key, value) in iterable {
            let key = key.into();
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }
        Self {
            entries: ReferenceCounter::new(entries),
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || (self.len() == other.len()
                && self
                    .iter()
                    .all(|(key, value)| other.get(key) == Some(value)))
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key:?}: {value}")?;
        }
        write!(formatter, "}}")
    }
}
