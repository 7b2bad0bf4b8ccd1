//! Path lenses over nested [`Value`] trees.
//!
//! A [`PathLens`] is the composition of one [`PropLens`] or [`IndexLens`]
//! per path segment. Reading stops at the first missing level and yields
//! `None`. Writing shallow-copies each level on the way down and back up, so
//! siblings of the path keep sharing storage with the original tree; missing
//! levels are created as empty records or sequences, depending on the
//! segment that follows them.
//!
//! # Examples
//!
//! ```
//! use functors_lenses::optics::{lens_path, set, view};
//! use functors_lenses::value::Value;
//!
//! let person = Value::record([(
//!     "position",
//!     Value::record([("title", Value::from("Front-End Developer"))]),
//! )]);
//!
//! let manager = lens_path(["position", "department", "departmentManager", "lastName"]);
//! assert_eq!(view(&manager, &person), None);
//!
//! let updated = set(&manager, Some(Value::from("Flakes")), &person);
//! assert_eq!(view(&manager, &updated), Some(Value::from("Flakes")));
//! assert!(
//!     updated.prop("position").unwrap().prop("title").unwrap()
//!         .ptr_eq(person.prop("position").unwrap().prop("title").unwrap())
//! );
//! ```
//!
//! Paths can also be parsed:
//!
//! ```
//! use functors_lenses::optics::{Path, PathSegment};
//!
//! let path: Path = "friends[2].firstName".parse().unwrap();
//! assert_eq!(
//!     path.segments(),
//!     &[
//!         PathSegment::from("friends"),
//!         PathSegment::Index(2),
//!         PathSegment::from("firstName"),
//!     ]
//! );
//! assert_eq!(path.to_string(), "friends[2].firstName");
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::{IndexLens, Lens, PropLens};
use crate::value::{Key, Value};

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A record key.
    Key(Key),
    /// A sequence index.
    Index(usize),
}

/// The single-step lens for one segment.
#[derive(Debug, Clone)]
enum SegmentLens {
    Prop(PropLens),
    Index(IndexLens),
}

impl SegmentLens {
    fn get(&self, node: &Value) -> Option<Value> {
        match self {
            Self::Prop(lens) => lens.get(node),
            Self::Index(lens) => lens.get(node),
        }
    }

    /// Writes `focus` into `node`, growing sequences as needed.
    ///
    /// `None` when the index lies further past the end than
    /// [`Sequence::MAX_PADDING`](crate::value::Sequence::MAX_PADDING).
    fn place(&self, focus: Option<Value>, node: &Value) -> Option<Value> {
        match (self, focus) {
            (Self::Prop(lens), focus) => Some(lens.put(focus, node)),
            (Self::Index(lens), Some(value)) => node.try_assoc_index(lens.index(), value),
            (Self::Index(lens), None) => Some(lens.put(None, node)),
        }
    }
}

impl PathSegment {
    fn lens(&self) -> SegmentLens {
        match self {
            Self::Key(key) => SegmentLens::Prop(PropLens::new(key.clone())),
            Self::Index(index) => SegmentLens::Index(IndexLens::new(*index)),
        }
    }

    /// The empty container this segment navigates into.
    fn empty_container(&self) -> Value {
        match self {
            Self::Key(_) => Value::record::<Key, _>([]),
            Self::Index(_) => Value::sequence([]),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.into())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key.into())
    }
}

impl From<Key> for PathSegment {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl PathSegment {
    /// Whether this key can only be written in its bracketed, quoted form.
    fn is_quoted(&self) -> bool {
        match self {
            Self::Key(key) => key.is_empty() || key.contains(['.', '[', ']']),
            Self::Index(_) => false,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) if self.is_quoted() => {
                write!(formatter, "[\"")?;
                for character in key.chars() {
                    if matches!(character, '"' | '\\') {
                        write!(formatter, "\\")?;
                    }
                    write!(formatter, "{character}")?;
                }
                write!(formatter, "\"]")
            }
            Self::Key(key) => write!(formatter, "{key}"),
            Self::Index(index) => write!(formatter, "[{index}]"),
        }
    }
}

/// Reasons a path string fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A key was expected but nothing was found, as in `a..b` or `a.`.
    #[error("empty key at byte {position}")]
    EmptyKey {
        /// Byte offset where the key should start.
        position: usize,
    },
    /// A quoted key is missing its closing `"]`.
    #[error("unterminated key starting at byte {position}")]
    UnterminatedKey {
        /// Byte offset of the opening bracket.
        position: usize,
    },
    /// A `[` was never closed.
    #[error("unterminated index starting at byte {position}")]
    UnterminatedIndex {
        /// Byte offset of the opening bracket.
        position: usize,
    },
    /// The text between brackets is not a non-negative integer.
    #[error("invalid index {text:?} at byte {position}")]
    InvalidIndex {
        /// The offending text.
        text: String,
        /// Byte offset of the text.
        position: usize,
    },
    /// A character that cannot follow the previous segment.
    #[error("unexpected character {character:?} at byte {position}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position: usize,
    },
}

/// A sequence of segments leading into a nested value.
///
/// The textual form joins keys with `.` and writes indices as `[n]`, as in
/// `position.department.name` or `friends[0].lastName`. The empty string is
/// the empty path, which focuses on the whole value.
///
/// Keys that are empty or contain `.`, `[` or `]` are written quoted inside
/// brackets, with `\` escaping `"` and `\`: `headers["content.type"]`.
/// Parsing the displayed form always gives back the same path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// Creates the empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// The segments, outermost first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the empty path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns this path extended by `segment`.
    #[must_use]
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Builds the lens focusing on this path.
    #[must_use]
    pub fn lens(&self) -> PathLens {
        PathLens::new(self.clone())
    }
}

impl<P: Into<PathSegment>> FromIterator<P> for Path {
    fn from_iter<I: IntoIterator<Item = P>>(iterable: I) -> Self {
        Self {
            segments: iterable.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut segments = Vec::new();
        if text.is_empty() {
            return Ok(Self { segments });
        }

        let mut position = 0;
        let mut expecting_key = !text.starts_with('[');
        loop {
            if expecting_key {
                let end = text[position..]
                    .find(['.', '[', ']'])
                    .map_or(text.len(), |offset| position + offset);
                if end == position {
                    return Err(PathError::EmptyKey { position });
                }
                segments.push(PathSegment::from(&text[position..end]));
                position = end;
            }

            match text[position..].chars().next() {
                None => break,
                Some('.') => {
                    position += 1;
                    expecting_key = true;
                }
                Some('[') if text[position + 1..].starts_with('"') => {
                    let (key, end) = quoted_key(text, position)?;
                    segments.push(PathSegment::from(key));
                    position = end;
                    expecting_key = false;
                }
                Some('[') => {
                    let close = text[position..]
                        .find(']')
                        .map(|offset| position + offset)
                        .ok_or(PathError::UnterminatedIndex { position })?;
                    let digits = &text[position + 1..close];
                    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
                        return Err(PathError::InvalidIndex {
                            text: digits.to_string(),
                            position: position + 1,
                        });
                    }
                    let index = digits.parse().map_err(|_| PathError::InvalidIndex {
                        text: digits.to_string(),
                        position: position + 1,
                    })?;
                    segments.push(PathSegment::Index(index));
                    position = close + 1;
                    expecting_key = false;
                }
                Some(character) => {
                    return Err(PathError::UnexpectedCharacter {
                        character,
                        position,
                    });
                }
            }
        }
        Ok(Self { segments })
    }
}

/// Reads the quoted key of `["..."]` opening at byte `open`.
///
/// Returns the unescaped key and the offset just past the closing bracket.
fn quoted_key(text: &str, open: usize) -> Result<(String, usize), PathError> {
    let start = open + 2;
    let mut characters = text[start..]
        .char_indices()
        .map(|(offset, character)| (start + offset, character));
    let mut key = String::new();
    while let Some((_, character)) = characters.next() {
        match character {
            '\\' => match characters.next() {
                Some((_, escaped)) => key.push(escaped),
                None => break,
            },
            '"' => {
                return match characters.next() {
                    Some((offset, ']')) => Ok((key, offset + 1)),
                    Some((position, character)) => {
                        Err(PathError::UnexpectedCharacter { character, position })
                    }
                    None => Err(PathError::UnterminatedKey { position: open }),
                };
            }
            other => key.push(other),
        }
    }
    Err(PathError::UnterminatedKey { position: open })
}

impl fmt::Display for Path {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 && matches!(segment, PathSegment::Key(_)) && !segment.is_quoted() {
                write!(formatter, ".")?;
            }
            write!(formatter, "{segment}")?;
        }
        Ok(())
    }
}

/// A lens on the value at the end of a [`Path`].
///
/// - Viewing through a missing level yields `None`.
/// - Setting `Some` through a missing level creates it (an empty record
///   before a key, an empty sequence before an index).
/// - Setting `None` through a missing level leaves the source unchanged.
/// - Setting through an index more than
///   [`Sequence::MAX_PADDING`](crate::value::Sequence::MAX_PADDING) past the
///   end of its sequence leaves the source unchanged.
/// - With the empty path, the focus is the whole value; setting `None`
///   yields [`Value::Null`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLens {
    path: Path,
}

impl PathLens {
    /// Creates a lens on `path`.
    #[must_use]
    pub const fn new(path: Path) -> Self {
        Self { path }
    }

    /// The focused path.
    pub const fn path(&self) -> &Path {
        &self.path
    }
}

impl Lens<Value, Option<Value>> for PathLens {
    fn get(&self, source: &Value) -> Option<Value> {
        self.path
            .segments()
            .iter()
            .try_fold(source.clone(), |node, segment| segment.lens().get(&node))
    }

    fn put(&self, focus: Option<Value>, source: &Value) -> Value {
        put_along(self.path.segments(), focus, source).unwrap_or_else(|| {
            tracing::debug!(path = %self.path, "index too far past the end, write skipped");
            source.clone()
        })
    }
}

fn put_along(segments: &[PathSegment], focus: Option<Value>, node: &Value) -> Option<Value> {
    let Some((head, rest)) = segments.split_first() else {
        return Some(focus.unwrap_or_default());
    };
    let step = head.lens();
    let Some(next) = rest.first() else {
        return step.place(focus, node);
    };

    match step.get(node) {
        Some(child) => step.place(Some(put_along(rest, focus, &child)?), node),
        None if focus.is_none() => Some(node.clone()),
        None => {
            tracing::trace!(segment = %head, "creating missing level");
            let child = next.empty_container();
            step.place(Some(put_along(rest, focus, &child)?), node)
        }
    }
}

/// Creates a lens on the value at the end of `segments`.
///
/// # Example
///
/// ```
/// use functors_lenses::optics::{PathSegment, lens_path, view};
/// use functors_lenses::value::Value;
///
/// let person = Value::record([(
///     "friends",
///     Value::sequence([Value::record([("firstName", Value::from("Clark"))])]),
/// )]);
///
/// let first_friend = lens_path([
///     PathSegment::from("friends"),
///     PathSegment::from(0_usize),
///     PathSegment::from("firstName"),
/// ]);
/// assert_eq!(view(&first_friend, &person), Some(Value::from("Clark")));
/// ```
#[must_use]
pub fn lens_path<I, P>(segments: I) -> PathLens
where
    I: IntoIterator<Item = P>,
    P: Into<PathSegment>,
{
    PathLens::new(segments.into_iter().collect())
}
