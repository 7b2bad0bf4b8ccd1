//! The constant functor.
//!
//! `Const<C, A>` carries a value of type `C` and is only *nominally* a
//! container of `A`. Mapping over it never calls the function; the held
//! value passes through untouched while the phantom parameter changes.
//!
//! Lenses use it as the carrier for `view`: the focus is captured in the
//! `Const`, the setter is mapped over it and silently skipped, so reading
//! never rebuilds the whole structure.

use std::marker::PhantomData;

use super::TypeConstructor;

/// A functor that ignores the mapped function and keeps its held value.
///
/// # Examples
///
/// ```rust
/// use functors_lenses::typeclass::{Const, Functor};
///
/// let held: Const<&str, i32> = Const::new("focus");
/// let mapped: Const<&str, String> = held.fmap(|number| number.to_string());
/// assert_eq!(mapped.into_const(), "focus");
/// ```
pub struct Const<C, A> {
    held: C,
    _marker: PhantomData<fn() -> A>,
}

impl<C, A> Const<C, A> {
    /// Creates a `Const` holding `held`.
    #[inline]
    #[must_use]
    pub const fn new(held: C) -> Self {
        Self {
            held,
            _marker: PhantomData,
        }
    }

    /// Returns a reference to the held value.
    #[inline]
    pub const fn get_const(&self) -> &C {
        &self.held
    }

    /// Consumes the `Const` and returns the held value.
    #[inline]
    pub fn into_const(self) -> C {
        self.held
    }

    /// Re-labels the phantom parameter without touching the held value.
    #[inline]
    pub(crate) fn retag<B>(self) -> Const<C, B> {
        Const::new(self.held)
    }
}

impl<C, A> TypeConstructor for Const<C, A> {
    type Inner = A;
    type WithType<B> = Const<C, B>;
}

impl<C: Clone, A> Clone for Const<C, A> {
    fn clone(&self) -> Self {
        Self::new(self.held.clone())
    }
}

impl<C: Copy, A> Copy for Const<C, A> {}

impl<C: PartialEq, A> PartialEq for Const<C, A> {
    fn eq(&self, other: &Self) -> bool {
        self.held == other.held
    }
}

impl<C: Eq, A> Eq for Const<C, A> {}

impl<C: std::fmt::Debug, A> std::fmt::Debug for Const<C, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_tuple("Const").field(&self.held).finish()
    }
}
