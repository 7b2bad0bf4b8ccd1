//! Functor type class - mapping over wrapped values.
//!
//! A `Functor` is a type constructor that can apply a function to what it
//! wraps and hand back the *same* constructor around the results.
//!
//! Every implementation is in full control of its own mapping: calling
//! [`map`] always dispatches to the wrapped value's own [`Functor::fmap`],
//! which is free to ignore the function altogether. [`Const`] does exactly
//! that, and it is what lets a lens read a focus without rebuilding the
//! structure around it.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use functors_lenses::typeclass::{map, Identity};
//!
//! let doubled = map(|n: i32| n * 2, vec![1, 2, 3]);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let doubled = map(|n: i32| n * 2, Identity::new(10));
//! assert_eq!(doubled, Identity::new(20));
//! ```

use std::collections::BTreeMap;

use super::constant::Const;
use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for type constructors that can map a function over their
/// contents.
///
/// The function is `FnMut` so that multi-element containers such as `Vec`
/// can call it once per element.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the wrapped value(s).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors_lenses::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.fmap(|n| n.to_string()), Some("5".to_string()));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Replaces every wrapped value with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors_lenses::typeclass::Functor;
    ///
    /// assert_eq!(vec![1, 2].replace("x"), vec!["x", "x"]);
    /// assert_eq!(None::<i32>.replace("x"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the wrapped value(s), keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}

/// Maps `function` over `wrapped`, deferring entirely to the wrapped value's
/// own [`Functor::fmap`].
///
/// The argument order follows the usual `map(f, functor)` convention.
///
/// # Examples
///
/// ```rust
/// use functors_lenses::typeclass::{map, Const};
///
/// // Const keeps its own value; the function is never called.
/// let overridden: Const<&str, i32> = Const::new("You have been overridden!");
/// let result = map(|n: i32| n * 2, overridden);
/// assert_eq!(result.into_const(), "You have been overridden!");
/// ```
#[inline]
pub fn map<W, B, F>(function: F, wrapped: W) -> W::WithType<B>
where
    W: Functor,
    F: FnMut(W::Inner) -> B,
{
    wrapped.fmap(function)
}

// =============================================================================
// Standard library implementations
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnMut(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }
}

impl<T> Functor for Box<T> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Box<B>
    where
        F: FnMut(T) -> B,
    {
        Box::new(function(*self))
    }
}

impl<K: Ord, V> Functor for BTreeMap<K, V> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> BTreeMap<K, B>
    where
        F: FnMut(V) -> B,
    {
        self.into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect()
    }
}

// =============================================================================
// Carriers used by lenses
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Identity<B>
    where
        F: FnMut(A) -> B,
    {
        Identity(function(self.0))
    }
}

impl<C, A> Functor for Const<C, A> {
    #[inline]
    fn fmap<B, F>(self, _function: F) -> Const<C, B>
    where
        F: FnMut(A) -> B,
    {
        self.retag()
    }
}
