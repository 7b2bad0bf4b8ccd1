//! van Laarhoven lenses.
//!
//! A lens pairs a getter `&S -> A` with a setter `(A, &S) -> S`. Everything
//! else is derived from one operation, [`Lens::focus`]:
//!
//! ```text
//! focus(to_functor)(source) = to_functor(get(source)).fmap(|a| put(a, source))
//! ```
//!
//! The carrier picked by `to_functor` decides what comes out:
//!
//! | operation | `to_functor`              | result           |
//! |-----------|---------------------------|------------------|
//! | `view`    | `Const::new`              | the focus        |
//! | `set`     | `\|_\| Identity::new(a)`    | the rebuilt whole |
//! | `over`    | `\|x\| Identity::new(f(x))` | the rebuilt whole |
//!
//! Mapping the setter over a `Const` is a no-op, so `view` never rebuilds
//! the source.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetPut Law**: Setting what was viewed changes nothing.
//!    ```text
//!    lens.set(lens.view(&source), &source) == source
//!    ```
//!
//! 2. **PutGet Law**: Viewing after a set yields what was set.
//!    ```text
//!    lens.view(&lens.set(value, &source)) == value
//!    ```
//!
//! 3. **PutPut Law**: The second set wins.
//!    ```text
//!    lens.set(v2, &lens.set(v1, &source)) == lens.set(v2, &source)
//!    ```
//!
//! # Examples
//!
//! ```
//! use functors_lenses::optics::{lens, over, set, view};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { first_name: String, last_name: String }
//!
//! let first_name = lens(
//!     |person: &Person| person.first_name.clone(),
//!     |first_name, person: &Person| Person { first_name, ..person.clone() },
//! );
//!
//! let person = Person { first_name: "Bobo".into(), last_name: "Flakes".into() };
//! assert_eq!(view(&first_name, &person), "Bobo");
//!
//! let junior = set(&first_name, "Bobo Jr.".to_string(), &person);
//! assert_eq!(junior.first_name, "Bobo Jr.");
//! assert_eq!(person.first_name, "Bobo");
//!
//! let shouted = over(&first_name, |name| name.to_uppercase(), &person);
//! assert_eq!(shouted.first_name, "BOBO");
//! ```

use std::marker::PhantomData;

use crate::typeclass::{Const, Functor, Identity};

/// A Lens focuses on a single part `A` of a whole `S`.
///
/// Implementors provide [`get`](Lens::get) and [`put`](Lens::put); `put`
/// must build a new whole and leave `source` untouched.
///
/// # Laws
///
/// 1. **GetPut Law**: `lens.set(lens.view(&source), &source) == source`
/// 2. **PutGet Law**: `lens.view(&lens.set(value, &source)) == value`
/// 3. **PutPut Law**: `lens.set(v2, &lens.set(v1, &source)) == lens.set(v2, &source)`
pub trait Lens<S, A> {
    /// Extracts the focus from `source`.
    fn get(&self, source: &S) -> A;

    /// Builds a new whole from `source` with the focus replaced by `focus`.
    fn put(&self, focus: A, source: &S) -> S;

    /// Runs the lens with an arbitrary functor carrier.
    ///
    /// `to_functor` wraps the current focus; the setter is then mapped over
    /// the carrier, so the carrier's own `fmap` decides whether the whole is
    /// rebuilt.
    ///
    /// # Example
    ///
    /// ```
    /// use functors_lenses::optics::{Lens, lens};
    ///
    /// let first = lens(|pair: &(i32, i32)| pair.0, |first, pair: &(i32, i32)| (first, pair.1));
    ///
    /// // Option as carrier: a fallible update.
    /// let halved = first.focus(|n| (n % 2 == 0).then(|| n / 2), &(10, 3));
    /// assert_eq!(halved, Some((5, 3)));
    ///
    /// let rejected = first.focus(|n| (n % 2 == 0).then(|| n / 2), &(7, 3));
    /// assert_eq!(rejected, None);
    /// ```
    fn focus<F, T>(&self, to_functor: T, source: &S) -> F::WithType<S>
    where
        F: Functor<Inner = A>,
        T: FnOnce(A) -> F,
    {
        to_functor(self.get(source)).fmap(|focus| self.put(focus, source))
    }

    /// Reads the focus through the [`Const`] carrier.
    fn view(&self, source: &S) -> A {
        self.focus(Const::<A, A>::new, source).into_const()
    }

    /// Replaces the focus through the [`Identity`] carrier.
    fn set(&self, value: A, source: &S) -> S {
        self.focus(move |_| Identity::new(value), source).into_inner()
    }

    /// Transforms the focus through the [`Identity`] carrier.
    ///
    /// Equivalent to `set(function(view(source)), source)` with a single
    /// traversal.
    ///
    /// # Example
    ///
    /// ```
    /// use functors_lenses::optics::{Lens, lens};
    ///
    /// let first = lens(|pair: &(i32, i32)| pair.0, |first, pair: &(i32, i32)| (first, pair.1));
    /// assert_eq!(first.over(|n| n * 2, &(10, 3)), (20, 3));
    /// ```
    fn over<G>(&self, function: G, source: &S) -> S
    where
        G: FnOnce(A) -> A,
    {
        self.focus(|focus| Identity::new(function(focus)), source)
            .into_inner()
    }

    /// Composes this lens with `inner`, focusing on a part of the part.
    ///
    /// # Example
    ///
    /// ```
    /// use functors_lenses::optics::Lens;
    /// use functors_lenses::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Department { name: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Position { title: String, department: Department }
    ///
    /// let department_name = lens!(Position, department).compose(lens!(Department, name));
    ///
    /// let position = Position {
    ///     title: "Front-End Developer".to_string(),
    ///     department: Department { name: "Product".to_string() },
    /// };
    ///
    /// assert_eq!(department_name.view(&position), "Product");
    /// let renamed = department_name.set("Platform".to_string(), &position);
    /// assert_eq!(renamed.department.name, "Platform");
    /// assert_eq!(renamed.title, "Front-End Developer");
    /// ```
    fn compose<B, L>(self, inner: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, inner)
    }
}

/// A lens built from a getter and a setter function.
///
/// Usually created through [`lens`] or the [`lens!`](crate::lens) macro.
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(A, &S) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(&S) -> A>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(A, &S) -> S,
{
    /// Creates a new `FunctionLens` from a getter and a setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(A, &S) -> S,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    fn put(&self, focus: A, source: &S) -> S {
        (self.setter)(focus, source)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A + Clone,
    St: Fn(A, &S) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.getter.clone(), self.setter.clone())
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(A, &S) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// Builds a lens from a getter `&S -> A` and a setter `(A, &S) -> S`.
///
/// The setter must return a new whole with exactly the focus replaced.
#[must_use]
pub const fn lens<S, A, G, St>(getter: G, setter: St) -> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(A, &S) -> S,
{
    FunctionLens::new(getter, setter)
}

/// Two lenses chained outer-to-inner.
///
/// `A` is the intermediate part: the focus of `outer` and the whole of
/// `inner`. Composition is associative.
pub struct ComposedLens<L1, L2, A> {
    outer: L1,
    inner: L2,
    _marker: PhantomData<fn() -> A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a composed lens.
    #[must_use]
    pub const fn new(outer: L1, inner: L2) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn get(&self, source: &S) -> B {
        self.inner.get(&self.outer.get(source))
    }

    fn put(&self, focus: B, source: &S) -> S {
        let part = self.outer.get(source);
        self.outer.put(self.inner.put(focus, &part), source)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// Reads the focus of `lens` in `source`.
#[inline]
pub fn view<S, A, L>(lens: &L, source: &S) -> A
where
    L: Lens<S, A>,
{
    lens.view(source)
}

/// Returns a copy of `source` with the focus of `lens` replaced by `value`.
#[inline]
pub fn set<S, A, L>(lens: &L, value: A, source: &S) -> S
where
    L: Lens<S, A>,
{
    lens.set(value, source)
}

/// Returns a copy of `source` with `function` applied to the focus of `lens`.
#[inline]
pub fn over<S, A, L, G>(lens: &L, function: G, source: &S) -> S
where
    L: Lens<S, A>,
    G: FnOnce(A) -> A,
{
    lens.over(function, source)
}

/// Creates a lens for a struct field.
///
/// The generated setter clones the struct and overwrites the field, so the
/// struct must implement `Clone`; the getter clones the field.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use functors_lenses::optics::Lens;
/// use functors_lenses::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Person { first_name: String, last_name: String }
///
/// let first_name = lens!(Person, first_name);
/// let person = Person { first_name: "Bobo".into(), last_name: "Flakes".into() };
///
/// assert_eq!(first_name.view(&person), "Bobo");
/// let junior = first_name.set("Bobo Jr.".into(), &person);
/// assert_eq!(junior, Person { first_name: "Bobo Jr.".into(), last_name: "Flakes".into() });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| source.$field.clone(),
            |value, source: &$struct_type| {
                let mut next = source.clone();
                next.$field = value;
                next
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| source.$field.clone(),
            |value, source: &$struct_type<$($generic),+>| {
                let mut next = source.clone();
                next.$field = value;
                next
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| source.$field.clone(),
            |value, source: &$struct_type| {
                let mut next = source.clone();
                next.$field = value;
                next
            },
        )
    };
}
