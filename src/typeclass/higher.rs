//! Type constructors through Generic Associated Types.
//!
//! A functor is a *type constructor* (`Option<_>`, `Identity<_>`,
//! `Const<C, _>`), not a type. Rust cannot name `Option` without its
//! argument, so [`TypeConstructor`] records the applied argument as `Inner`
//! and lets the constructor be re-applied through `WithType<B>`.
//!
//! This is what allows a lens to say "give me any carrier `F<A>` and I will
//! hand you back `F<S>`" without knowing which carrier it was given.
//!
//! # Example
//!
//! ```rust
//! use functors_lenses::typeclass::TypeConstructor;
//!
//! fn reapply<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Vec<String> = reapply(vec![1, 2, 3]);
//! assert!(emptied.is_empty());
//! ```

use std::collections::BTreeMap;

/// A type constructor applied to the type `Inner`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` must be the same type as `F`.
pub trait TypeConstructor {
    /// The argument this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    ///
    /// The bound keeps the result a type constructor, so re-application can
    /// be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}

/// A map is a constructor over its values; the key type is fixed.
impl<K: Ord, V> TypeConstructor for BTreeMap<K, V> {
    type Inner = V;
    type WithType<B> = BTreeMap<K, B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn assert_inner<T: TypeConstructor<Inner = i32>>() {}

    #[test]
    fn inner_type_of_standard_constructors() {
        assert_inner::<Option<i32>>();
        assert_inner::<Result<i32, String>>();
        assert_inner::<Vec<i32>>();
        assert_inner::<Box<i32>>();
        assert_inner::<BTreeMap<String, i32>>();
    }

    #[test]
    fn result_with_type_keeps_error_type() {
        fn assert_result_with_type<T, E, B>()
        where
            Result<T, E>: TypeConstructor<Inner = T, WithType<B> = Result<B, E>>,
        {
        }

        assert_result_with_type::<i32, String, bool>();
        assert_result_with_type::<String, (), Vec<u8>>();
    }

    #[test]
    fn chained_reapplication() {
        type Step1 = <Option<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_bool::<Step2>();
    }

    #[rstest]
    #[case(Some(42))]
    #[case(None)]
    fn with_type_of_inner_is_the_original(#[case] original: Option<i32>) {
        fn same<T: TypeConstructor>(value: T) -> T::WithType<T::Inner>
        where
            T: Into<T::WithType<T::Inner>>,
        {
            value.into()
        }

        let result: Option<i32> = same(original);
        assert_eq!(result, original);
    }
}
