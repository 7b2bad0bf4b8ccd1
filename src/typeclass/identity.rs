//! The identity functor.
//!
//! `Identity` wraps exactly one value and maps by applying the function to
//! it directly. Lenses use it as the carrier for `set` and `over`: the
//! setter's output becomes the new wrapped value, which is then unwrapped to
//! obtain the rebuilt whole.

use super::TypeConstructor;

/// The identity functor - wraps a value without adding any behavior.
///
/// `Identity(x).fmap(f) == Identity(f(x))`.
///
/// # Examples
///
/// ```rust
/// use functors_lenses::typeclass::{Functor, Identity};
///
/// let name = Identity::new("Bobo".to_string());
/// let shouted = name
///     .fmap(|value| value[..3].to_string())
///     .fmap(|value| format!("My name is not {value}!"))
///     .fmap(|value| value.to_uppercase());
///
/// assert_eq!(shouted.value(), "MY NAME IS NOT BOB!");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Returns a reference to the wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use functors_lenses::typeclass::Identity;
    ///
    /// let wrapped = Identity::new(10);
    /// assert_eq!(*wrapped.value(), 10);
    /// ```
    #[inline]
    pub const fn value(&self) -> &A {
        &self.0
    }

    /// Consumes the `Identity` and returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn new_wraps_value() {
        let wrapped = Identity::new("Bobo");
        assert_eq!(wrapped.0, "Bobo");
    }

    #[rstest]
    fn value_borrows_without_consuming() {
        let wrapped = Identity::new(vec![1, 2, 3]);
        assert_eq!(wrapped.value(), &vec![1, 2, 3]);
        assert_eq!(wrapped.into_inner(), vec![1, 2, 3]);
    }

    #[rstest]
    fn from_value() {
        let wrapped: Identity<String> = String::from("Bobo").into();
        assert_eq!(wrapped.into_inner(), "Bobo");
    }

    #[rstest]
    fn debug_names_the_wrapper() {
        let rendered = format!("{:?}", Identity::new(42));
        assert_eq!(rendered, "Identity(42)");
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i64::MAX)]
    fn preserves_wrapped_value(#[case] value: i64) {
        assert_eq!(Identity::new(value).into_inner(), value);
    }

    #[test]
    fn reapplies_to_identity() {
        fn assert_with_type<T>()
        where
            T: TypeConstructor<Inner = i32, WithType<String> = Identity<String>>,
        {
        }
        assert_with_type::<Identity<i32>>();
    }
}
