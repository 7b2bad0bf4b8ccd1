//! Property-based tests for Functor laws.
//!
//! This module verifies that all Functor implementations satisfy the required laws:
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! `Const` satisfies both trivially: it never calls the function.

use std::collections::BTreeMap;

use functors_lenses::typeclass::{Const, Functor, Identity, map};
use proptest::prelude::*;

fn increment(n: i32) -> i32 {
    n.wrapping_add(1)
}

fn double(n: i32) -> i32 {
    n.wrapping_mul(2)
}

fn ages() -> impl Strategy<Value = BTreeMap<String, i32>> {
    prop::collection::btree_map("[a-z]{1,4}", any::<i32>(), 0..10)
}

// =============================================================================
// Identity<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_identity_law(value in any::<i32>()) {
        prop_assert_eq!(Identity::new(value).fmap(|x| x), Identity::new(value));
    }

    #[test]
    fn prop_identity_composition_law(value in any::<i32>()) {
        let left = Identity::new(value).fmap(increment).fmap(double);
        let right = Identity::new(value).fmap(|x| double(increment(x)));
        prop_assert_eq!(left, right);
    }

    /// Mapping never changes the wrapper, only the payload.
    #[test]
    fn prop_identity_map_applies_function(value in any::<String>()) {
        let mapped = map(|text: String| text.len(), Identity::new(value.clone()));
        prop_assert_eq!(mapped.into_inner(), value.len());
    }
}

// =============================================================================
// Const<C, A>
// =============================================================================

proptest! {
    #[test]
    fn prop_const_identity_law(held in any::<String>()) {
        let constant: Const<String, i32> = Const::new(held.clone());
        prop_assert_eq!(constant.fmap(|x| x), Const::new(held));
    }

    #[test]
    fn prop_const_composition_law(held in any::<i64>()) {
        let left = Const::<i64, i32>::new(held).fmap(increment).fmap(double);
        let right = Const::<i64, i32>::new(held).fmap(|x| double(increment(x)));
        prop_assert_eq!(left, right);
    }

    /// Whatever the function, the held value comes back out.
    #[test]
    fn prop_const_map_keeps_held_value(held in any::<String>(), other in any::<usize>()) {
        let mapped = map(move |_: i32| other, Const::<String, i32>::new(held.clone()));
        prop_assert_eq!(mapped.into_const(), held);
    }
}

// =============================================================================
// Option<A> / Result<A, E>
// =============================================================================

proptest! {
    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    #[test]
    fn prop_option_composition_law(value in any::<Option<i32>>()) {
        let left = value.fmap(increment).fmap(double);
        let right = value.fmap(|x| double(increment(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_result_identity_law(value in any::<Result<i32, String>>()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    #[test]
    fn prop_result_composition_law(value in any::<Result<i32, String>>()) {
        let left = value.clone().fmap(increment).fmap(double);
        let right = value.fmap(|x| double(increment(x)));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Vec<A> / Box<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_vec_identity_law(values in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert_eq!(values.clone().fmap(|x| x), values);
    }

    #[test]
    fn prop_vec_composition_law(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let left = values.clone().fmap(increment).fmap(double);
        let right = values.fmap(|x| double(increment(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_vec_fmap_preserves_length(values in prop::collection::vec(any::<i32>(), 0..20)) {
        let length = values.len();
        prop_assert_eq!(values.fmap(double).len(), length);
    }

    #[test]
    fn prop_box_composition_law(value in any::<i32>()) {
        let left = Box::new(value).fmap(increment).fmap(double);
        let right = Box::new(value).fmap(|x| double(increment(x)));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// BTreeMap<K, V>
// =============================================================================

proptest! {
    #[test]
    fn prop_btree_map_identity_law(entries in ages()) {
        prop_assert_eq!(entries.clone().fmap(|x| x), entries);
    }

    #[test]
    fn prop_btree_map_composition_law(entries in ages()) {
        let left = entries.clone().fmap(increment).fmap(double);
        let right = entries.fmap(|x| double(increment(x)));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_btree_map_fmap_keeps_keys(entries in ages()) {
        let keys: Vec<String> = entries.keys().cloned().collect();
        let mapped = entries.fmap(double);
        prop_assert_eq!(mapped.keys().cloned().collect::<Vec<_>>(), keys);
    }
}
