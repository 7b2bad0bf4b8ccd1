//! The walkthrough steps, each a pure function over the person value.
//!
//! 1. Wrap a name in `Identity` and chain maps over it
//! 2. Map over a functor whose own `fmap` discards the function
//! 3. Read and extend a record with `prop` / `assoc`
//! 4. View and set `firstName` through a key lens
//! 5. Rewrite a nested field through a path lens, checked against a rebuild
//!    by hand
//! 6. Read a friend through an index lens

use functors_lenses::optics::{Lens, PathLens, PathSegment, lens_path, lens_prop, set, view};
use functors_lenses::typeclass::{Const, Functor, Identity, map};
use functors_lenses::value::Value;

use crate::error::SampleError;

/// Uppercases `name` inside `Identity`.
pub fn shout(name: &str) -> Identity<String> {
    Identity::new(name).fmap(str::to_uppercase)
}

/// Chains three maps over `name`, extracting the result at the end.
pub fn not_my_name(name: &str) -> String {
    Identity::new(name)
        .fmap(|value| value.chars().take(3).collect::<String>())
        .fmap(|value| format!("My name is not {value}!"))
        .fmap(|value| value.to_uppercase())
        .into_inner()
}

/// Maps a doubling function over a functor that overrides mapping.
pub fn overridden(value: i32) -> &'static str {
    let functor: Const<&'static str, i32> = Const::new("You have been overridden!");
    tracing::debug!(value, "Mapping over a Const functor");
    map(|number: i32| number * 2, functor).into_const()
}

/// Reads `name` and adds `age` to a fresh record.
pub fn name_and_age(name: &str, age: i64) -> (Option<Value>, Value) {
    let record = Value::record([("name", Value::from(name))]);
    (record.prop("name").cloned(), record.assoc("age", Value::from(age)))
}

/// Reads `firstName` and returns a copy with it replaced.
pub fn rename(person: &Value, first_name: &str) -> (Option<Value>, Value) {
    let first_name_lens = lens_prop("firstName");
    (
        view(&first_name_lens, person),
        set(&first_name_lens, Some(Value::from(first_name)), person),
    )
}

/// Rewrites the department manager's last name by copying every level.
///
/// # Errors
///
/// Returns `SampleError::MissingField` if a level of the path is absent.
pub fn rebuild_by_hand(person: &Value, last_name: &str) -> Result<Value, SampleError> {
    let missing = |path: &[&str]| SampleError::MissingField(path.iter().copied().collect());

    let position = person
        .prop("position")
        .ok_or_else(|| missing(&["position"]))?;
    let department = position
        .prop("department")
        .ok_or_else(|| missing(&["position", "department"]))?;
    let manager = department
        .prop("departmentManager")
        .ok_or_else(|| missing(&["position", "department", "departmentManager"]))?;

    Ok(person.assoc(
        "position",
        position.assoc(
            "department",
            department.assoc(
                "departmentManager",
                manager.assoc("lastName", Value::from(last_name)),
            ),
        ),
    ))
}

/// Rewrites the value at the end of `lens` through the lens.
pub fn rebuild_with_lens(person: &Value, lens: &PathLens, replacement: &str) -> Value {
    lens.set(Some(Value::from(replacement)), person)
}

/// Rewrites the field at the end of `lens` and cross-checks the result
/// against [`rebuild_by_hand`].
///
/// A fixture without the default nesting only skips the manual rebuild; the
/// lens result is returned either way.
pub fn nested_update(person: &Value, lens: &PathLens, last_name: &str) -> Value {
    let with_lens = rebuild_with_lens(person, lens, last_name);
    match rebuild_by_hand(person, last_name) {
        Ok(by_hand) if by_hand == with_lens => {
            tracing::debug!(value = ?view(lens, &by_hand), "Manual rebuild agrees");
        }
        Ok(_) => tracing::warn!("Manual and lens updates differ"),
        Err(error) => tracing::warn!(%error, "Manual rebuild skipped"),
    }
    with_lens
}

/// Reads the friend at `index`.
pub fn friend(person: &Value, index: usize) -> Option<Value> {
    view(
        &lens_path([PathSegment::from("friends"), PathSegment::from(index)]),
        person,
    )
}
