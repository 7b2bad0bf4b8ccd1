//! Integration tests for lenses over structs and value trees.

use functors_lenses::optics::{
    Lens, Path, lens, lens_index, lens_path, lens_prop, over, set, view,
};
use functors_lenses::typeclass::{Const, Functor, Identity, map};
use functors_lenses::value::Value;
use rstest::{fixture, rstest};

#[fixture]
fn person() -> Value {
    Value::record([
        ("firstName", Value::from("Bobo")),
        ("lastName", Value::from("Flakes")),
        ("company", Value::from("Fake Inc.")),
        (
            "position",
            Value::record([
                ("title", Value::from("Front-End Developer")),
                (
                    "department",
                    Value::record([
                        ("name", Value::from("Product")),
                        (
                            "departmentManager",
                            Value::record([
                                ("firstName", Value::from("Bobo Sr.")),
                                ("lastName", Value::from("Flax")),
                            ]),
                        ),
                    ]),
                ),
            ]),
        ),
    ])
}

#[fixture]
fn friends() -> Value {
    Value::sequence([
        Value::record([("firstName", Value::from("Clark")), ("lastName", Value::from("Kent"))]),
        Value::record([("firstName", Value::from("Bruce")), ("lastName", Value::from("Wayne"))]),
        Value::record([("firstName", Value::from("Barry")), ("lastName", Value::from("Allen"))]),
    ])
}

fn at<'a>(value: &'a Value, path: &[&str]) -> &'a Value {
    path.iter()
        .try_fold(value, |node, key| node.prop(key))
        .unwrap_or_else(|| panic!("missing {path:?}"))
}

// =============================================================================
// Functor override
// =============================================================================

#[rstest]
fn map_defers_to_overriding_fmap() {
    let functor: Const<&str, i32> = Const::new("You have been overridden!");
    let result = map(|n: i32| n * 2, functor);
    assert_eq!(result.into_const(), "You have been overridden!");
}

#[rstest]
fn identity_chain_extracts_value() {
    let name = Identity::new("Bobo");
    let shouted = name
        .fmap(|value| value[..3].to_string())
        .fmap(|value| format!("My name is not {value}!"))
        .fmap(|value| value.to_uppercase());
    assert_eq!(shouted.value(), "MY NAME IS NOT BOB!");
    assert_eq!(*name.value(), "Bobo");
}

// =============================================================================
// lens_path on the nested person
// =============================================================================

#[rstest]
fn path_set_matches_manual_rebuild(person: Value) {
    let manager = lens_path(["position", "department", "departmentManager", "lastName"]);

    let manual = person.assoc(
        "position",
        at(&person, &["position"]).assoc(
            "department",
            at(&person, &["position", "department"]).assoc(
                "departmentManager",
                at(&person, &["position", "department", "departmentManager"])
                    .assoc("lastName", Value::from("Flakes")),
            ),
        ),
    );

    let updated = set(&manager, Some(Value::from("Flakes")), &person);
    assert_eq!(updated, manual);
    assert_eq!(view(&manager, &updated), Some(Value::from("Flakes")));
    assert_eq!(view(&manager, &person), Some(Value::from("Flax")));
}

#[rstest]
fn path_set_shares_untouched_levels(person: Value) {
    let manager = lens_path(["position", "department", "departmentManager", "lastName"]);
    let updated = set(&manager, Some(Value::from("Flakes")), &person);

    for path in [
        &["position", "title"][..],
        &["position", "department", "name"],
        &["position", "department", "departmentManager", "firstName"],
        &["firstName"],
        &["company"],
    ] {
        assert!(at(&updated, path).ptr_eq(at(&person, path)), "{path:?} was copied");
    }
    for path in [
        &["position"][..],
        &["position", "department"],
        &["position", "department", "departmentManager"],
    ] {
        assert!(!at(&updated, path).ptr_eq(at(&person, path)), "{path:?} was shared");
    }
}

#[rstest]
fn path_view_through_missing_levels_is_none() {
    let empty = Value::record::<&str, _>([]);
    assert_eq!(view(&lens_path(["a", "b"]), &empty), None);
    assert_eq!(view(&lens_path(["a", "b"]), &Value::from(3)), None);
}

#[rstest]
fn path_set_vivifies_records(person: Value) {
    let deputy = lens_path(["position", "department", "deputy", "lastName"]);
    let updated = set(&deputy, Some(Value::from("Kent")), &person);
    assert_eq!(
        at(&updated, &["position", "department", "deputy"]),
        &Value::record([("lastName", Value::from("Kent"))])
    );
}

#[rstest]
fn parsed_path_reads_sequences(friends: Value) {
    let team = Value::record([("friends", friends)]);
    let lens = "friends[2].lastName".parse::<Path>().unwrap().lens();
    assert_eq!(view(&lens, &team), Some(Value::from("Allen")));
}

// =============================================================================
// lens_prop / lens_index
// =============================================================================

#[rstest]
fn prop_view_and_set(person: Value) {
    let first_name = lens_prop("firstName");
    assert_eq!(view(&first_name, &person), Some(Value::from("Bobo")));

    let junior = set(&first_name, Some(Value::from("Bobo Jr.")), &person);
    assert_eq!(junior.prop("firstName"), Some(&Value::from("Bobo Jr.")));
    assert_eq!(person.prop("firstName"), Some(&Value::from("Bobo")));
}

#[rstest]
fn index_view_and_set(friends: Value) {
    let third = lens_index(2);
    assert_eq!(
        view(&third, &friends).and_then(|friend| friend.prop("firstName").cloned()),
        Some(Value::from("Barry"))
    );

    let diana = Value::record([("firstName", Value::from("Diana"))]);
    let updated = set(&lens_index(0), Some(diana.clone()), &friends);
    assert_eq!(updated.nth(0), Some(&diana));
    assert!(updated.nth(1).unwrap().ptr_eq(friends.nth(1).unwrap()));
    assert_eq!(
        friends.nth(0).and_then(|friend| friend.prop("firstName")),
        Some(&Value::from("Clark"))
    );
}

#[rstest]
#[case(3)]
#[case(usize::MAX)]
fn index_set_out_of_range_leaves_friends(friends: Value, #[case] index: usize) {
    let diana = Value::record([("firstName", Value::from("Diana"))]);
    let updated = set(&lens_index(index), Some(diana), &friends);
    assert!(updated.ptr_eq(&friends));
    assert_eq!(updated.as_sequence().map(|sequence| sequence.len()), Some(3));
}

#[rstest]
fn parsed_path_with_huge_index_leaves_source() {
    let empty = Value::record::<&str, _>([]);
    let lens = "a[18446744073709551615]".parse::<Path>().unwrap().lens();
    assert!(set(&lens, Some(Value::from(1)), &empty).ptr_eq(&empty));
}

#[rstest]
fn over_agrees_with_set_of_view(person: Value) {
    let last_name = lens_prop("lastName");
    let shout = |name: Option<Value>| {
        name.and_then(|name| name.as_str().map(|text| Value::from(text.to_uppercase())))
    };

    let expected = set(&last_name, shout(view(&last_name, &person)), &person);
    assert_eq!(over(&last_name, shout, &person), expected);
}

// =============================================================================
// Struct lenses and composition
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Manager {
    first_name: String,
    last_name: String,
}

#[derive(Clone, PartialEq, Debug)]
struct Department {
    name: String,
    manager: Manager,
}

#[rstest]
fn composed_struct_lens_reaches_nested_field() {
    let manager_last_name = functors_lenses::lens!(Department, manager)
        .compose(functors_lenses::lens!(Manager, last_name));

    let department = Department {
        name: "Product".to_string(),
        manager: Manager {
            first_name: "Bobo Sr.".to_string(),
            last_name: "Flax".to_string(),
        },
    };

    assert_eq!(manager_last_name.view(&department), "Flax");
    let fixed = manager_last_name.set("Flakes".to_string(), &department);
    assert_eq!(fixed.manager.last_name, "Flakes");
    assert_eq!(fixed.manager.first_name, "Bobo Sr.");
    assert_eq!(fixed.name, "Product");
    assert_eq!(department.manager.last_name, "Flax");
}

#[rstest]
fn focus_with_vec_carrier_builds_every_variant() {
    let first = lens(
        |pair: &(char, u8)| pair.0,
        |first, pair: &(char, u8)| (first, pair.1),
    );
    let variants = first.focus(|current| vec![current, 'b', 'c'], &('a', 1));
    assert_eq!(variants, vec![('a', 1), ('b', 1), ('c', 1)]);
}
