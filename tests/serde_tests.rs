#![cfg(feature = "serde")]

//! Integration tests for serde support of value trees.

use functors_lenses::optics::{Path, lens_path, set, view};
use functors_lenses::value::Value;
use rstest::rstest;

const PERSON: &str = r#"{
    "firstName": "Bobo",
    "lastName": "Flakes",
    "age": 25,
    "height": 1.5,
    "employed": true,
    "nickname": null,
    "friends": [{"firstName": "Clark"}, {"firstName": "Bruce"}]
}"#;

#[rstest]
fn deserialize_maps_json_kinds() {
    let person: Value = serde_json::from_str(PERSON).unwrap();

    assert_eq!(person.prop("firstName"), Some(&Value::from("Bobo")));
    assert_eq!(person.prop("age"), Some(&Value::from(25)));
    assert_eq!(person.prop("height"), Some(&Value::from(1.5)));
    assert_eq!(person.prop("employed"), Some(&Value::from(true)));
    assert_eq!(person.prop("nickname"), Some(&Value::Null));
    assert_eq!(
        person.prop("friends").and_then(|friends| friends.nth(1)),
        Some(&Value::record([("firstName", Value::from("Bruce"))]))
    );
}

#[rstest]
fn deserialize_keeps_key_order() {
    let person: Value = serde_json::from_str(PERSON).unwrap();
    let keys: Vec<&str> = person.as_record().unwrap().keys().collect();
    assert_eq!(
        keys,
        vec!["firstName", "lastName", "age", "height", "employed", "nickname", "friends"]
    );
}

#[rstest]
fn json_roundtrip_after_lens_update() {
    let person: Value = serde_json::from_str(PERSON).unwrap();
    // A key segment never indexes into a sequence.
    let second_friend = lens_path(["friends", "1", "firstName"].map(String::from));
    assert_eq!(view(&second_friend, &person), None);

    let updated = set(
        &"friends[1].firstName".parse::<Path>().unwrap().lens(),
        Some(Value::from("Barry")),
        &person,
    );

    let json = serde_json::to_string(&updated).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, updated);
    assert!(json.contains(r#""firstName":"Barry""#));
}

#[rstest]
#[case(u64::MAX)]
#[case(u64::from(u32::MAX))]
fn unsigned_numbers_deserialize(#[case] number: u64) {
    let value: Value = serde_json::from_str(&number.to_string()).unwrap();
    match i64::try_from(number) {
        Ok(integer) => assert_eq!(value, Value::from(integer)),
        Err(_) => assert!(value.as_f64().is_some()),
    }
}

#[rstest]
fn serialize_compact_output() {
    let value = Value::record([
        ("name", Value::from("Bobo")),
        ("tags", Value::sequence([Value::from(1), Value::Null])),
    ]);
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        r#"{"name":"Bobo","tags":[1,null]}"#
    );
}
