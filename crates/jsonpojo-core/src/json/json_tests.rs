#![allow(non_snake_case)]

use super::*;
use crate::error::GenerateError;
use test_case::test_case;

#[test_case("null", JsonKind::Null)]
#[test_case("true", JsonKind::Boolean)]
#[test_case("42", JsonKind::Number)]
#[test_case("4.2e1", JsonKind::Number)]
#[test_case("\"x\"", JsonKind::String)]
#[test_case("[]", JsonKind::Array)]
#[test_case("{}", JsonKind::Object)]
fn SerdeJsonParser___parse___yields_expected_kind(text: &str, expected: JsonKind) {
    let value = SerdeJsonParser.parse(text).unwrap();

    assert_eq!(value.kind(), expected);
}

#[test]
fn SerdeJsonParser___parse___preserves_key_order() {
    let value = SerdeJsonParser.parse(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();

    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(keys, ["zeta", "alpha", "mid"]);
}

#[test]
fn SerdeJsonParser___duplicate_key___keeps_first_position_last_value() {
    let value = SerdeJsonParser.parse(r#"{"a": 1, "b": 2, "a": "x"}"#).unwrap();
    let object = value.as_object().unwrap();

    let keys: Vec<&str> = object.keys().map(String::as_str).collect();

    assert_eq!(keys, ["a", "b"]);
    assert_eq!(object["a"], JsonValue::String("x".into()));
}

#[test]
fn SerdeJsonParser___malformed_text___returns_json_syntax_error() {
    let result = SerdeJsonParser.parse("{\"a\": ");

    assert!(matches!(result, Err(GenerateError::JsonSyntax { .. })));
}

#[test]
fn SerdeJsonParser___trailing_garbage___returns_json_syntax_error() {
    let result = SerdeJsonParser.parse("{} {}");

    assert!(matches!(result, Err(GenerateError::JsonSyntax { .. })));
}

#[test]
fn JsonValue___from_serde_value___converts_nested_structure() {
    let value = JsonValue::from(serde_json::json!({"items": [1, null, {"ok": true}]}));

    let items = value.as_object().unwrap()["items"].as_array().unwrap();

    assert_eq!(items[0], JsonValue::Number(1.0));
    assert_eq!(items[1], JsonValue::Null);
    assert_eq!(items[2].as_object().unwrap()["ok"], JsonValue::Boolean(true));
}

#[test_case(JsonValue::Object(JsonObject::new()), true)]
#[test_case(JsonValue::Array(vec![]), true)]
#[test_case(JsonValue::Null, false)]
#[test_case(JsonValue::Number(1.0), false)]
#[test_case(JsonValue::String("s".into()), false)]
fn JsonValue___is_container___only_for_arrays_and_objects(value: JsonValue, expected: bool) {
    assert_eq!(value.is_container(), expected);
}

#[test]
fn JsonValue___first_element___empty_array___returns_none() {
    assert_eq!(JsonValue::Array(vec![]).first_element(), None);
}

#[test]
fn JsonValue___first_element___non_array___returns_none() {
    assert_eq!(JsonValue::Boolean(true).first_element(), None);
}

#[test]
fn JsonKind___display___uses_lowercase_names() {
    assert_eq!(JsonKind::Object.to_string(), "object");
    assert_eq!(JsonKind::Boolean.to_string(), "boolean");
}
