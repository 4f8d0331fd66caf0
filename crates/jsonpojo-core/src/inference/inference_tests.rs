#![allow(non_snake_case)]

use super::*;
use crate::json::{JsonKind, JsonParser, SerdeJsonParser};
use test_case::test_case;

fn infer_text(text: &str) -> GenerateResult<ClassModel> {
    infer_text_with(text, ClassStyle::Model)
}

fn infer_text_with(text: &str, style: ClassStyle) -> GenerateResult<ClassModel> {
    let value = SerdeJsonParser.parse(text)?;
    let naming = NamingStrategies::default();
    Inferrer::new(&naming).infer("Root", &value, style)
}

fn type_of<'m>(model: &'m ClassModel, key: &str) -> &'m TypeRef {
    &model
        .find_property(key)
        .unwrap_or_else(|| panic!("missing property {key}"))
        .ty
}

// ============================================================================
// Root validation
// ============================================================================

#[test_case("42", JsonKind::Number)]
#[test_case("null", JsonKind::Null)]
#[test_case("\"text\"", JsonKind::String)]
#[test_case("true", JsonKind::Boolean)]
fn infer___scalar_root___returns_invalid_root(text: &str, kind: JsonKind) {
    let result = infer_text(text);

    assert_eq!(result, Err(GenerateError::InvalidRoot { kind }));
}

#[test]
fn infer___illegal_root_name___returns_invalid_identifier() {
    let naming = NamingStrategies::default();
    let value = SerdeJsonParser.parse("{}").unwrap();

    let result = Inferrer::new(&naming).infer("my-class", &value, ClassStyle::Model);

    assert!(matches!(
        result,
        Err(GenerateError::InvalidIdentifier { role: NamingRole::Class, .. })
    ));
}

#[test_case("String", ClassStyle::Model)]
#[test_case("List", ClassStyle::Bean)]
#[test_case("Object", ClassStyle::Model)]
#[test_case("Builder", ClassStyle::Builder)]
#[test_case("JsonProperty", ClassStyle::Jackson)]
#[test_case("SerializedName", ClassStyle::Gson)]
fn infer___root_name_shadowing_referenced_type___returns_invalid_identifier(
    name: &str,
    style: ClassStyle,
) {
    let naming = NamingStrategies::default();
    let value = SerdeJsonParser.parse(r#"{"a": "x"}"#).unwrap();

    let result = Inferrer::new(&naming).infer(name, &value, style);

    assert!(matches!(
        result,
        Err(GenerateError::InvalidIdentifier { role: NamingRole::Class, .. })
    ));
}

#[test_case("Builder", ClassStyle::Model)]
#[test_case("JsonProperty", ClassStyle::Gson)]
#[test_case("SerializedName", ClassStyle::Jackson)]
fn infer___root_name_reserved_only_by_other_styles___is_kept(name: &str, style: ClassStyle) {
    let naming = NamingStrategies::default();
    let value = SerdeJsonParser.parse(r#"{"a": "x"}"#).unwrap();

    let model = Inferrer::new(&naming).infer(name, &value, style).unwrap();

    assert_eq!(model.name, name);
}

#[test]
fn infer___object_root___is_public_not_static() {
    let model = infer_text("{}").unwrap();

    assert_eq!(model.name, "Root");
    assert!(model.modifiers.contains(&Modifier::Public));
    assert!(!model.is_static());
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn infer___keys___keep_source_order() {
    let model = infer_text(r#"{"b": 1, "a": 2}"#).unwrap();

    assert_eq!(model.keys(), ["b", "a"]);
}

#[test]
fn infer___scalars___map_to_scalar_types() {
    let model = infer_text(r#"{"flag": true, "count": 3, "ratio": 0.5, "name": "x", "gone": null}"#)
        .unwrap();

    assert_eq!(type_of(&model, "flag"), &TypeRef::BOOLEAN);
    assert_eq!(type_of(&model, "count"), &TypeRef::DECIMAL);
    assert_eq!(type_of(&model, "ratio"), &TypeRef::DECIMAL);
    assert_eq!(type_of(&model, "name"), &TypeRef::STRING);
    assert_eq!(type_of(&model, "gone"), &TypeRef::OBJECT);
}

#[test]
fn infer___nested_object___promoted_to_static_inner_class() {
    let model = infer_text(r#"{"user": {"id": 1, "name": "x"}}"#).unwrap();

    assert_eq!(type_of(&model, "user"), &TypeRef::class("User"));
    let user = model.find_inner_type("User").unwrap();
    assert!(user.modifiers.contains(&Modifier::Public));
    assert!(user.is_static());
    assert_eq!(type_of(user, "id"), &TypeRef::DECIMAL);
    assert_eq!(type_of(user, "name"), &TypeRef::STRING);
}

#[test]
fn infer___deep_nesting___attaches_each_class_to_its_parent() {
    let model = infer_text(r#"{"a": {"b": {"c": {"d": 1}}}}"#).unwrap();

    let a = model.find_inner_type("A").unwrap();
    let b = a.find_inner_type("B").unwrap();
    let c = b.find_inner_type("C").unwrap();

    assert_eq!(model.inner_types.len(), 1);
    assert_eq!(type_of(c, "d"), &TypeRef::DECIMAL);
    assert_eq!(model.walk().len(), 4);
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn infer___array_of_scalars___is_list_of_scalar() {
    let model = infer_text(r#"{"tags": ["a", "b"]}"#).unwrap();

    assert_eq!(type_of(&model, "tags"), &TypeRef::list(TypeRef::STRING));
    assert!(model.inner_types.is_empty());
}

#[test]
fn infer___array_of_objects___uses_first_element_only() {
    let model = infer_text(r#"{"items": [{"id": 1}, {"id": 1, "extra": true}]}"#).unwrap();

    assert_eq!(type_of(&model, "items"), &TypeRef::list(TypeRef::class("Items")));
    let items = model.find_inner_type("Items").unwrap();
    assert_eq!(items.keys(), ["id"]);
}

#[test]
fn infer___heterogeneous_array___first_element_wins() {
    let model = infer_text(r#"{"mixed": [1, "two", {"three": 3}]}"#).unwrap();

    assert_eq!(type_of(&model, "mixed"), &TypeRef::list(TypeRef::DECIMAL));
    assert!(model.inner_types.is_empty());
}

#[test]
fn infer___array_of_arrays___nests_lists() {
    let model = infer_text(r#"{"grid": [[1, 2], [3]]}"#).unwrap();

    assert_eq!(
        type_of(&model, "grid"),
        &TypeRef::list(TypeRef::list(TypeRef::DECIMAL))
    );
}

#[test]
fn infer___deep_array_of_objects___one_list_layer_per_level() {
    let model = infer_text(r#"{"cube": [[[{"v": true}]]]}"#).unwrap();

    let ty = type_of(&model, "cube");
    assert_eq!(ty.list_depth(), 3);
    assert_eq!(ty.innermost(), &TypeRef::class("Cube"));
    assert!(model.find_inner_type("Cube").is_some());
}

#[test_case(r#"{"xs": []}"# ; "empty array")]
#[test_case(r#"{"xs": [null]}"# ; "null first element")]
#[test_case(r#"{"xs": [null, {"a": 1}]}"# ; "null first element hides later object")]
fn infer___empty_or_null_array___is_list_of_object(text: &str) {
    let model = infer_text(text).unwrap();

    assert_eq!(type_of(&model, "xs"), &TypeRef::list(TypeRef::OBJECT));
    assert!(model.inner_types.is_empty());
}

#[test]
fn infer___empty_inner_array___is_nested_list_of_object() {
    let model = infer_text(r#"{"xs": [[]]}"#).unwrap();

    assert_eq!(
        type_of(&model, "xs"),
        &TypeRef::list(TypeRef::list(TypeRef::OBJECT))
    );
}

// ============================================================================
// Array roots
// ============================================================================

#[test]
fn infer___array_root___infers_from_first_object() {
    let model = infer_text(r#"[{"id": 1, "tags": []}, {"other": 2}]"#).unwrap();

    assert_eq!(model.name, "Root");
    assert_eq!(model.keys(), ["id", "tags"]);
    assert!(!model.is_static());
}

#[test]
fn infer___nested_array_root___follows_first_elements() {
    let model = infer_text(r#"[[{"id": 1}]]"#).unwrap();

    assert_eq!(model.keys(), ["id"]);
}

#[test_case("[]" ; "empty")]
#[test_case("[1, 2]" ; "scalars")]
#[test_case("[null, {\"a\": 1}]" ; "null first")]
fn infer___array_root_without_object___is_empty_class(text: &str) {
    let model = infer_text(text).unwrap();

    assert!(model.properties.is_empty());
    assert!(model.inner_types.is_empty());
    assert!(model.modifiers.contains(&Modifier::Public));
}

// ============================================================================
// Naming and clashes
// ============================================================================

#[test]
fn infer___property_key___named_by_strategies() {
    let model = infer_text(r#"{"user-info": {"first_name": "x"}}"#).unwrap();

    let property = model.find_property("user-info").unwrap();
    assert_eq!(property.field, "userInfo");
    assert_eq!(property.ty, TypeRef::class("UserInfo"));
    assert_eq!(model.inner_types[0].properties[0].field, "firstName");
}

#[test]
fn infer___sibling_class_clash___gets_numeric_suffix() {
    let model = infer_text(r#"{"user_info": {"a": 1}, "userInfo": {"b": 2}}"#).unwrap();

    let names: Vec<&str> = model.inner_types.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["UserInfo", "UserInfo2"]);
    assert_eq!(type_of(&model, "userInfo"), &TypeRef::class("UserInfo2"));
    assert_eq!(model.find_inner_type("UserInfo2").unwrap().keys(), ["b"]);
}

#[test]
fn infer___nested_class_named_like_ancestor___is_renamed() {
    let model = infer_text(r#"{"data": {"data": {"value": 1}}}"#).unwrap();

    let outer = model.find_inner_type("Data").unwrap();
    let inner = &outer.inner_types[0];

    assert_eq!(inner.name, "Data2");
    assert_eq!(type_of(outer, "data"), &TypeRef::class("Data2"));
}

#[test]
fn infer___nested_class_named_like_root___is_renamed() {
    let model = infer_text(r#"{"root": {"x": 1}}"#).unwrap();

    assert_eq!(model.inner_types[0].name, "Root2");
}

#[test]
fn infer___same_name_in_unrelated_scopes___is_kept() {
    let model = infer_text(r#"{"left": {"data": {"l": 1}}, "right": {"data": {"r": 1}}}"#).unwrap();

    let left = model.find_inner_type("Left").unwrap();
    let right = model.find_inner_type("Right").unwrap();

    assert_eq!(left.inner_types[0].name, "Data");
    assert_eq!(right.inner_types[0].name, "Data");
}

#[test]
fn infer___builder_key_under_builder_style___avoids_builder_class() {
    let model = infer_text_with(r#"{"builder": {"x": 1}}"#, ClassStyle::Builder).unwrap();

    assert_eq!(model.inner_types[0].name, "Builder2");
}

#[test_case("string", "String2")]
#[test_case("list", "List2")]
#[test_case("object", "Object2")]
fn infer___key_named_like_referenced_type___is_renamed(key: &str, expected: &str) {
    let model = infer_text(&format!(r#"{{"{key}": {{"x": 1}}}}"#)).unwrap();

    assert_eq!(model.inner_types[0].name, expected);
    assert_eq!(type_of(&model, key), &TypeRef::class(expected));
}

#[test_case("json_property", ClassStyle::Jackson, "JsonProperty2")]
#[test_case("json_creator", ClassStyle::Jackson, "JsonCreator2")]
#[test_case("serialized_name", ClassStyle::Gson, "SerializedName2")]
#[test_case("json_property", ClassStyle::Model, "JsonProperty")]
#[test_case("serialized_name", ClassStyle::Jackson, "SerializedName")]
fn infer___key_named_like_annotation_type___is_renamed_when_style_imports_it(
    key: &str,
    style: ClassStyle,
    expected: &str,
) {
    let model = infer_text_with(&format!(r#"{{"{key}": {{"a": 1}}, "x": 1}}"#), style).unwrap();

    assert_eq!(model.inner_types[0].name, expected);
    assert_eq!(type_of(&model, key), &TypeRef::class(expected));
}

#[test]
fn infer___boolean_keys_sharing_getter___get_distinct_getters() {
    let model = infer_text(r#"{"is_active": true, "active": false}"#).unwrap();

    let getters: Vec<Option<&str>> =
        model.properties.iter().map(|p| p.getter.as_deref()).collect();
    assert_eq!(getters, [Some("isActive"), Some("isActive2")]);
}

#[test]
fn infer___builder_key_under_model_style___keeps_name() {
    let model = infer_text(r#"{"builder": {"x": 1}}"#).unwrap();

    assert_eq!(model.inner_types[0].name, "Builder");
}

#[test]
fn infer___unconvertible_key___aborts_generation() {
    let result = infer_text(r#"{"ok": 1, "nested": {"???": 2}}"#);

    assert!(matches!(result, Err(GenerateError::InvalidIdentifier { .. })));
}

#[test]
fn infer___custom_class_strategy___names_nested_types() {
    let naming = NamingStrategies::default().with_class(|raw: &str, _ty: &TypeRef| {
        Ok::<_, GenerateError>(format!("{}Dto", crate::naming::NamingCase::UpperCamel.apply(raw)))
    });
    let value = SerdeJsonParser.parse(r#"{"address": {"zip": "1"}}"#).unwrap();

    let model = infer("Root", &value, ClassStyle::Model, &naming).unwrap();

    assert_eq!(model.inner_types[0].name, "AddressDto");
    assert_eq!(type_of(&model, "address"), &TypeRef::class("AddressDto"));
}

// ============================================================================
// Styles
// ============================================================================

#[test]
fn infer___every_style___yields_same_type_tree() {
    let text = r#"{"id": 1, "user": {"tags": ["a"], "geo": [[1.5]]}, "items": [{"ok": true}]}"#;

    fn shape(model: &ClassModel) -> Vec<(String, Vec<(String, TypeRef)>)> {
        model
            .walk()
            .iter()
            .map(|c| {
                let props = c.properties.iter().map(|p| (p.key.clone(), p.ty.clone())).collect();
                (c.name.clone(), props)
            })
            .collect()
    }

    let baseline = shape(&infer_text_with(text, ClassStyle::Model).unwrap());
    for style in ClassStyle::ALL {
        let model = infer_text_with(text, style).unwrap();
        assert_eq!(shape(&model), baseline, "{style} changed the type tree");
        assert!(model.walk().iter().all(|c| c.style == style));
    }
}

#[test]
fn infer___repeated_calls___are_equal() {
    let text = r#"{"a": [{"b": {"c": [1]}}], "d": null}"#;

    assert_eq!(infer_text(text).unwrap(), infer_text(text).unwrap());
}
