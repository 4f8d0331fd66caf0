//! Class hierarchy inference from a parsed JSON document.
//!
//! The [`Inferrer`] walks a [`JsonValue`] once and produces a [`ClassModel`]
//! tree:
//!
//! - an object becomes a class, its keys become properties in source order
//! - an object-valued property becomes a nested `public static` class named by
//!   the class strategy, referenced through [`TypeRef::Class`]
//! - an array becomes `List<T>`, one layer per nesting level, where `T` comes
//!   from the **first element only** (first-element-wins). Later elements with
//!   other shapes or extra keys are ignored.
//! - empty arrays and arrays whose first element is `null` hold the nullable
//!   object sentinel
//!
//! # Examples
//!
//! ```
//! use jsonpojo_core::{ClassStyle, Inferrer, JsonParser, NamingStrategies, SerdeJsonParser, TypeRef};
//!
//! let value = SerdeJsonParser.parse(r#"{"user": {"id": 1}, "tags": ["a"]}"#).unwrap();
//! let naming = NamingStrategies::default();
//! let model = Inferrer::new(&naming).infer("Root", &value, ClassStyle::Model).unwrap();
//!
//! assert_eq!(model.find_property("user").unwrap().ty, TypeRef::class("User"));
//! assert_eq!(model.find_property("tags").unwrap().ty, TypeRef::list(TypeRef::STRING));
//! assert_eq!(model.inner_types[0].name, "User");
//! ```
//!
//! # Name clashes
//!
//! A nested class may not reuse the name of a sibling nested class, of any
//! enclosing class, of the synthesized `Builder`, or of a type the rendered
//! source refers to by simple name (`String`, `List`, `JsonProperty`, ...). On
//! a clash the class strategy is asked again for `key_2`, `key_3`, ...
//! Identical names in unrelated scopes are legal Java and are left alone. The
//! root name is caller-supplied, so a reserved root name is an error instead.

use crate::builder::{ClassBuilder, is_reserved_type_name};
use crate::error::{GenerateError, GenerateResult};
use crate::json::{JsonObject, JsonValue};
use crate::model::ClassModel;
use crate::naming::{NamingRole, NamingStrategies, is_java_identifier};
use crate::style::ClassStyle;
use crate::types::{Modifier, TypeRef, scalar_type_of};

const ROOT_MODIFIERS: [Modifier; 1] = [Modifier::Public];
const NESTED_MODIFIERS: [Modifier; 2] = [Modifier::Public, Modifier::Static];

/// Infers class models using a fixed set of naming strategies
#[derive(Debug, Clone, Copy)]
pub struct Inferrer<'a> {
    naming: &'a NamingStrategies,
}

impl<'a> Inferrer<'a> {
    pub fn new(naming: &'a NamingStrategies) -> Self {
        Self { naming }
    }

    /// Infer the class tree rooted at `value`.
    ///
    /// `name` is used verbatim for the root class. It must be a legal
    /// identifier that does not shadow a type the rendered source uses. The root must be an object or an array; for an array the
    /// first element is followed through nested arrays, and the root class is
    /// inferred from the object found there (or left empty if there is none).
    pub fn infer(
        &self,
        name: &str,
        value: &JsonValue,
        style: ClassStyle,
    ) -> GenerateResult<ClassModel> {
        if !value.is_container() {
            return Err(GenerateError::InvalidRoot { kind: value.kind() });
        }
        if !is_java_identifier(name) || is_reserved_type_name(name, &style.rules()) {
            return Err(GenerateError::invalid_identifier(name, NamingRole::Class));
        }

        match representative_object(value) {
            Some(object) => self.infer_object(name, object, style, &ROOT_MODIFIERS, &[]),
            None => {
                tracing::debug!(class = name, "root array has no object sample");
                let mut builder = ClassBuilder::new(name, style, self.naming);
                builder.add_modifiers(ROOT_MODIFIERS);
                Ok(builder.build())
            }
        }
    }

    fn infer_object(
        &self,
        name: &str,
        object: &JsonObject,
        style: ClassStyle,
        modifiers: &[Modifier],
        enclosing: &[&str],
    ) -> GenerateResult<ClassModel> {
        let mut builder = ClassBuilder::new(name, style, self.naming);
        builder.add_modifiers(modifiers.iter().copied());

        let mut scope = enclosing.to_vec();
        scope.push(name);

        for (key, value) in object {
            let ty = match value {
                JsonValue::Object(nested) => {
                    self.infer_nested(key, nested, style, &mut builder, &scope)?
                }
                JsonValue::Array(_) => TypeRef::list(self.resolve_element_type(
                    key,
                    value.first_element(),
                    style,
                    &mut builder,
                    &scope,
                )?),
                // Every non-container maps to a scalar
                leaf => scalar_type_of(leaf).unwrap_or(TypeRef::OBJECT),
            };
            builder.add_property(key, ty)?;
        }

        let model = builder.build();
        tracing::debug!(
            class = name,
            properties = model.properties.len(),
            inner_types = model.inner_types.len(),
            "class inferred"
        );
        Ok(model)
    }

    /// Element type of an array whose first element is `first`
    fn resolve_element_type(
        &self,
        key: &str,
        first: Option<&JsonValue>,
        style: ClassStyle,
        builder: &mut ClassBuilder<'_>,
        scope: &[&str],
    ) -> GenerateResult<TypeRef> {
        match first {
            None | Some(JsonValue::Null) => Ok(TypeRef::OBJECT),
            Some(nested @ JsonValue::Array(_)) => Ok(TypeRef::list(self.resolve_element_type(
                key,
                nested.first_element(),
                style,
                builder,
                scope,
            )?)),
            Some(JsonValue::Object(object)) => self.infer_nested(key, object, style, builder, scope),
            Some(leaf) => Ok(scalar_type_of(leaf).unwrap_or(TypeRef::OBJECT)),
        }
    }

    /// Infer a nested class for `key`, attach it to `builder`, and return a
    /// reference to it
    fn infer_nested(
        &self,
        key: &str,
        object: &JsonObject,
        style: ClassStyle,
        builder: &mut ClassBuilder<'_>,
        scope: &[&str],
    ) -> GenerateResult<TypeRef> {
        let class_name = self.nested_class_name(key, builder, scope)?;
        let inner = self.infer_object(&class_name, object, style, &NESTED_MODIFIERS, scope)?;
        builder.add_inner_type(inner);
        Ok(TypeRef::Class(class_name))
    }

    fn nested_class_name(
        &self,
        key: &str,
        builder: &ClassBuilder<'_>,
        scope: &[&str],
    ) -> GenerateResult<String> {
        let strategy = self.naming.class();
        let is_taken =
            |name: &str| builder.is_type_name_taken(name) || scope.iter().any(|s| *s == name);

        let mut name = strategy.convert(key, &TypeRef::OBJECT)?;
        let mut suffix = 2;
        while is_taken(&name) {
            // Bounded so a strategy that ignores the suffix cannot spin forever
            let bound =
                scope.len() + builder.inner_type_count() + builder.reserved_type_count() + 2;
            if suffix > bound {
                return Err(GenerateError::invalid_identifier(key, NamingRole::Class));
            }
            tracing::debug!(key, clashing = %name, "nested class name already in scope");
            name = strategy.convert(&format!("{key}_{suffix}"), &TypeRef::OBJECT)?;
            suffix += 1;
        }

        Ok(name)
    }
}

/// Infer a class tree with the given strategies
pub fn infer(
    name: &str,
    value: &JsonValue,
    style: ClassStyle,
    naming: &NamingStrategies,
) -> GenerateResult<ClassModel> {
    Inferrer::new(naming).infer(name, value, style)
}

/// The object a root value stands for, following first elements of arrays
fn representative_object(value: &JsonValue) -> Option<&JsonObject> {
    match value {
        JsonValue::Object(object) => Some(object),
        JsonValue::Array(_) => value.first_element().and_then(representative_object),
        _ => None,
    }
}

#[cfg(test)]
#[path = "inference/inference_tests.rs"]
mod inference_tests;
