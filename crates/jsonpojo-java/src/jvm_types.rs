//! JVM type mappings for inferred types.
//!
//! | TypeRef | Java | In generics |
//! |---------|------|-------------|
//! | `Boolean` | `boolean` | `Boolean` |
//! | `Integer` | `long` | `Long` |
//! | `Decimal` | `double` | `Double` |
//! | `String` | `String` | `String` |
//! | `Object` | `Object` | `Object` |
//! | `Class(n)` | `n` | `n` |
//! | `List(T)` | `List<boxed T>` | same |

use jsonpojo_core::{ScalarKind, TypeRef};

/// A JVM type with both its declared and boxed forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JvmType {
    /// The primitive type name (e.g., "long", "boolean") or reference type name.
    pub primitive: String,
    /// The boxed type name used in generic arguments (e.g., "Long").
    pub boxed: String,
    pub is_primitive: bool,
}

impl JvmType {
    /// A reference type: same name in both positions.
    pub fn reference(name: &str) -> Self {
        Self {
            primitive: name.to_string(),
            boxed: name.to_string(),
            is_primitive: false,
        }
    }

    pub fn primitive(primitive: &str, boxed: &str) -> Self {
        Self {
            primitive: primitive.to_string(),
            boxed: boxed.to_string(),
            is_primitive: true,
        }
    }

    /// Type used for fields, parameters, and return values
    pub fn java_type(&self) -> &str {
        &self.primitive
    }
}

/// Map an inferred type to its JVM type.
pub fn map_type(ty: &TypeRef) -> JvmType {
    match ty {
        TypeRef::Scalar(ScalarKind::Boolean) => JvmType::primitive("boolean", "Boolean"),
        TypeRef::Scalar(ScalarKind::Integer) => JvmType::primitive("long", "Long"),
        TypeRef::Scalar(ScalarKind::Decimal) => JvmType::primitive("double", "Double"),
        TypeRef::Scalar(ScalarKind::String) => JvmType::reference("String"),
        TypeRef::Scalar(ScalarKind::Object) => JvmType::reference("Object"),
        TypeRef::Class(name) => JvmType::reference(name),
        TypeRef::List(inner) => {
            // List elements must always be boxed
            JvmType::reference(&format!("List<{}>", box_type(inner)))
        }
    }
}

/// The boxed Java spelling of a type, as required inside generics.
pub fn box_type(ty: &TypeRef) -> String {
    map_type(ty).boxed
}
