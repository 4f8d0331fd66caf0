//! Inferred types and class modifiers.
//!
//! - [`TypeRef`]: scalar kind, named class reference, or `List<T>`
//! - [`Modifier`]: declaration modifiers, ordered the way Java declares them

use crate::json::JsonValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar kinds a JSON leaf can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScalarKind {
    Boolean,
    /// Never produced by inference; available to custom strategies and renderers
    Integer,
    Decimal,
    String,
    /// Nullable-object sentinel used for `null` and for arrays with no sample
    Object,
}

/// A type produced by inference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeRef {
    Scalar(ScalarKind),
    /// A class by simple name, resolved within the generated unit
    Class(String),
    List(Box<TypeRef>),
}

impl TypeRef {
    pub const OBJECT: TypeRef = TypeRef::Scalar(ScalarKind::Object);
    pub const BOOLEAN: TypeRef = TypeRef::Scalar(ScalarKind::Boolean);
    pub const DECIMAL: TypeRef = TypeRef::Scalar(ScalarKind::Decimal);
    pub const STRING: TypeRef = TypeRef::Scalar(ScalarKind::String);

    pub fn class(name: impl Into<String>) -> Self {
        TypeRef::Class(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    /// Number of `List<>` layers wrapping the innermost type
    pub fn list_depth(&self) -> usize {
        match self {
            TypeRef::List(inner) => 1 + inner.list_depth(),
            _ => 0,
        }
    }

    /// The type with every `List<>` layer removed
    pub fn innermost(&self) -> &TypeRef {
        match self {
            TypeRef::List(inner) => inner.innermost(),
            other => other,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, TypeRef::List(_))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, TypeRef::Scalar(ScalarKind::Boolean))
    }
}

/// Maps a JSON leaf to its scalar type; `None` for arrays and objects.
///
/// Numbers always widen to [`ScalarKind::Decimal`]: a single sample cannot tell
/// an integral field from a fractional one, and widening keeps the result stable
/// when later samples disagree.
pub fn scalar_type_of(value: &JsonValue) -> Option<TypeRef> {
    match value {
        JsonValue::Null => Some(TypeRef::OBJECT),
        JsonValue::Boolean(_) => Some(TypeRef::BOOLEAN),
        JsonValue::Number(_) => Some(TypeRef::DECIMAL),
        JsonValue::String(_) => Some(TypeRef::STRING),
        JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::Boolean => write!(f, "Boolean"),
            ScalarKind::Integer => write!(f, "Integer"),
            ScalarKind::Decimal => write!(f, "Decimal"),
            ScalarKind::String => write!(f, "String"),
            ScalarKind::Object => write!(f, "Object"),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Scalar(kind) => write!(f, "{kind}"),
            TypeRef::Class(name) => write!(f, "{name}"),
            TypeRef::List(inner) => write!(f, "List<{inner}>"),
        }
    }
}

/// Declaration modifiers.
///
/// Variant order is Java's canonical modifier order, so iterating a
/// `BTreeSet<Modifier>` yields `public static final`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
}

impl Modifier {
    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
            Modifier::Final => "final",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
