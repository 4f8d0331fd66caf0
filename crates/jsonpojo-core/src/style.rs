//! Class styles and the member rules each one implies.
//!
//! A [`ClassStyle`] never changes the inferred type tree. It only decides
//! which members are synthesized from each `(key, type)` pair, as described by
//! the style's [`StyleRules`].

use crate::types::Modifier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of class to generate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassStyle {
    /// Immutable value class: final fields, all-args constructor, getters
    #[default]
    Model,
    /// Mutable bean: no-args constructor, getters and setters
    Bean,
    /// Immutable class constructed through a nested fluent `Builder`
    Builder,
    /// Model with `@SerializedName` on every field
    Gson,
    /// Model with a `@JsonCreator` constructor and `@JsonProperty` parameters
    Jackson,
}

/// How a class is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorKind {
    /// Public constructor without parameters
    NoArgs,
    /// Public constructor taking every property in declaration order
    AllArgs,
    /// Private constructor copying from the nested builder
    FromBuilder,
}

/// Serialization annotations attached to members
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationKind {
    Gson,
    Jackson,
}

impl AnnotationKind {
    /// Annotation types the rendered source refers to by simple name
    pub fn type_names(self) -> &'static [&'static str] {
        match self {
            AnnotationKind::Gson => &["SerializedName"],
            AnnotationKind::Jackson => &["JsonCreator", "JsonProperty"],
        }
    }
}

/// Member synthesis rules for a style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRules {
    pub field_modifiers: Vec<Modifier>,
    pub constructor: ConstructorKind,
    pub getters: bool,
    pub setters: bool,
    pub builder: bool,
    pub annotations: Option<AnnotationKind>,
}

impl ClassStyle {
    pub const ALL: [ClassStyle; 5] = [
        ClassStyle::Model,
        ClassStyle::Bean,
        ClassStyle::Builder,
        ClassStyle::Gson,
        ClassStyle::Jackson,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ClassStyle::Model => "model",
            ClassStyle::Bean => "bean",
            ClassStyle::Builder => "builder",
            ClassStyle::Gson => "gson",
            ClassStyle::Jackson => "jackson",
        }
    }

    pub fn rules(self) -> StyleRules {
        let immutable = vec![Modifier::Private, Modifier::Final];
        match self {
            ClassStyle::Model => StyleRules {
                field_modifiers: immutable,
                constructor: ConstructorKind::AllArgs,
                getters: true,
                setters: false,
                builder: false,
                annotations: None,
            },
            ClassStyle::Bean => StyleRules {
                field_modifiers: vec![Modifier::Private],
                constructor: ConstructorKind::NoArgs,
                getters: true,
                setters: true,
                builder: false,
                annotations: None,
            },
            ClassStyle::Builder => StyleRules {
                field_modifiers: immutable,
                constructor: ConstructorKind::FromBuilder,
                getters: true,
                setters: false,
                builder: true,
                annotations: None,
            },
            ClassStyle::Gson => StyleRules {
                field_modifiers: immutable,
                constructor: ConstructorKind::AllArgs,
                getters: true,
                setters: false,
                builder: false,
                annotations: Some(AnnotationKind::Gson),
            },
            ClassStyle::Jackson => StyleRules {
                field_modifiers: immutable,
                constructor: ConstructorKind::AllArgs,
                getters: true,
                setters: false,
                builder: false,
                annotations: Some(AnnotationKind::Jackson),
            },
        }
    }
}

impl fmt::Display for ClassStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ClassStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == normalized)
            .ok_or_else(|| {
                let valid: Vec<&str> = ClassStyle::ALL.iter().map(|s| s.as_str()).collect();
                format!("unknown class style '{s}', expected one of: {}", valid.join(", "))
            })
    }
}
