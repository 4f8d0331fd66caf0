//! Inferred class descriptions.
//!
//! A [`ClassModel`] is a finished, immutable node of the inferred tree. It owns
//! its nested classes exclusively; JSON is acyclic, so the tree is too.
//!
//! # Structure
//!
//! - [`ClassModel`]: name, modifiers, style, properties, nested classes
//! - [`Property`]: one JSON key with its inferred type and the member
//!   identifiers derived for the class style

use crate::style::{ClassStyle, StyleRules};
use crate::types::{Modifier, TypeRef};
use std::collections::BTreeSet;

/// One property of an inferred class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Raw JSON key, kept for serialization annotations
    pub key: String,

    pub ty: TypeRef,

    /// Field identifier
    pub field: String,

    /// Constructor and setter parameter identifier
    pub parameter: String,

    pub getter: Option<String>,

    pub setter: Option<String>,

    /// Fluent method on the nested builder
    pub builder_method: Option<String>,
}

/// An inferred class and its nested classes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassModel {
    pub name: String,
    pub modifiers: BTreeSet<Modifier>,
    pub style: ClassStyle,
    /// In first-seen key order of the source object
    pub properties: Vec<Property>,
    pub inner_types: Vec<ClassModel>,
}

impl ClassModel {
    pub fn rules(&self) -> StyleRules {
        self.style.rules()
    }

    pub fn find_property(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.key == key)
    }

    pub fn find_inner_type(&self, name: &str) -> Option<&ClassModel> {
        self.inner_types.iter().find(|c| c.name == name)
    }

    /// Raw keys in declaration order
    pub fn keys(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.key.as_str()).collect()
    }

    /// This class and every nested class, parents before children
    pub fn walk(&self) -> Vec<&ClassModel> {
        let mut classes = vec![self];
        for inner in &self.inner_types {
            classes.extend(inner.walk());
        }
        classes
    }

    /// True when any property anywhere in the tree is a list
    pub fn contains_list(&self) -> bool {
        self.walk()
            .iter()
            .any(|class| class.properties.iter().any(|p| p.ty.is_list()))
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.contains(&Modifier::Static)
    }
}
