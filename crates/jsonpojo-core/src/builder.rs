//! Mutable accumulator for one class under construction.
//!
//! The inference engine creates one [`ClassBuilder`] per object it visits.
//! Member identifiers are derived here, through the field, method, and
//! parameter strategies, according to the style's rules.

use crate::error::{GenerateError, GenerateResult};
use crate::model::{ClassModel, Property};
use crate::naming::{NamingRole, NamingStrategies, split_words};
use crate::style::{ClassStyle, StyleRules};
use crate::types::{Modifier, TypeRef};
use std::collections::BTreeSet;

/// Name of the nested builder class synthesized by [`ClassStyle::Builder`]
pub const BUILDER_CLASS_NAME: &str = "Builder";

/// Field, getter, setter, and builder method
const MEMBERS_PER_PROPERTY: usize = 4;

/// Types rendered by simple name; a nested class with one of these names
/// would shadow them
pub const RESERVED_TYPE_NAMES: &[&str] = &["Boolean", "Double", "List", "Long", "Object", "String"];

/// True when a class named `name` would shadow a type the rendered source
/// uses under `rules`: the fixed [`RESERVED_TYPE_NAMES`], the style's
/// annotation types, and the synthesized builder class
pub fn is_reserved_type_name(name: &str, rules: &StyleRules) -> bool {
    RESERVED_TYPE_NAMES.contains(&name)
        || (rules.builder && name == BUILDER_CLASS_NAME)
        || rules
            .annotations
            .is_some_and(|kind| kind.type_names().contains(&name))
}

/// Accumulates modifiers, properties, and nested classes for one class
pub struct ClassBuilder<'a> {
    name: String,
    style: ClassStyle,
    rules: StyleRules,
    naming: &'a NamingStrategies,
    modifiers: BTreeSet<Modifier>,
    properties: Vec<Property>,
    inner_types: Vec<ClassModel>,
}

impl<'a> ClassBuilder<'a> {
    pub fn new(name: impl Into<String>, style: ClassStyle, naming: &'a NamingStrategies) -> Self {
        Self {
            name: name.into(),
            style,
            rules: style.rules(),
            naming,
            modifiers: BTreeSet::new(),
            properties: Vec::new(),
            inner_types: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_modifiers(&mut self, modifiers: impl IntoIterator<Item = Modifier>) -> &mut Self {
        self.modifiers.extend(modifiers);
        self
    }

    /// Add a property, deriving its member identifiers.
    ///
    /// When any derived member is already used by an earlier property
    /// (fields of `user_id` and `userId`, getters of `is_active` and `active`),
    /// the strategies are re-run on `key_2`, `key_3`, ... until every member
    /// comes out free.
    pub fn add_property(&mut self, key: &str, ty: TypeRef) -> GenerateResult<&mut Self> {
        let mut property = self.derive_property(key, key, &ty)?;

        let mut attempts = 0;
        let mut suffix = 2;
        while self.is_member_taken(&property) {
            // A strategy that ignores the suffix would never yield a free name
            if attempts > MEMBERS_PER_PROPERTY * self.properties.len() {
                return Err(GenerateError::invalid_identifier(key, NamingRole::Field));
            }
            let disambiguated = format!("{key}_{suffix}");
            property = self.derive_property(key, &disambiguated, &ty)?;
            attempts += 1;
            suffix += 1;
        }

        tracing::trace!(class = %self.name, key, ty = %ty, field = %property.field, "property added");
        self.properties.push(property);
        Ok(self)
    }

    pub fn add_inner_type(&mut self, inner: ClassModel) -> &mut Self {
        self.inner_types.push(inner);
        self
    }

    pub fn inner_type_count(&self) -> usize {
        self.inner_types.len()
    }

    /// True when `name` cannot be used for a new nested class of this class
    pub fn is_type_name_taken(&self, name: &str) -> bool {
        name == self.name
            || is_reserved_type_name(name, &self.rules)
            || self.inner_types.iter().any(|inner| inner.name == name)
    }

    /// Number of names [`is_reserved_type_name`] rejects for this style
    pub fn reserved_type_count(&self) -> usize {
        RESERVED_TYPE_NAMES.len()
            + usize::from(self.rules.builder)
            + self.rules.annotations.map_or(0, |kind| kind.type_names().len())
    }

    /// Snapshot the accumulated state; building twice yields equal models
    pub fn build(&self) -> ClassModel {
        ClassModel {
            name: self.name.clone(),
            modifiers: self.modifiers.clone(),
            style: self.style,
            properties: self.properties.clone(),
            inner_types: self.inner_types.clone(),
        }
    }

    /// Fields share one namespace; getters and setters share another, and
    /// builder methods live on the nested builder
    fn is_member_taken(&self, candidate: &Property) -> bool {
        self.properties.iter().any(|existing| {
            existing.field == candidate.field
                || accessor_names(candidate)
                    .any(|name| accessor_names(existing).any(|other| other == name))
                || (candidate.builder_method.is_some()
                    && existing.builder_method == candidate.builder_method)
        })
    }

    fn derive_property(&self, key: &str, raw: &str, ty: &TypeRef) -> GenerateResult<Property> {
        let naming = self.naming;

        let field = naming.field().convert(raw, ty)?;
        let parameter = naming.parameter().convert(raw, ty)?;

        let getter = if self.rules.getters {
            Some(naming.method().convert(&getter_source(raw, ty), ty)?)
        } else {
            None
        };
        let setter = if self.rules.setters {
            Some(naming.method().convert(&format!("set {raw}"), ty)?)
        } else {
            None
        };
        let builder_method = if self.rules.builder {
            Some(naming.method().convert(raw, ty)?)
        } else {
            None
        };

        Ok(Property {
            key: key.to_string(),
            ty: ty.clone(),
            field,
            parameter,
            getter,
            setter,
            builder_method,
        })
    }
}

fn accessor_names(property: &Property) -> impl Iterator<Item = &str> {
    property
        .getter
        .as_deref()
        .into_iter()
        .chain(property.setter.as_deref())
}

/// Raw name handed to the method strategy for a getter.
///
/// Booleans use an `is` prefix unless the key already starts with the word
/// `is`, so `is_active` becomes `isActive` rather than `isIsActive`.
fn getter_source(raw: &str, ty: &TypeRef) -> String {
    if ty.is_boolean() {
        let starts_with_is = split_words(raw)
            .first()
            .is_some_and(|word| word.eq_ignore_ascii_case("is"));
        if starts_with_is {
            raw.to_string()
        } else {
            format!("is {raw}")
        }
    } else {
        format!("get {raw}")
    }
}
