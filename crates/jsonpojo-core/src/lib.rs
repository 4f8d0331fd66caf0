//! jsonpojo-core - Class hierarchy inference from JSON samples
//!
//! This crate provides everything between parsed JSON and rendered source:
//! - [`JsonValue`] and the [`JsonParser`] seam
//! - [`NamingStrategies`] for class, field, method, and parameter names
//! - [`Inferrer`], which turns a JSON document into a [`ClassModel`] tree
//! - [`ClassBuilder`] and [`ClassStyle`] for style-specific members
//! - [`Generator`], composing parse → infer → [`Renderer`]
//! - [`GenerateError`] for error handling

pub mod builder;
mod config;
mod error;
mod generator;
pub mod inference;
mod json;
mod model;
pub mod naming;
mod style;
mod types;

pub use builder::ClassBuilder;
pub use config::{GeneratorConfig, NamingConfig};
pub use error::{GenerateError, GenerateResult};
pub use generator::{Generator, GeneratorBuilder, Renderer};
pub use inference::{Inferrer, infer};
pub use json::{JsonKind, JsonObject, JsonParser, JsonValue, SerdeJsonParser};
pub use model::{ClassModel, Property};
pub use naming::{
    DefaultNamingStrategy, NamingCase, NamingRole, NamingStrategies, NamingStrategy,
};
pub use style::{AnnotationKind, ClassStyle, ConstructorKind, StyleRules};
pub use types::{Modifier, ScalarKind, TypeRef, scalar_type_of};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClassModel, ClassStyle, GenerateError, GenerateResult, Generator, JsonValue, NamingCase,
        NamingStrategies, NamingStrategy, Renderer, TypeRef,
    };
}
