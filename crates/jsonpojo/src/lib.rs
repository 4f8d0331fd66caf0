//! # jsonpojo
//!
//! Infers a typed class hierarchy from one JSON sample and renders it as Java
//! source: one class per JSON object, nested classes for nested objects, and
//! `List<T>` for arrays, with identifiers derived by pluggable naming
//! strategies.
//!
//! ## Quick Start
//!
//! ```
//! use jsonpojo::ClassStyle;
//!
//! let source = jsonpojo::generate(
//!     "com.example",
//!     "User",
//!     r#"{"id": 1, "tags": ["a"], "address": {"zip_code": "x"}}"#,
//!     ClassStyle::Model,
//! )
//! .unwrap();
//!
//! assert!(source.contains("public class User {"));
//! assert!(source.contains("private final List<String> tags;"));
//! assert!(source.contains("public static class Address {"));
//! ```
//!
//! ## Custom naming
//!
//! ```
//! use jsonpojo::prelude::*;
//!
//! let generator = jsonpojo::generator()
//!     .class_naming(|raw: &str, _ty: &TypeRef| {
//!         Ok::<_, GenerateError>(format!("{}Dto", NamingCase::UpperCamel.apply(raw)))
//!     })
//!     .build();
//!
//! let source = generator.generate("", "Order", r#"{"customer": {"id": 7}}"#).unwrap();
//! assert!(source.contains("public static class CustomerDto {"));
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`jsonpojo_core`] - JSON model, inference, naming, styles, and the `Renderer` seam
//! - [`jsonpojo_java`] - The Java renderer

// Re-export core types
pub use jsonpojo_core::{
    AnnotationKind, ClassBuilder, ClassModel, ClassStyle, ConstructorKind, DefaultNamingStrategy,
    GenerateError, GenerateResult, Generator, GeneratorBuilder, GeneratorConfig, Inferrer,
    JsonKind, JsonObject, JsonParser, JsonValue, Modifier, NamingCase, NamingConfig, NamingRole,
    NamingStrategies, NamingStrategy, Property, Renderer, ScalarKind, SerdeJsonParser,
    StyleRules, TypeRef, infer, naming, scalar_type_of,
};

// Re-export the Java renderer
pub use jsonpojo_java::{JavaRenderer, package_path, validate_package};

/// Generate Java source for `json` with the default naming strategies.
///
/// The result is a single compilation unit: the `class_name` class in
/// `package` (empty for the default package) with every inferred class nested
/// inside it.
pub fn generate(
    package: &str,
    class_name: &str,
    json: &str,
    style: ClassStyle,
) -> GenerateResult<String> {
    generator().build().generate_with_style(package, class_name, json, style)
}

/// A [`GeneratorBuilder`] wired to the [`JavaRenderer`]
pub fn generator() -> GeneratorBuilder {
    Generator::builder(JavaRenderer::new())
}

/// Prelude module for convenient imports.
///
/// Use `use jsonpojo::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        ClassModel, ClassStyle, GenerateError, GenerateResult, Generator, JavaRenderer,
        NamingCase, NamingStrategies, NamingStrategy, Renderer, TypeRef,
    };
}
