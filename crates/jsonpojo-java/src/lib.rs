//! jsonpojo-java - Java source rendering for inferred class models
//!
//! [`JavaRenderer`] implements the core [`Renderer`](jsonpojo_core::Renderer)
//! seam and produces one compilation unit per class tree: the root class with
//! every inferred class nested inside it.
//!
//! # Example
//!
//! ```
//! use jsonpojo_core::Generator;
//! use jsonpojo_java::JavaRenderer;
//!
//! let generator = Generator::builder(JavaRenderer::new()).build();
//! let source = generator.generate("com.example", "User", r#"{"id": 1}"#).unwrap();
//!
//! assert!(source.starts_with("package com.example;"));
//! assert!(source.contains("private final double id;"));
//! ```

mod jvm_types;
mod package;
mod renderer;

pub use jvm_types::{JvmType, box_type, map_type};
pub use package::{package_path, validate_package};
pub use renderer::JavaRenderer;
