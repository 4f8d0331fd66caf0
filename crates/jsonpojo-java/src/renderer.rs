//! Java source generation from class models.
//!
//! The root class becomes a top-level class; every inferred class is nested
//! inside its parent. Within a class, members are written in a fixed order:
//! fields, constructor, accessors, nested classes, builder class.

use crate::jvm_types::map_type;
use crate::package::validate_package;
use jsonpojo_core::builder::BUILDER_CLASS_NAME;
use jsonpojo_core::{
    AnnotationKind, ClassModel, ConstructorKind, GenerateResult, Modifier, Property, Renderer,
};
use std::collections::BTreeSet;

const INDENT: &str = "    ";

const JSON_CREATOR_IMPORT: &str = "com.fasterxml.jackson.annotation.JsonCreator";
const JSON_PROPERTY_IMPORT: &str = "com.fasterxml.jackson.annotation.JsonProperty";
const SERIALIZED_NAME_IMPORT: &str = "com.google.gson.annotations.SerializedName";
const LIST_IMPORT: &str = "java.util.List";

/// Renders a class tree as a single Java compilation unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaRenderer;

impl JavaRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for JavaRenderer {
    fn render(&self, package: &str, model: &ClassModel) -> GenerateResult<String> {
        validate_package(package)?;

        let mut code = String::new();

        // Package declaration
        if !package.is_empty() {
            code.push_str(&format!("package {package};\n\n"));
        }

        // Imports
        let imports = collect_imports(model);
        if !imports.is_empty() {
            for import in &imports {
                code.push_str(&format!("import {import};\n"));
            }
            code.push('\n');
        }

        let mut writer = SourceWriter { code, depth: 0 };
        write_class(&mut writer, model);

        tracing::debug!(
            package,
            class = %model.name,
            imports = imports.len(),
            "rendered java source"
        );
        Ok(writer.code)
    }
}

/// Indentation-aware line writer
struct SourceWriter {
    code: String,
    depth: usize,
}

impl SourceWriter {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.code.push_str(INDENT);
        }
        self.code.push_str(text);
        self.code.push('\n');
    }

    fn open(&mut self, header: &str) {
        self.line(&format!("{header} {{"));
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    /// Blank line between members, but not directly after an opening brace
    fn separate(&mut self) {
        if !self.code.ends_with("{\n") {
            self.code.push('\n');
        }
    }
}

fn collect_imports(model: &ClassModel) -> BTreeSet<&'static str> {
    let mut imports = BTreeSet::new();

    for class in model.walk() {
        let has_properties = !class.properties.is_empty();
        match class.rules().annotations {
            Some(AnnotationKind::Gson) if has_properties => {
                imports.insert(SERIALIZED_NAME_IMPORT);
            }
            Some(AnnotationKind::Jackson) => {
                imports.insert(JSON_CREATOR_IMPORT);
                if has_properties {
                    imports.insert(JSON_PROPERTY_IMPORT);
                }
            }
            _ => {}
        }
    }

    if model.contains_list() {
        imports.insert(LIST_IMPORT);
    }

    imports
}

fn write_class(w: &mut SourceWriter, class: &ClassModel) {
    let rules = class.rules();

    w.open(&declaration(&class.modifiers, &format!("class {}", class.name)));

    // Fields
    if !class.properties.is_empty() {
        w.separate();
        for property in &class.properties {
            if rules.annotations == Some(AnnotationKind::Gson) {
                w.line(&format!("@SerializedName({})", string_literal(&property.key)));
            }
            w.line(&format!(
                "{} {};",
                declaration(&rules.field_modifiers, &java_type(property)),
                property.field
            ));
        }
    }

    // Constructor
    w.separate();
    match rules.constructor {
        ConstructorKind::NoArgs => {
            w.open(&format!("public {}()", class.name));
            w.close();
        }
        ConstructorKind::AllArgs => {
            let jackson = rules.annotations == Some(AnnotationKind::Jackson);
            if jackson {
                w.line("@JsonCreator");
            }
            let params: Vec<String> = class
                .properties
                .iter()
                .map(|p| {
                    let annotation = if jackson {
                        format!("@JsonProperty({}) ", string_literal(&p.key))
                    } else {
                        String::new()
                    };
                    format!("{annotation}{} {}", java_type(p), p.parameter)
                })
                .collect();
            w.open(&format!("public {}({})", class.name, params.join(", ")));
            for property in &class.properties {
                w.line(&format!("this.{} = {};", property.field, property.parameter));
            }
            w.close();
        }
        ConstructorKind::FromBuilder => {
            w.open(&format!("private {}({BUILDER_CLASS_NAME} builder)", class.name));
            for property in &class.properties {
                w.line(&format!("this.{} = builder.{};", property.field, property.field));
            }
            w.close();
        }
    }

    // Getters and setters
    for property in &class.properties {
        let ty = java_type(property);

        if let Some(getter) = &property.getter {
            w.separate();
            w.open(&format!("public {ty} {getter}()"));
            w.line(&format!("return {};", property.field));
            w.close();
        }

        if let Some(setter) = &property.setter {
            w.separate();
            w.open(&format!("public void {setter}({ty} {})", property.parameter));
            w.line(&format!("this.{} = {};", property.field, property.parameter));
            w.close();
        }
    }

    for inner in &class.inner_types {
        w.separate();
        write_class(w, inner);
    }

    if rules.builder {
        w.separate();
        write_builder_class(w, class);
    }

    w.close();
}

fn write_builder_class(w: &mut SourceWriter, class: &ClassModel) {
    w.open(&format!("public static final class {BUILDER_CLASS_NAME}"));

    if !class.properties.is_empty() {
        w.separate();
        for property in &class.properties {
            w.line(&format!("private {} {};", java_type(property), property.field));
        }
    }

    for property in &class.properties {
        if let Some(method) = &property.builder_method {
            w.separate();
            w.open(&format!(
                "public {BUILDER_CLASS_NAME} {method}({} {})",
                java_type(property),
                property.parameter
            ));
            w.line(&format!("this.{} = {};", property.field, property.parameter));
            w.line("return this;");
            w.close();
        }
    }

    w.separate();
    w.open(&format!("public {} build()", class.name));
    w.line(&format!("return new {}(this);", class.name));
    w.close();

    w.close();
}

fn java_type(property: &Property) -> String {
    map_type(&property.ty).primitive
}

/// Modifier keywords followed by the rest of a declaration
fn declaration<'m>(modifiers: impl IntoIterator<Item = &'m Modifier>, rest: &str) -> String {
    let mut parts: Vec<&str> = modifiers.into_iter().map(|m| m.keyword()).collect();
    parts.push(rest);
    parts.join(" ")
}

/// Quote a JSON key as a Java string literal.
///
/// Control characters use octal escapes; `\u` escapes are translated before
/// lexing and would break the literal.
fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() && (c as u32) < 0x100 => {
                out.push_str(&format!("\\{:03o}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
