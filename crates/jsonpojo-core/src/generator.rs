//! Top-level entry point: parse → infer → render.

use crate::config::GeneratorConfig;
use crate::error::GenerateResult;
use crate::inference::Inferrer;
use crate::json::{JsonParser, SerdeJsonParser};
use crate::model::ClassModel;
use crate::naming::{NamingStrategies, NamingStrategy};
use crate::style::ClassStyle;
use std::fmt;
use std::sync::Arc;

/// Turns a finished class tree into source text
pub trait Renderer: Send + Sync {
    fn render(&self, package: &str, model: &ClassModel) -> GenerateResult<String>;
}

/// Generates source code for the class tree inferred from a JSON sample.
///
/// A generator holds only immutable collaborators and can be shared across
/// threads; every call is independent.
#[derive(Clone)]
pub struct Generator {
    naming: NamingStrategies,
    parser: Arc<dyn JsonParser>,
    renderer: Arc<dyn Renderer>,
    default_style: ClassStyle,
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("naming", &self.naming)
            .field("default_style", &self.default_style)
            .finish_non_exhaustive()
    }
}

impl Generator {
    pub fn builder(renderer: impl Renderer + 'static) -> GeneratorBuilder {
        GeneratorBuilder::new(renderer)
    }

    /// Generate with the default style
    pub fn generate(&self, package: &str, class_name: &str, json: &str) -> GenerateResult<String> {
        self.generate_with_style(package, class_name, json, self.default_style)
    }

    pub fn generate_with_style(
        &self,
        package: &str,
        class_name: &str,
        json: &str,
        style: ClassStyle,
    ) -> GenerateResult<String> {
        let model = self.infer(class_name, json, style)?;
        let source = self.renderer.render(package, &model)?;
        tracing::info!(
            package,
            class = class_name,
            %style,
            classes = model.walk().len(),
            "generated source"
        );
        Ok(source)
    }

    /// Parse and infer without rendering
    pub fn infer(&self, class_name: &str, json: &str, style: ClassStyle) -> GenerateResult<ClassModel> {
        let value = self.parser.parse(json)?;
        Inferrer::new(&self.naming).infer(class_name, &value, style)
    }

    pub fn default_style(&self) -> ClassStyle {
        self.default_style
    }

    pub fn naming(&self) -> &NamingStrategies {
        &self.naming
    }
}

/// Builder for [`Generator`]
pub struct GeneratorBuilder {
    naming: NamingStrategies,
    parser: Arc<dyn JsonParser>,
    renderer: Arc<dyn Renderer>,
    default_style: ClassStyle,
}

impl GeneratorBuilder {
    pub fn new(renderer: impl Renderer + 'static) -> Self {
        Self {
            naming: NamingStrategies::default(),
            parser: Arc::new(SerdeJsonParser),
            renderer: Arc::new(renderer),
            default_style: ClassStyle::default(),
        }
    }

    /// Apply style and naming cases from configuration
    pub fn config(mut self, config: &GeneratorConfig) -> Self {
        self.naming = NamingStrategies::from_config(&config.naming);
        self.default_style = config.style;
        self
    }

    pub fn naming(mut self, naming: NamingStrategies) -> Self {
        self.naming = naming;
        self
    }

    pub fn class_naming(mut self, strategy: impl NamingStrategy + 'static) -> Self {
        self.naming = self.naming.with_class(strategy);
        self
    }

    pub fn field_naming(mut self, strategy: impl NamingStrategy + 'static) -> Self {
        self.naming = self.naming.with_field(strategy);
        self
    }

    pub fn method_naming(mut self, strategy: impl NamingStrategy + 'static) -> Self {
        self.naming = self.naming.with_method(strategy);
        self
    }

    pub fn parameter_naming(mut self, strategy: impl NamingStrategy + 'static) -> Self {
        self.naming = self.naming.with_parameter(strategy);
        self
    }

    pub fn parser(mut self, parser: impl JsonParser + 'static) -> Self {
        self.parser = Arc::new(parser);
        self
    }

    pub fn default_style(mut self, style: ClassStyle) -> Self {
        self.default_style = style;
        self
    }

    pub fn build(self) -> Generator {
        Generator {
            naming: self.naming,
            parser: self.parser,
            renderer: self.renderer,
            default_style: self.default_style,
        }
    }
}
