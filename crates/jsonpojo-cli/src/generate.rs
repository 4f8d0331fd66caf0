//! Generate command implementation

use crate::config;
use anyhow::{Context, Result};
use clap::Args;
use jsonpojo::{ClassStyle, GeneratorConfig, NamingCase, package_path};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// JSON sample file, or `-` to read stdin
    #[arg(short, long)]
    pub input: String,

    /// Root class name
    #[arg(short = 'c', long = "class")]
    pub class_name: String,

    /// Java package (default: none)
    #[arg(short, long, default_value = "")]
    pub package: String,

    /// Output root directory; the file lands in its package directory.
    /// Prints to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Class style (model, bean, builder, gson, jackson)
    #[arg(long)]
    pub style: Option<ClassStyle>,

    #[arg(long)]
    pub class_case: Option<NamingCase>,

    #[arg(long)]
    pub field_case: Option<NamingCase>,

    #[arg(long)]
    pub method_case: Option<NamingCase>,

    #[arg(long)]
    pub parameter_case: Option<NamingCase>,

    /// Path to jsonpojo.toml (default: ./jsonpojo.toml when present)
    #[arg(long)]
    pub config: Option<String>,
}

impl GenerateArgs {
    /// Command-line flags win over file values
    fn apply_overrides(&self, config: &mut GeneratorConfig) {
        if let Some(style) = self.style {
            config.style = style;
        }
        let naming = &mut config.naming;
        if let Some(case) = self.class_case {
            naming.class_case = case;
        }
        if let Some(case) = self.field_case {
            naming.field_case = case;
        }
        if let Some(case) = self.method_case {
            naming.method_case = case;
        }
        if let Some(case) = self.parameter_case {
            naming.parameter_case = case;
        }
    }
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let mut config = config::resolve(args.config.as_deref())?;
    args.apply_overrides(&mut config);

    let json = read_input(&args.input)?;
    let source = render(&config, &args.package, &args.class_name, &json)
        .with_context(|| format!("Failed to generate {} from {}", args.class_name, args.input))?;

    match &args.output {
        Some(dir) => {
            let path = write_source(dir, &args.package, &args.class_name, &source)?;
            println!("Wrote {}", path.display());
        }
        None => print!("{source}"),
    }

    Ok(())
}

fn render(config: &GeneratorConfig, package: &str, class_name: &str, json: &str) -> Result<String> {
    let generator = jsonpojo::generator().config(config).build();
    tracing::debug!(style = %config.style, package, class = class_name, "generating");
    Ok(generator.generate(package, class_name, json)?)
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read JSON from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read input: {input:?}"))
    }
}

/// `<dir>/<package path>/<ClassName>.java`
pub fn output_path(dir: &Path, package: &str, class_name: &str) -> PathBuf {
    dir.join(package_path(package)).join(format!("{class_name}.java"))
}

fn write_source(dir: &Path, package: &str, class_name: &str, source: &str) -> Result<PathBuf> {
    let path = output_path(dir, package, class_name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {parent:?}"))?;
    }

    fs::write(&path, source).with_context(|| format!("Failed to write {path:?}"))?;
    tracing::info!(path = %path.display(), bytes = source.len(), "wrote java source");

    Ok(path)
}
