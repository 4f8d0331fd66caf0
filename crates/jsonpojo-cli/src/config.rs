//! jsonpojo.toml loading, validation, and the `check`/`init` commands

use anyhow::{Context, Result};
use jsonpojo::GeneratorConfig;
use std::fs;
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "jsonpojo.toml";

const TEMPLATE: &str = include_str!("../templates/jsonpojo.toml");

const TOP_LEVEL_KEYS: &[&str] = &["style", "naming"];
const NAMING_KEYS: &[&str] = &["class_case", "field_case", "method_case", "parameter_case"];

/// Load configuration from a file
pub fn from_file(path: impl AsRef<Path>) -> Result<GeneratorConfig> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

    from_str(&content)
}

/// Parse and validate configuration from TOML text
pub fn from_str(content: &str) -> Result<GeneratorConfig> {
    validate(content)?;
    toml::from_str(content).context("Failed to parse config")
}

/// Reject keys the generator would silently ignore
pub fn validate(content: &str) -> Result<()> {
    let table: toml::Table = toml::from_str(content).context("Failed to parse config")?;

    for key in table.keys() {
        if !TOP_LEVEL_KEYS.contains(&key.as_str()) {
            anyhow::bail!("Unknown config key: {}", key);
        }
    }

    if let Some(naming) = table.get("naming") {
        let naming = naming
            .as_table()
            .context("[naming] must be a table")?;
        for key in naming.keys() {
            if !NAMING_KEYS.contains(&key.as_str()) {
                anyhow::bail!("Unknown key in [naming]: {}", key);
            }
        }
    }

    Ok(())
}

/// Explicit path, else `./jsonpojo.toml` when present, else defaults
pub fn resolve(explicit: Option<&str>) -> Result<GeneratorConfig> {
    match explicit {
        Some(path) => from_file(path),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => from_file(DEFAULT_CONFIG_FILE),
        None => Ok(GeneratorConfig::default()),
    }
}

/// Check command implementation
pub fn check(config_path: Option<String>) -> Result<()> {
    let path = config_path.unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

    println!("Checking config: {}", path);

    let config = from_file(&path)?;

    println!("✓ Style: {}", config.style);
    println!("✓ Class case: {}", config.naming.class_case);
    println!("✓ Field case: {}", config.naming.field_case);
    println!("✓ Method case: {}", config.naming.method_case);
    println!("✓ Parameter case: {}", config.naming.parameter_case);
    println!("\nConfig is valid!");

    Ok(())
}

/// Init command implementation
pub fn init(path: Option<String>, force: bool) -> Result<()> {
    let path = path.unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
    write_template(Path::new(&path), force)?;

    println!("Created {}", path);

    Ok(())
}

fn write_template(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {parent:?}"))?;
    }

    fs::write(path, TEMPLATE).with_context(|| format!("Failed to write {path:?}"))?;
    tracing::info!(path = %path.display(), "wrote config template");

    Ok(())
}
