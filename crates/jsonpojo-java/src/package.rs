//! Package name validation.

use jsonpojo_core::naming::{is_java_identifier, is_reserved_word};
use jsonpojo_core::{GenerateError, GenerateResult};
use std::path::PathBuf;

/// Check that every dot-separated segment is a legal, non-reserved identifier.
///
/// The empty package is valid and means the default package.
pub fn validate_package(package: &str) -> GenerateResult<()> {
    if package.is_empty() {
        return Ok(());
    }

    let valid = package
        .split('.')
        .all(|segment| is_java_identifier(segment) && !is_reserved_word(segment));
    if valid {
        Ok(())
    } else {
        Err(GenerateError::InvalidPackage(package.to_string()))
    }
}

/// Relative directory for a package (`com.example` → `com/example`)
pub fn package_path(package: &str) -> PathBuf {
    package.split('.').filter(|segment| !segment.is_empty()).collect()
}
