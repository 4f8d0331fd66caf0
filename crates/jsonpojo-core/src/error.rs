//! Error types for class generation

use crate::json::JsonKind;
use crate::naming::NamingRole;
use thiserror::Error;

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error type for generation operations
///
/// Every variant is terminal for the request that raised it: inference is pure,
/// so retrying with the same input yields the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The input text is not well-formed JSON
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    JsonSyntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// The document root is a scalar or null, which has no class shape
    #[error("invalid root: expected an object or array, got {kind}")]
    InvalidRoot { kind: JsonKind },

    /// A naming strategy could not produce a legal identifier
    #[error("cannot convert '{name}' to a {role} name")]
    InvalidIdentifier { name: String, role: NamingRole },

    /// The target package is not a legal dotted package name
    #[error("invalid package name: '{0}'")]
    InvalidPackage(String),

    /// The renderer failed to produce source text
    #[error("render error: {0}")]
    Render(String),
}

impl GenerateError {
    /// Returns a stable numeric code for host integrations
    pub fn error_code(&self) -> u32 {
        match self {
            GenerateError::JsonSyntax { .. } => 1,
            GenerateError::InvalidRoot { .. } => 2,
            GenerateError::InvalidIdentifier { .. } => 3,
            GenerateError::InvalidPackage(_) => 4,
            GenerateError::Render(_) => 5,
        }
    }

    pub(crate) fn invalid_identifier(name: &str, role: NamingRole) -> Self {
        GenerateError::InvalidIdentifier {
            name: name.to_string(),
            role,
        }
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        GenerateError::JsonSyntax {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
