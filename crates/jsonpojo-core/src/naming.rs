//! Naming strategies for generated identifiers.
//!
//! Every identifier in a generated class goes through one of four
//! [`NamingStrategy`] roles: class, field, method, and parameter. The default
//! strategies split a raw JSON key into words, join them in a target
//! [`NamingCase`], then repair anything that is not a legal Java identifier.
//!
//! # Conversions
//!
//! | Raw key | Case | Output |
//! |---------|------|--------|
//! | `user-id` | [`NamingCase::LowerCamel`] | `userId` |
//! | `user_id` | [`NamingCase::UpperCamel`] | `UserId` |
//! | `HTTPServer` | [`NamingCase::LowerSnake`] | `http_server` |
//! | `2fa code` | [`NamingCase::LowerCamel`] | `_2faCode` |
//! | `class` | [`NamingCase::LowerCamel`] | `class_` |
//!
//! Word splitting does not assume a source convention: separators, case
//! changes, and acronym ends all start a new word.
//!
//! # Custom strategies
//!
//! Any `Fn(&str, &TypeRef) -> GenerateResult<String>` is a strategy:
//!
//! ```
//! use jsonpojo_core::{GenerateError, NamingStrategies, TypeRef};
//!
//! let naming = NamingStrategies::default().with_field(|raw: &str, _ty: &TypeRef| {
//!     Ok::<_, GenerateError>(format!("m{}", raw.to_uppercase()))
//! });
//! assert_eq!(naming.field().convert("id", &TypeRef::STRING).unwrap(), "mID");
//! ```

use crate::config::NamingConfig;
use crate::error::{GenerateError, GenerateResult};
use crate::types::TypeRef;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Target case convention for a naming strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingCase {
    /// `userId`
    LowerCamel,
    /// `UserId`
    UpperCamel,
    /// `user_id`
    LowerSnake,
    /// `USER_ID`
    UpperSnake,
    /// `user-id`; hyphens become underscores in Java identifiers
    Kebab,
}

impl NamingCase {
    pub const ALL: [NamingCase; 5] = [
        NamingCase::LowerCamel,
        NamingCase::UpperCamel,
        NamingCase::LowerSnake,
        NamingCase::UpperSnake,
        NamingCase::Kebab,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NamingCase::LowerCamel => "lower-camel",
            NamingCase::UpperCamel => "upper-camel",
            NamingCase::LowerSnake => "lower-snake",
            NamingCase::UpperSnake => "upper-snake",
            NamingCase::Kebab => "kebab",
        }
    }

    /// Join already-split words in this case
    pub fn join(self, words: &[String]) -> String {
        match self {
            NamingCase::LowerCamel => {
                let mut result = String::new();
                for (i, word) in words.iter().enumerate() {
                    if i == 0 {
                        result.push_str(&word.to_lowercase());
                    } else {
                        result.push_str(&capitalize(word));
                    }
                }
                result
            }
            NamingCase::UpperCamel => words.iter().map(|word| capitalize(word)).collect(),
            NamingCase::LowerSnake => join_mapped(words, "_", str::to_lowercase),
            NamingCase::UpperSnake => join_mapped(words, "_", str::to_uppercase),
            NamingCase::Kebab => join_mapped(words, "-", str::to_lowercase),
        }
    }

    /// Split `raw` into words and join them in this case
    pub fn apply(self, raw: &str) -> String {
        self.join(&split_words(raw))
    }
}

impl fmt::Display for NamingCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        NamingCase::ALL
            .into_iter()
            .find(|case| case.as_str() == normalized)
            .ok_or_else(|| {
                let valid: Vec<&str> = NamingCase::ALL.iter().map(|c| c.as_str()).collect();
                format!(
                    "unknown naming case '{s}', expected one of: {}",
                    valid.join(", ")
                )
            })
    }
}

/// The kind of identifier a strategy produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingRole {
    Class,
    Field,
    Method,
    Parameter,
}

impl NamingRole {
    /// Case used by the default strategy for this role
    pub fn default_case(self) -> NamingCase {
        match self {
            NamingRole::Class => NamingCase::UpperCamel,
            NamingRole::Field | NamingRole::Method | NamingRole::Parameter => {
                NamingCase::LowerCamel
            }
        }
    }
}

impl fmt::Display for NamingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingRole::Class => write!(f, "class"),
            NamingRole::Field => write!(f, "field"),
            NamingRole::Method => write!(f, "method"),
            NamingRole::Parameter => write!(f, "parameter"),
        }
    }
}

/// Converts a raw JSON key into an identifier.
///
/// Implementations must be pure: the same `(raw, ty)` always yields the same
/// result. The type is part of the contract for targets where legality depends
/// on the declared type; the default strategies ignore it.
pub trait NamingStrategy: Send + Sync {
    fn convert(&self, raw: &str, ty: &TypeRef) -> GenerateResult<String>;
}

impl<F> NamingStrategy for F
where
    F: Fn(&str, &TypeRef) -> GenerateResult<String> + Send + Sync,
{
    fn convert(&self, raw: &str, ty: &TypeRef) -> GenerateResult<String> {
        self(raw, ty)
    }
}

/// Case normalization followed by Java legality fixups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultNamingStrategy {
    role: NamingRole,
    case: NamingCase,
}

impl DefaultNamingStrategy {
    pub fn new(role: NamingRole, case: NamingCase) -> Self {
        Self { role, case }
    }

    /// Strategy for `role` using the role's default case
    pub fn for_role(role: NamingRole) -> Self {
        Self::new(role, role.default_case())
    }

    pub fn role(&self) -> NamingRole {
        self.role
    }

    pub fn case(&self) -> NamingCase {
        self.case
    }
}

impl NamingStrategy for DefaultNamingStrategy {
    fn convert(&self, raw: &str, _ty: &TypeRef) -> GenerateResult<String> {
        let words = split_words(raw);
        if words.is_empty() {
            return Err(GenerateError::invalid_identifier(raw, self.role));
        }
        Ok(make_legal(&self.case.join(&words)))
    }
}

/// The four strategies used for one generation request
#[derive(Clone)]
pub struct NamingStrategies {
    class: Arc<dyn NamingStrategy>,
    field: Arc<dyn NamingStrategy>,
    method: Arc<dyn NamingStrategy>,
    parameter: Arc<dyn NamingStrategy>,
}

impl Default for NamingStrategies {
    fn default() -> Self {
        Self {
            class: Arc::new(DefaultNamingStrategy::for_role(NamingRole::Class)),
            field: Arc::new(DefaultNamingStrategy::for_role(NamingRole::Field)),
            method: Arc::new(DefaultNamingStrategy::for_role(NamingRole::Method)),
            parameter: Arc::new(DefaultNamingStrategy::for_role(NamingRole::Parameter)),
        }
    }
}

impl fmt::Debug for NamingStrategies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamingStrategies").finish_non_exhaustive()
    }
}

impl NamingStrategies {
    /// Default strategies with every role using `case`
    pub fn with_case(case: NamingCase) -> Self {
        Self {
            class: Arc::new(DefaultNamingStrategy::new(NamingRole::Class, case)),
            field: Arc::new(DefaultNamingStrategy::new(NamingRole::Field, case)),
            method: Arc::new(DefaultNamingStrategy::new(NamingRole::Method, case)),
            parameter: Arc::new(DefaultNamingStrategy::new(NamingRole::Parameter, case)),
        }
    }

    /// Default strategies with per-role cases from configuration
    pub fn from_config(config: &NamingConfig) -> Self {
        let strategy = |role| Arc::new(DefaultNamingStrategy::new(role, config.case_for(role)));
        Self {
            class: strategy(NamingRole::Class),
            field: strategy(NamingRole::Field),
            method: strategy(NamingRole::Method),
            parameter: strategy(NamingRole::Parameter),
        }
    }

    pub fn with_class(mut self, strategy: impl NamingStrategy + 'static) -> Self {
        self.class = Arc::new(strategy);
        self
    }

    pub fn with_field(mut self, strategy: impl NamingStrategy + 'static) -> Self {
        self.field = Arc::new(strategy);
        self
    }

    pub fn with_method(mut self, strategy: impl NamingStrategy + 'static) -> Self {
        self.method = Arc::new(strategy);
        self
    }

    pub fn with_parameter(mut self, strategy: impl NamingStrategy + 'static) -> Self {
        self.parameter = Arc::new(strategy);
        self
    }

    pub fn class(&self) -> &dyn NamingStrategy {
        self.class.as_ref()
    }

    pub fn field(&self) -> &dyn NamingStrategy {
        self.field.as_ref()
    }

    pub fn method(&self) -> &dyn NamingStrategy {
        self.method.as_ref()
    }

    pub fn parameter(&self) -> &dyn NamingStrategy {
        self.parameter.as_ref()
    }
}

/// Split a raw key into words.
///
/// Non-alphanumeric characters separate words. A lowercase-or-digit to
/// uppercase transition starts a new word, and so does the last capital of an
/// acronym followed by a lowercase letter (`HTTPServer` → `HTTP`, `Server`).
///
/// # Examples
///
/// ```
/// use jsonpojo_core::naming::split_words;
///
/// assert_eq!(split_words("user-id"), ["user", "id"]);
/// assert_eq!(split_words("displayName"), ["display", "Name"]);
/// assert_eq!(split_words("HTTPServer"), ["HTTP", "Server"]);
/// assert_eq!(split_words("item2"), ["item2"]);
/// ```
pub fn split_words(raw: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for c in raw.chars() {
        if !c.is_alphanumeric() {
            flush(&mut words, &mut current);
            continue;
        }

        if let Some(prev) = current.chars().last() {
            if c.is_uppercase() && (prev.is_lowercase() || prev.is_numeric()) {
                flush(&mut words, &mut current);
            } else if c.is_lowercase() && prev.is_uppercase() && current.chars().count() > 1 {
                // Last capital of an acronym belongs to the next word
                current.pop();
                flush(&mut words, &mut current);
                current.push(prev);
            }
        }
        current.push(c);
    }
    flush(&mut words, &mut current);

    words
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

fn join_mapped(words: &[String], separator: &str, map: fn(&str) -> String) -> String {
    words
        .iter()
        .map(|word| map(word))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Capitalize the first letter and lowercase the rest.
///
/// # Examples
///
/// ```
/// use jsonpojo_core::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize("HTTP"), "Http");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
    }
}

const RESERVED_WORDS: &[&str] = &[
    "_",
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// Java keywords and literals that cannot be used as identifiers
pub fn is_reserved_word(s: &str) -> bool {
    RESERVED_WORDS.contains(&s)
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// True when `s` can be used verbatim as a Java identifier
pub fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => {
            chars.all(is_identifier_part) && !is_reserved_word(s)
        }
        _ => false,
    }
}

/// Repair a case-joined name into a legal identifier.
///
/// Illegal characters become `_`, a leading digit gets a `_` prefix, and a
/// reserved word gets a `_` suffix.
fn make_legal(joined: &str) -> String {
    let mut result: String = joined
        .chars()
        .map(|c| if is_identifier_part(c) { c } else { '_' })
        .collect();

    if result.chars().next().is_some_and(|c| !is_identifier_start(c)) {
        result.insert(0, '_');
    }
    if is_reserved_word(&result) {
        result.push('_');
    }

    result
}
