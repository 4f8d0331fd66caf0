//! Generator configuration types

use crate::naming::{NamingCase, NamingRole};
use crate::style::ClassStyle;
use serde::{Deserialize, Serialize};

/// Generation settings shared by the library and the CLI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Class style used when a request does not pick one
    #[serde(default)]
    pub style: ClassStyle,

    /// Target case per naming role
    #[serde(default)]
    pub naming: NamingConfig,
}

/// Target case for each of the four naming roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    #[serde(default = "default_class_case")]
    pub class_case: NamingCase,

    #[serde(default = "default_member_case")]
    pub field_case: NamingCase,

    #[serde(default = "default_member_case")]
    pub method_case: NamingCase,

    #[serde(default = "default_member_case")]
    pub parameter_case: NamingCase,
}

fn default_class_case() -> NamingCase {
    NamingRole::Class.default_case()
}

fn default_member_case() -> NamingCase {
    NamingRole::Field.default_case()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            class_case: default_class_case(),
            field_case: default_member_case(),
            method_case: default_member_case(),
            parameter_case: default_member_case(),
        }
    }
}

impl NamingConfig {
    /// Case configured for `role`
    pub fn case_for(&self, role: NamingRole) -> NamingCase {
        match role {
            NamingRole::Class => self.class_case,
            NamingRole::Field => self.field_case,
            NamingRole::Method => self.method_case,
            NamingRole::Parameter => self.parameter_case,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
