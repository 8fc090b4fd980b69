//! Configuration options for rule generation.

use serde::{Deserialize, Serialize};

/// Package the generated rules and their fact types live in.
pub const DEFAULT_PACKAGE: &str = "com.order.rules";

/// Options controlling document generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Package declared in the preamble and used to qualify fact types.
    pub package: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
        }
    }
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Returns the fully qualified name of a fact type.
    pub fn qualify(&self, fact_type: &str) -> String {
        format!("{}.{fact_type}", self.package)
    }
}
