//! Path model configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MODEL_SPEC;

/// Configuration for the path model description.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    /// Model description in `lhs ~ rhs1 + rhs2` syntax. Default: the two
    /// anticoagulant outcome equations.
    pub spec: Option<String>,
}

impl ModelConfig {
    pub fn effective_spec(&self) -> &str {
        self.spec.as_deref().unwrap_or(DEFAULT_MODEL_SPEC)
    }
}
