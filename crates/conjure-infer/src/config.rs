//! Tuning knobs for an inference session.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Limits applied while synthesizing values.
///
/// ```yaml
/// size_budget: 50
/// max_depth: 128
/// max_text_len: 50
/// max_nodes: 10000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferConfig {
    /// Complexity available to the top-level value. Divided among nested
    /// structure, never replenished.
    pub size_budget: usize,

    /// Hard nesting ceiling. From half this depth onward every budget is
    /// clamped to zero; going past it fails with `DepthExceeded`.
    pub max_depth: usize,

    /// Strings get a length in `[0, max_text_len)` regardless of budget.
    pub max_text_len: usize,

    /// Nested values one top-level value may synthesize before every later
    /// budget is clamped to zero. Bounds branching shapes that the depth
    /// ceiling alone cannot, such as several optional self-references.
    pub max_nodes: usize,
}

impl Default for InferConfig {
    fn default() -> Self {
        Self {
            size_budget: 50,
            max_depth: 128,
            max_text_len: 50,
            max_nodes: 10_000,
        }
    }
}

impl InferConfig {
    /// Parse and validate a YAML configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Reject settings that cannot produce any value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_size_budget(mut self, size_budget: usize) -> Self {
        self.size_budget = size_budget;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_text_len(mut self, max_text_len: usize) -> Self {
        self.max_text_len = max_text_len;
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Depth from which budgets are forced to zero.
    pub fn clamp_depth(&self) -> usize {
        self.max_depth / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = InferConfig::default();

        assert_eq!(config.size_budget, 50);
        assert_eq!(config.max_depth, 128);
        assert_eq!(config.max_text_len, 50);
        assert_eq!(config.max_nodes, 10_000);
        assert_eq!(config.clamp_depth(), 64);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = InferConfig::from_yaml("size_budget: 8\n").unwrap();

        assert_eq!(config.size_budget, 8);
        assert_eq!(config.max_depth, 128);
        assert_eq!(config.max_nodes, 10_000);
    }

    #[test]
    fn test_zero_depth_is_rejected() {
        let result = InferConfig::from_yaml("max_depth: 0\n");

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_yaml() {
        let result = InferConfig::from_yaml("size_budget: [1, 2");

        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "size_budget: 4\nmax_text_len: 3").unwrap();

        let config = InferConfig::from_file(file.path()).unwrap();

        assert_eq!(config, InferConfig::default().with_size_budget(4).with_max_text_len(3));
    }

    #[test]
    fn test_missing_file() {
        let result = InferConfig::from_file("/nonexistent/conjure.yaml");

        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
