//! Error types for inference and its configuration.

/// Error type for generator inference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferenceError {
    /// The type has no shape that can be synthesized, such as a function.
    #[error("Cannot infer `{type_name}` yet{}", signature_suffix(.signature))]
    NotInferrable {
        type_name: &'static str,
        /// Rendered `(inputs) => (outputs)` signature for function types.
        signature: Option<String>,
    },

    /// Synthesis nested deeper than the configured ceiling.
    #[error("Exceeded maximum synthesis depth {depth} while generating `{type_name}`")]
    DepthExceeded { type_name: &'static str, depth: usize },

    /// The inference configuration was rejected.
    #[error("Invalid inference configuration: {reason}")]
    InvalidConfig { reason: String },
}

fn signature_suffix(signature: &Option<String>) -> String {
    match signature {
        Some(signature) => format!(": functions such as {signature} carry no data"),
        None => String::new(),
    }
}

/// Error type for loading an [`InferConfig`](crate::InferConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading the configuration file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A value is out of its accepted range
    #[error("Invalid config: {0}")]
    Invalid(String),
}
