//! Errors raised while constructing generators.

/// Error type for generator construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// A choice was requested among zero candidates.
    #[error("Cannot generate from an empty domain: {what}")]
    EmptyDomain { what: &'static str },
}
