//! Rules error types

use thiserror::Error;

/// Errors raised while loading or checking rule configuration
///
/// Evaluation itself never fails; only configuration can be invalid.
#[derive(Error, Debug)]
pub enum RulesError {
    /// Configuration could not be parsed
    #[error("Failed to parse rules TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Failed to serialize rules TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Configuration values are inconsistent
    #[error("Invalid rules configuration: {0}")]
    Invalid(String),
}
