//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rule configuration error
    #[error("Rules error: {0}")]
    Rules(#[from] pawspace_rules::RulesError),

    /// Assessor configuration error
    #[error("Assessor error: {0}")]
    Assessor(#[from] pawspace_assessor::AssessorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Provider needs an API key that was not supplied
    #[error("Missing API key: set PAWSPACE_OPENAI_API_KEY or pass --openai-api-key")]
    MissingApiKey,
}
