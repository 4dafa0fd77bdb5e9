//! Error types for the advisory call
//!
//! None of these reach callers of `Assessor::assess*`; every variant ends in
//! the safe-failure assessment.

use thiserror::Error;

/// Reasons an advisory call is considered unusable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessorError {
    /// The provider returned an error
    #[error("Advisory error: {0}")]
    Advisory(String),

    /// The provider did not answer within the configured timeout
    #[error("Advisory timeout after {0}s")]
    Timeout(u64),

    /// The provider answered with nothing usable
    #[error("Advisory response was empty")]
    EmptyResponse,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
