//! PawSpace CLI library.
//!
//! Loads candidates from TOML files, runs them through the assessor or the
//! rule evaluator, and formats the result.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod provider;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use provider::{Advisor, ProviderOverrides};
