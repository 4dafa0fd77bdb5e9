//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// PawSpace CLI - Assess pet space listings and bookings.
#[derive(Debug, Parser)]
#[command(name = "pawspace")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (default: ~/.pawspace/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    pub config_file: Option<PathBuf>,

    /// Advisory provider
    #[arg(short, long, value_enum, global = true)]
    pub provider: Option<ProviderArg>,

    /// Use this fixed advisory response instead of calling a provider
    #[arg(long, global = true)]
    pub advice: Option<String>,

    /// OpenAI API key
    #[arg(long, env = "PAWSPACE_OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub openai_api_key: Option<String>,

    /// Ollama endpoint
    #[arg(long, env = "PAWSPACE_OLLAMA_ENDPOINT", global = true)]
    pub ollama_endpoint: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (verdict and score only)
    Quiet,
}

/// Advisory provider options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ProviderArg {
    /// Local Ollama server
    Ollama,
    /// OpenAI-compatible chat completions API
    Openai,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Assess a space registration
    Space(CandidateArgs),

    /// Assess a booking (booking, pet and space tables)
    Booking(CandidateArgs),

    /// Run the static rules only, without an advisory call
    Rules(RulesArgs),

    /// Show or initialize the configuration file
    Config(ConfigArgs),
}

/// Arguments for the space and booking commands.
#[derive(Debug, Parser)]
pub struct CandidateArgs {
    /// TOML file describing the candidate
    pub file: PathBuf,
}

/// Arguments for the rules command.
#[derive(Debug, Parser)]
pub struct RulesArgs {
    /// TOML file describing the candidate
    pub file: PathBuf,

    /// Treat the file as a booking instead of a space
    #[arg(short, long)]
    pub booking: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<ProviderArg> for crate::config::ProviderKind {
    fn from(provider: ProviderArg) -> Self {
        match provider {
            ProviderArg::Ollama => crate::config::ProviderKind::Ollama,
            ProviderArg::Openai => crate::config::ProviderKind::OpenAi,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_command() {
        let cli = Cli::parse_from(["pawspace", "space", "yard.toml"]);
        match cli.command {
            Command::Space(args) => assert_eq!(args.file, PathBuf::from("yard.toml")),
            _ => panic!("Expected Space command"),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::parse_from([
            "pawspace",
            "booking",
            "stay.toml",
            "--format",
            "json",
            "--advice",
            "score: 80",
            "--no-color",
        ]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.advice.as_deref(), Some("score: 80"));
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::Booking(_)));
    }

    #[test]
    fn test_rules_command_booking_flag() {
        let cli = Cli::parse_from(["pawspace", "rules", "stay.toml", "--booking"]);
        match cli.command {
            Command::Rules(args) => assert!(args.booking),
            _ => panic!("Expected Rules command"),
        }
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["pawspace", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_provider_conversion() {
        let cli = Cli::parse_from(["pawspace", "--provider", "openai", "config", "show"]);
        assert_eq!(cli.provider, Some(ProviderArg::Openai));
        let kind: crate::config::ProviderKind = ProviderArg::Openai.into();
        assert_eq!(kind, crate::config::ProviderKind::OpenAi);
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["pawspace"]).is_err());
    }
}
