//! PawSpace CLI - Assess pet space listings and bookings from the command line.

use clap::Parser;
use pawspace_cli::cli::{ConfigAction, ConfigArgs};
use pawspace_cli::commands;
use pawspace_cli::{Advisor, Cli, Command, Config, Formatter, ProviderOverrides};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

async fn run(cli: Cli) -> pawspace_cli::Result<()> {
    let config_path = Config::resolve_path(cli.config_file.as_deref())?;
    // A broken file must not block `config init`
    let config = match &cli.command {
        Command::Config(ConfigArgs {
            action: ConfigAction::Init { .. },
        }) => Config::default(),
        _ => Config::load_from(&config_path)?,
    };

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let overrides = ProviderOverrides {
        kind: cli.provider.map(Into::into),
        advice: cli.advice,
        openai_api_key: cli.openai_api_key,
        ollama_endpoint: cli.ollama_endpoint,
    };

    match cli.command {
        Command::Space(args) => {
            let advisor = Advisor::from_settings(&config.provider, overrides)?;
            commands::execute_space(args, &config, advisor, &formatter).await?;
        }
        Command::Booking(args) => {
            let advisor = Advisor::from_settings(&config.provider, overrides)?;
            commands::execute_booking(args, &config, advisor, &formatter).await?;
        }
        Command::Rules(args) => {
            commands::execute_rules(args, &config, &formatter)?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
    }

    Ok(())
}
