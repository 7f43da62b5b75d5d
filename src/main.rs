//! TinyChat - terminal chat client for a local Ollama server
//!
//! Main entry point: initializes tracing, parses the CLI, assembles and
//! validates the configuration, and dispatches to the command handlers.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tinychat::cli::{Cli, Commands, ModelCommand};
use tinychat::commands;
use tinychat::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    init_tracing(cli.verbose);

    match cli.command {
        Commands::Chat {
            model,
            timeout,
            host,
        } => {
            let config = Config::from_args(host, model, timeout);
            config.validate()?;
            commands::chat::run_chat(config).await
        }
        Commands::Models { command } => match command {
            ModelCommand::List { json, host } => {
                let config = Config::from_args(host, None, None);
                config.validate()?;
                commands::models::list_models(&config, json).await
            }
        },
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "tinychat=debug"
    } else {
        "tinychat=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
