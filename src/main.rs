//! seekctl CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use seekctl::cli::{Cli, Commands, ConfigCommands};
use seekctl::Config;

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` picks the level.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "seekctl=warn",
        1 => "seekctl=debug",
        _ => "seekctl=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Resume { duration, stored } => commands::resume::handle(duration, stored),
        Commands::Simulate {
            duration,
            start,
            json,
            script,
        } => {
            let config = load_config(cli.config.as_deref())?;
            commands::simulate::handle(&config, duration, start, json, &script)
        }
        Commands::Play { duration, start } => {
            let config = load_config(cli.config.as_deref())?;
            commands::play::handle(&config, duration, start)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => {
                let config = load_config(cli.config.as_deref())?;
                commands::config::handle_show(&config)
            }
            ConfigCommands::Init { force } => {
                commands::config::handle_init(cli.config.as_deref(), force)
            }
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
