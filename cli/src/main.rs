mod cli;
mod commands;
mod config;
mod print;

use crate::cli::{Cli, Commands, ConfigAccess, Switch};
use crate::config::Config;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use std::io;
use std::time::Instant;
use tracing::warn;
use tracing_subscriber::{EnvFilter, prelude::*};

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

fn config_or_default(loaded: anyhow::Result<Config>, access: ConfigAccess) -> anyhow::Result<Config> {
    match loaded {
        Ok(config) => Ok(config),
        Err(err) if access == ConfigAccess::Write => Err(err),
        Err(err) => {
            warn!("Ignoring config: {:#}", err);
            Ok(Config::default())
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut config = match command.config_access() {
        ConfigAccess::None => Config::default(),
        access => config_or_default(Config::load_or_default().await, access)?,
    };
    let started = Instant::now();

    match command {
        Commands::Profile { profile } => {
            if let Some(profile) = profile {
                println!("Changing profile to {}", profile);
                config.change_profile(profile)?;
                config.save().await?;
                println!("new: {}", config);
            } else {
                println!("{}", config);
                for name in config.profiles() {
                    let marker = if name == config.current_profile { "*" } else { " " };
                    println!("{} {}", marker, name);
                }
            }
        }
        Commands::DevMode { state } => {
            if let Some(state) = state {
                config.dev_mode = state == Switch::On;
                config.save().await?;
            }
            let state = if config.dev_mode {
                "on".bright_green()
            } else {
                "off".dimmed()
            };
            println!("Developer mode {}", state);
        }
        Commands::Modems { json } => commands::modems::handle_modems(&config, json).await?,
        Commands::Modem { id, command } => command.handle(&id, &config).await?,
        Commands::Cells { command } => command.handle(&config).await?,
        Commands::Internet { command } => command.handle(&config).await?,
        Commands::System { command } => command.handle(&config).await?,
        Commands::Watch { command } => command.handle(&config).await?,
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = env!("CARGO_BIN_NAME");
            generate(shell, &mut cmd, name, &mut io::stdout());
            return Ok(());
        }
        Commands::Schema => {
            println!("{}", models::schema::openapi_json()?);
            return Ok(());
        }
    }

    if config.dev_mode {
        eprintln!(
            "{}",
            format!("took {:.0?} against {}", started.elapsed(), config.server()).dimmed()
        );
    }

    Ok(())
}
