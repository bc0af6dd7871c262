use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::commands::{
    cells::CellsCommands, internet::InternetCommands, modem::ModemCommands,
    system::SystemCommands, watch::WatchCommands,
};

#[derive(Parser)]
#[command(name = "mm", version, about = "Modem Manager CLI - cellular modems of an onboard computer", long_about = None)]
pub struct Cli {
    /// Log every request to stderr
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show or change the profile in use
    Profile { profile: Option<String> },

    /// Show or toggle developer mode (raw AT commands, request timings)
    DevMode {
        #[arg(value_enum)]
        state: Option<Switch>,
    },

    /// List connected modems
    #[command(visible_alias = "ls")]
    Modems {
        #[arg(short, long, default_value = "false")]
        json: bool,
    },

    /// Inspect and configure one modem
    Modem {
        /// Modem id, as listed by `mm modems`
        id: String,
        #[clap(subcommand)]
        command: ModemCommands,
    },

    /// Cell tower location lookups
    Cells {
        #[clap(subcommand)]
        command: CellsCommands,
    },

    /// Connectivity checks through the helper service
    Internet {
        #[clap(subcommand)]
        command: InternetCommands,
    },

    /// Host system information
    System {
        #[clap(subcommand)]
        command: SystemCommands,
    },

    /// Poll a modem and print every sample
    Watch {
        #[clap(subcommand)]
        command: WatchCommands,
    },

    /// Generate shell completion scripts
    Completion {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the OpenAPI schema of every data type
    Schema,
}

/// How much a command depends on the config file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigAccess {
    /// Runs without loading it
    None,
    /// Falls back to the default profile when it cannot be read
    Read,
    /// Fails when it cannot be read, since it may be written back
    Write,
}

impl Commands {
    pub fn config_access(&self) -> ConfigAccess {
        match self {
            Commands::Completion { .. } | Commands::Schema => ConfigAccess::None,
            Commands::Profile { .. } | Commands::DevMode { .. } => ConfigAccess::Write,
            _ => ConfigAccess::Read,
        }
    }
}
