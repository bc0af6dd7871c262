use super::{print_json, system_info_api};
use crate::{config::Config, print::TablePrint};
use clap::Subcommand;
use colored::Colorize;
use modem_client::utils::{ByteUnit, format_bytes};

#[derive(Subcommand, Debug)]
pub enum SystemCommands {
    /// Network interfaces and their traffic counters
    Network {
        #[arg(short, long, default_value = "false")]
        json: bool,
        /// Unit for traffic counters (B, KB, MB, GB). Picked per value when omitted
        #[arg(short, long)]
        unit: Option<ByteUnit>,
        /// Include loopback interfaces
        #[arg(short, long, default_value = "false")]
        all: bool,
    },
}

impl SystemCommands {
    pub async fn handle(self, config: &Config) -> anyhow::Result<()> {
        let api = system_info_api(config)?;

        match self {
            SystemCommands::Network { json, unit, all } => {
                let interfaces: Vec<_> = api
                    .fetch_network_info()
                    .await?
                    .into_iter()
                    .filter(|interface| all || !interface.is_loopback)
                    .collect();

                if json {
                    return print_json(&interfaces);
                }

                let bytes = |value: u64| format_bytes(value as f64, unit);
                let mut table =
                    TablePrint::new_with_headers(vec!["NAME", "STATE", "IPS", "RX", "TX"]);
                for interface in &interfaces {
                    let state = if interface.is_up {
                        "up".bright_green().to_string()
                    } else {
                        "down".red().to_string()
                    };
                    table.add_row(vec![
                        interface.name.clone(),
                        state,
                        interface.ips.join(", "),
                        bytes(interface.total_received_bytes),
                        bytes(interface.total_transmitted_bytes),
                    ]);
                }
                table.print();
            }
        }

        Ok(())
    }
}
