use super::{confirm, modem_api, print_json};
use crate::{
    config::Config,
    print::{TablePrint, or_dash, print_fields, spinner},
};
use anyhow::bail;
use clap::{Subcommand, value_parser};
use colored::Colorize;
use models::modem::{
    DataUsageControls, DataUsageSettings, ModemSignalQuality, ServingCellState, UsbNetMode,
};
use modem_client::utils::{
    ByteUnit, data_usage_chart, format_bytes, parse_byte_size, thumbnail_from_product,
    usb_from_device,
};

#[derive(Subcommand, Debug)]
pub enum ModemCommands {
    /// Identity and firmware of the modem
    Details {
        #[arg(short, long, default_value = "false")]
        json: bool,
    },
    /// Signal strength (AT+CSQ)
    Signal {
        #[arg(short, long, default_value = "false")]
        json: bool,
    },
    /// Serving and neighbour cells
    Cell {
        #[arg(short, long, default_value = "false")]
        json: bool,
    },
    /// Network time reported by the modem
    Clock {
        #[arg(short, long, default_value = "false")]
        json: bool,
    },
    /// GPS position
    Position {
        #[arg(short, long, default_value = "false")]
        json: bool,
    },
    /// SIM card presence
    Sim {
        #[arg(short, long, default_value = "false")]
        json: bool,
    },
    /// Registered network operator
    Operator {
        #[arg(short, long, default_value = "false")]
        json: bool,
    },
    /// PDP contexts (APN profiles)
    Pdp {
        #[arg(short, long, default_value = "false")]
        json: bool,
    },
    /// Data usage, per day of the current period
    Usage {
        #[arg(short, long, default_value = "false")]
        json: bool,
        /// Print the daily usage as an ApexCharts bar chart definition
        #[arg(long, default_value = "false", conflicts_with = "json")]
        chart: bool,
        /// Unit for every value (B, KB, MB, GB). Picked per value when omitted
        #[arg(short, long)]
        unit: Option<ByteUnit>,
    },
    /// Change data usage control
    UsageControl {
        /// Data limit, e.g. 2GB or 512MB
        #[arg(short, long, value_parser = parse_byte_size)]
        limit: Option<u64>,
        /// Day of the month the usage counter restarts
        #[arg(short, long, value_parser = value_parser!(u8).range(1..=31))]
        reset_day: Option<u8>,
        /// Cut data once the limit is reached
        #[arg(long, conflicts_with = "disabled")]
        enabled: bool,
        /// Only account data usage
        #[arg(long, conflicts_with = "enabled")]
        disabled: bool,
    },
    /// Show or set the USB network mode (qmi, ecm, mbim)
    UsbMode { mode: Option<UsbNetMode> },
    /// Set the APN of a PDP profile
    Apn {
        /// PDP context id
        profile: u8,
        apn: String,
    },
    /// Reboot the modem
    Reboot {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Restore factory settings
    Reset {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Send a raw AT command (developer mode only)
    At {
        command: String,
        /// Seconds to wait for the answer
        #[arg(short, long)]
        delay: Option<f64>,
    },
}

impl ModemCommands {
    pub async fn handle(self, id: &str, config: &Config) -> anyhow::Result<()> {
        let api = modem_api(config)?;

        match self {
            ModemCommands::Details { json } => {
                let details = api.fetch_by_id(id).await?;
                if json {
                    return print_json(&details);
                }

                let modem = &details.descriptor;
                println!(
                    "{} {} {}",
                    modem.product.bold(),
                    modem.manufacturer,
                    format!("(id: {})", modem.id).dimmed()
                );
                print_fields(&[
                    ("usb", usb_from_device(&modem.device)),
                    ("device", modem.device.clone()),
                    ("imei", details.imei.clone()),
                    ("imsi", details.imsi.clone()),
                    ("serial", details.serial_number.clone()),
                    (
                        "firmware",
                        format!(
                            "{} ({})",
                            details.firmware_revision.firmware_revision,
                            details.firmware_revision.timestamp
                        ),
                    ),
                    ("thumbnail", thumbnail_from_product(&modem.product)),
                ]);
            }
            ModemCommands::Signal { json } => {
                let signal = api.fetch_signal_strength_by_id(id).await?;
                if json {
                    return print_json(&signal);
                }
                println!("{}", describe_signal(&signal));
            }
            ModemCommands::Cell { json } => {
                let cells = api.fetch_cell_info_by_id(id).await?;
                if json {
                    return print_json(&cells);
                }

                let serving = &cells.serving_cell;
                let state = match serving.state {
                    ServingCellState::Connect => serving.state.to_string().green(),
                    _ => serving.state.to_string().yellow(),
                };
                println!("{} {} {}", "Serving cell".bold(), serving.rat, state);
                print_fields(&[
                    ("mcc", serving.mobile_country_code.to_string()),
                    ("mnc", serving.mobile_network_code.to_string()),
                    ("area", serving.area_id.to_string()),
                    ("cell", serving.cell_id.to_string()),
                    ("signal", format!("{} dBm", or_dash(serving.signal_quality_dbm))),
                    ("sinr", format!("{} dB", or_dash(serving.signal_inr_db))),
                    (
                        "bandwidth",
                        format!(
                            "↑{} MHz ↓{} MHz",
                            or_dash(serving.up_bandwidth_mhz),
                            or_dash(serving.dl_bandwidth_mhz)
                        ),
                    ),
                ]);

                if cells.neighbor_cells.is_empty() {
                    return Ok(());
                }

                println!("\n{}", "Neighbour cells".bold());
                let mut table = TablePrint::new_with_headers(vec![
                    "TYPE", "RAT", "MCC", "MNC", "AREA", "CELL", "DBM", "SINR",
                ]);
                for cell in &cells.neighbor_cells {
                    table.add_row(vec![
                        cell.cell_type.to_string(),
                        cell.rat.to_string(),
                        or_dash(cell.mobile_country_code),
                        or_dash(cell.mobile_network_code),
                        or_dash(cell.area_id),
                        or_dash(cell.cell_id),
                        or_dash(cell.signal_quality_dbm),
                        or_dash(cell.signal_inr_db),
                    ]);
                }
                table.print();
            }
            ModemCommands::Clock { json } => {
                let clock = api.fetch_clock_by_id(id).await?;
                if json {
                    return print_json(&clock);
                }

                match clock.to_datetime() {
                    Ok(datetime) => println!("{}", datetime.to_rfc3339()),
                    Err(err) => {
                        println!("{} {}", clock.date, clock.time);
                        eprintln!("{}: {}", "Warning".yellow(), err);
                    }
                }
            }
            ModemCommands::Position { json } => {
                let position = api.fetch_position_by_id(id).await?;
                if json {
                    return print_json(&position);
                }
                print_fields(&[
                    ("latitude", position.latitude.to_string()),
                    ("longitude", position.longitude.to_string()),
                    ("source", or_dash(position.source)),
                ]);
            }
            ModemCommands::Sim { json } => {
                let status = api.fetch_sim_status_by_id(id).await?;
                if json {
                    return print_json(&status);
                }
                println!("{}", status);
            }
            ModemCommands::Operator { json } => {
                let operator = api.fetch_operator_info_by_id(id).await?;
                if json {
                    return print_json(&operator);
                }
                print_fields(&[
                    ("operator", or_dash(operator.operator.as_deref())),
                    ("mode", operator_mode(operator.mode).to_string()),
                    ("access technology", or_dash(operator.access_technology)),
                ]);
            }
            ModemCommands::Pdp { json } => {
                let contexts = api.fetch_pdp_info_by_id(id).await?;
                if json {
                    return print_json(&contexts);
                }

                let mut table = TablePrint::new_with_headers(vec!["CID", "TYPE", "APN", "IP"]);
                for context in &contexts {
                    table.add_row(vec![
                        context.context_id.to_string(),
                        context.protocol.to_string(),
                        context.access_point_name.clone(),
                        context.ip_address.clone(),
                    ]);
                }
                table.print();
            }
            ModemCommands::Usage { json, chart, unit } => {
                let usage = api.fetch_data_usage_by_id(id).await?;
                if json {
                    return print_json(&usage);
                }
                if chart {
                    return print_json(&data_usage_chart(&usage, unit));
                }
                print_usage(&usage, unit);
            }
            ModemCommands::UsageControl {
                limit,
                reset_day,
                enabled,
                disabled,
            } => {
                let current = api.fetch_data_usage_by_id(id).await?;
                let controls = apply_controls(&current, limit, reset_day, enabled, disabled);

                let updated = api.set_data_usage_control_by_id(id, &controls).await?;
                println!("{}", "Data usage control updated".bright_green());
                print_usage(&updated, None);
            }
            ModemCommands::UsbMode { mode: None } => {
                println!("{}", api.fetch_usb_mode_by_id(id).await?);
            }
            ModemCommands::UsbMode { mode: Some(mode) } => {
                api.set_usb_mode_by_id(id, mode).await?;
                println!("USB network mode set to {}", mode.to_string().bold());
                println!("Reboot the modem to apply it.");
            }
            ModemCommands::Apn { profile, apn } => {
                api.set_apn_by_profile_by_id(id, profile, &apn).await?;
                println!("Profile {} now uses APN {}", profile, apn.bold());
            }
            ModemCommands::Reboot { yes } => {
                if !yes && !confirm(&format!("Reboot modem {id}?"))? {
                    println!("Cancelled.");
                    return Ok(());
                }
                api.reboot_by_id(id).await?;
                println!("{}", "Reboot requested".bright_green());
            }
            ModemCommands::Reset { yes } => {
                println!(
                    "{} every setting of modem {} will return to factory defaults",
                    "Warning:".yellow(),
                    id
                );
                if !yes && !confirm("Proceed?")? {
                    println!("Cancelled.");
                    return Ok(());
                }
                api.reset_by_id(id).await?;
                println!("{}", "Factory reset requested".bright_green());
            }
            ModemCommands::At { command, delay } => {
                if !config.dev_mode {
                    bail!("Raw AT commands need developer mode, enable it with 'mm dev-mode on'");
                }

                let pb = spinner(format!("{} {}", "Sending".bold(), command));
                let answer = api.command_by_id(id, &command, delay).await;
                pb.finish_and_clear();

                println!("{}", answer?.trim());
            }
        }

        Ok(())
    }
}

pub fn describe_signal(signal: &ModemSignalQuality) -> String {
    const BARS: [&str; 4] = ["▂", "▄", "▆", "█"];

    let filled = usize::from(signal.bars());
    let bars: String = BARS
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            if i < filled {
                bar.green().to_string()
            } else {
                bar.dimmed().to_string()
            }
        })
        .collect();

    match signal.rssi_dbm() {
        Some(dbm) => format!("{bars} {dbm} dBm (CSQ {})", signal.signal_strength),
        None => format!("{bars} {}", "not detectable".red()),
    }
}

fn operator_mode(mode: i32) -> &'static str {
    match mode {
        0 => "automatic",
        1 => "manual",
        2 => "deregistered",
        3 => "format only",
        4 => "manual, automatic fallback",
        _ => "unknown",
    }
}

fn apply_controls(
    current: &DataUsageSettings,
    limit: Option<u64>,
    reset_day: Option<u8>,
    enabled: bool,
    disabled: bool,
) -> DataUsageControls {
    let mut controls = DataUsageControls::from(current);
    if let Some(limit) = limit {
        controls.data_limit = limit;
    }
    if let Some(day) = reset_day {
        controls.data_reset_day = day;
    }
    if enabled {
        controls.data_control_enabled = true;
    } else if disabled {
        controls.data_control_enabled = false;
    }
    controls
}

fn print_usage(usage: &DataUsageSettings, unit: Option<ByteUnit>) {
    let bytes = |value: u64| format_bytes(value as f64, unit);
    let (rx, tx) = usage.data_used;

    let status = if usage.limit_reached() {
        "limit reached".red()
    } else {
        "within limit".green()
    };
    print_fields(&[
        (
            "control",
            if usage.data_control_enabled { "enabled" } else { "disabled" }.to_string(),
        ),
        ("limit", bytes(usage.data_limit)),
        ("reset day", usage.data_reset_day.to_string()),
        (
            "used",
            format!("{} (↓{} ↑{})", bytes(usage.total_data_used()), bytes(rx), bytes(tx)),
        ),
        ("status", status.to_string()),
    ]);

    if usage.data_points.is_empty() {
        return;
    }

    println!();
    let mut table = TablePrint::new_with_headers(vec!["DAY", "RX", "TX"]);
    for (day, (rx, tx)) in &usage.data_points {
        table.add_row(vec![day.to_string(), bytes(*rx), bytes(*tx)]);
    }
    table.print();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(1 << 30), Some(15), true, false, (1 << 30, 15, true))]
    #[case(None, None, false, true, (2 << 30, 1, false))]
    #[case(None, Some(31), false, false, (2 << 30, 31, false))]
    fn test_apply_controls_keeps_unset_fields(
        #[case] limit: Option<u64>,
        #[case] reset_day: Option<u8>,
        #[case] enabled: bool,
        #[case] disabled: bool,
        #[case] expected: (u64, u8, bool),
    ) {
        let current = DataUsageSettings::default();

        let controls = apply_controls(&current, limit, reset_day, enabled, disabled);

        assert_eq!(
            (
                controls.data_limit,
                controls.data_reset_day,
                controls.data_control_enabled
            ),
            expected
        );
    }

    #[test]
    fn test_describe_signal() {
        let strong = ModemSignalQuality {
            signal_strength: 25,
            bit_error_rate: 99,
        };
        let lost = ModemSignalQuality {
            signal_strength: 99,
            bit_error_rate: 99,
        };

        let plain =
            |signal: &ModemSignalQuality| strip_ansi_escapes::strip_str(describe_signal(signal));

        assert_eq!(plain(&strong), "▂▄▆█ -63 dBm (CSQ 25)");
        assert_eq!(plain(&lost), "▂▄▆█ not detectable");
    }
}
