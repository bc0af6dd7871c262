use crate::config::Config;
use colored::Colorize;
use modem_client::{InternetAPI, ModemManagerAPI, SystemInfoAPI};
use serde::Serialize;
use std::io::{self, Write};

pub mod cells;
pub mod internet;
pub mod modem;
pub mod modems;
pub mod system;
pub mod watch;

pub fn modem_api(config: &Config) -> anyhow::Result<ModemManagerAPI> {
    ModemManagerAPI::new(&config.server())
}

pub fn internet_api(config: &Config) -> anyhow::Result<InternetAPI> {
    InternetAPI::new(&config.helper())
}

pub fn system_info_api(config: &Config) -> anyhow::Result<SystemInfoAPI> {
    SystemInfoAPI::new(&config.server())
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Asks on stdin, anything but `y` declines.
pub fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{} [y/N]: ", question.bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}
