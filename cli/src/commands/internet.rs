use super::{internet_api, print_json};
use crate::{
    config::Config,
    print::{TablePrint, print_fields, spinner},
};
use clap::Subcommand;
use colored::Colorize;
use models::internet::SpeedTestResult;

#[derive(Subcommand, Debug)]
pub enum InternetCommands {
    /// Check which probe websites are reachable
    Access {
        #[arg(short, long, default_value = "false")]
        json: bool,
    },
    /// Pick the closest speed test server
    BestServer {
        #[arg(short, long, default_value = "false")]
        json: bool,
    },
    /// Measure download speed
    Download {
        #[arg(short, long, default_value = "false")]
        json: bool,
    },
    /// Measure upload speed
    Upload {
        #[arg(short, long, default_value = "false")]
        json: bool,
    },
}

impl InternetCommands {
    pub async fn handle(self, config: &Config) -> anyhow::Result<()> {
        let api = internet_api(config)?;

        match self {
            InternetCommands::Access { json } => {
                let pb = spinner("Checking internet access...");
                let access = api.check_internet_access().await;
                pb.finish_and_clear();
                let access = access?;

                if json {
                    return print_json(&access);
                }

                let mut probes: Vec<_> = access.into_iter().collect();
                probes.sort_by(|a, b| a.0.cmp(&b.0));

                let mut table = TablePrint::new_with_headers(vec!["PROBE", "SITE", "STATUS"]);
                for (name, status) in probes {
                    let state = if status.online {
                        "online".bright_green().to_string()
                    } else {
                        match status.error {
                            Some(error) => format!("{} ({})", "offline".red(), error),
                            None => "offline".red().to_string(),
                        }
                    };
                    table.add_row(vec![
                        name,
                        format!(
                            "{}:{}{}",
                            status.site.hostname, status.site.port, status.site.path
                        ),
                        state,
                    ]);
                }
                table.print();
            }
            InternetCommands::BestServer { json } => {
                let pb = spinner("Looking for the best server...");
                let result = api.check_internet_best_server().await;
                pb.finish_and_clear();
                let result = result?;

                if json {
                    return print_json(&result);
                }

                let server = &result.server;
                println!(
                    "{} {}",
                    server.sponsor.bold(),
                    format!("({}, {})", server.name, server.country).dimmed()
                );
                print_fields(&[
                    ("host", server.host.clone()),
                    ("distance", format!("{:.1} km", server.d)),
                    ("latency", format!("{:.1} ms", server.latency)),
                    ("isp", result.client.isp.clone()),
                ]);
            }
            InternetCommands::Download { json } => {
                let pb = spinner("Measuring download speed...");
                let result = api.check_internet_download_speed().await;
                pb.finish_and_clear();
                let result = result?;

                if json {
                    return print_json(&result);
                }
                print_speed("↓", result.download_mbps(), &result);
            }
            InternetCommands::Upload { json } => {
                let pb = spinner("Measuring upload speed...");
                let result = api.check_internet_upload_speed().await;
                pb.finish_and_clear();
                let result = result?;

                if json {
                    return print_json(&result);
                }
                print_speed("↑", result.upload_mbps(), &result);
            }
        }

        Ok(())
    }
}

fn print_speed(arrow: &str, mbps: f64, result: &SpeedTestResult) {
    println!(
        "{} {} {}",
        arrow,
        format!("{mbps:.2} Mbps").bold(),
        format!("(ping {:.1} ms, {})", result.ping, result.server.sponsor).dimmed()
    );
}
