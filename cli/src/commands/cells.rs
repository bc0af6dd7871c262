use super::{modem_api, print_json};
use crate::{
    config::Config,
    print::{TablePrint, print_fields},
};
use clap::Subcommand;
use colored::Colorize;
use models::{
    cells::{CellLocation, CellQuery, NearbyQuery},
    modem::ServingCellInfo,
};

#[derive(Subcommand, Debug)]
pub enum CellsCommands {
    /// Locate a cell tower by its identifiers
    Locate {
        /// Mobile country code
        #[arg(long)]
        mcc: i64,
        /// Mobile network code
        #[arg(long)]
        mnc: i64,
        /// Location (tracking) area code
        #[arg(long)]
        lac: i64,
        #[arg(long)]
        cell_id: i64,
        #[arg(short, long, default_value = "false")]
        json: bool,
    },
    /// Locate the cell a modem is currently served by
    Serving {
        /// Modem id
        id: String,
        #[arg(short, long, default_value = "false")]
        json: bool,
    },
    /// List cell towers around a coordinate
    Nearby {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        #[arg(short, long, default_value = "false")]
        json: bool,
    },
}

impl CellsCommands {
    pub async fn handle(self, config: &Config) -> anyhow::Result<()> {
        let api = modem_api(config)?;

        match self {
            CellsCommands::Locate {
                mcc,
                mnc,
                lac,
                cell_id,
                json,
            } => {
                let query = CellQuery {
                    mcc,
                    mnc,
                    lac,
                    cell_id,
                };
                let location = api.fetch_cell_coordinates(&query).await?;
                if json {
                    return print_json(&location);
                }
                print_location(&location);
            }
            CellsCommands::Serving { id, json } => {
                let cells = api.fetch_cell_info_by_id(&id).await?;
                let query = serving_query(&cells.serving_cell);
                let location = api.fetch_cell_coordinates(&query).await?;
                if json {
                    return print_json(&location);
                }

                println!(
                    "{} {}",
                    cells.serving_cell.rat.to_string().bold(),
                    format!(
                        "(mcc {} mnc {} lac {} cell {})",
                        query.mcc, query.mnc, query.lac, query.cell_id
                    )
                    .dimmed()
                );
                print_location(&location);
            }
            CellsCommands::Nearby { lat, lon, json } => {
                let towers = api
                    .fetch_nearby_cells_coordinates(&NearbyQuery { lat, lon })
                    .await?;
                if json {
                    return print_json(&towers);
                }

                if towers.is_empty() {
                    println!("No cell towers found");
                    return Ok(());
                }

                let mut table =
                    TablePrint::new_with_headers(vec!["RADIO", "LATITUDE", "LONGITUDE", "RANGE"]);
                for tower in &towers {
                    table.add_row(vec![
                        tower.radio.kind.to_string(),
                        tower.latitude.to_string(),
                        tower.longitude.to_string(),
                        format!("{} m", tower.range),
                    ]);
                }
                table.print();
            }
        }

        Ok(())
    }
}

fn serving_query(cell: &ServingCellInfo) -> CellQuery {
    CellQuery {
        mcc: cell.mobile_country_code,
        mnc: cell.mobile_network_code,
        lac: cell.area_id,
        cell_id: cell.cell_id,
    }
}

fn print_location(location: &CellLocation) {
    print_fields(&[
        ("latitude", location.latitude.to_string()),
        ("longitude", location.longitude.to_string()),
        ("range", format!("{} m", location.range)),
    ]);
}
