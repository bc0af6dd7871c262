use super::{modem_api, print_json};
use crate::{config::Config, print::TablePrint};
use modem_client::utils::usb_from_device;

pub async fn handle_modems(config: &Config, json: bool) -> anyhow::Result<()> {
    let api = modem_api(config)?;
    let modems = api.fetch().await?;

    if json {
        return print_json(&modems);
    }

    if modems.is_empty() {
        println!("No modems found");
        return Ok(());
    }

    let mut table = TablePrint::new_with_headers(vec!["ID", "USB", "MANUFACTURER", "PRODUCT"]);
    for modem in &modems {
        table.add_row(vec![
            modem.id.clone(),
            usb_from_device(&modem.device),
            modem.manufacturer.clone(),
            modem.product.clone(),
        ]);
    }
    table.print();

    Ok(())
}
