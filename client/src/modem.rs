use crate::api::{HandleApiError, RestClient};
use anyhow::Result;
use models::{
    cells::{CellLocation, CellQuery, NearbyCellTower, NearbyQuery},
    modem::{
        DataUsageControls, DataUsageSettings, ModemCellInfo, ModemClockDetails, ModemDevice,
        ModemDeviceDetails, ModemPosition, ModemSignalQuality, ModemSimStatus, OperatorInfo,
        PdpContext, UsbNetMode,
    },
};
use tracing::debug;
use url::Url;

pub const MODEM_MANAGER_V1_API: &str = "/v1.0";

/// Where the extension listens when the client runs on the vehicle itself.
pub const DEFAULT_SERVER: &str = "http://localhost:9119";

/// Seconds the backend waits between writing an AT command and reading its answer.
pub const DEFAULT_COMMAND_DELAY: f64 = 0.3;

/// Client of the modem manager REST API (`{server}/v1.0`).
#[derive(Debug, Clone)]
pub struct ModemManagerAPI {
    rest: RestClient,
}

impl ModemManagerAPI {
    pub fn new(server: &str) -> Result<Self> {
        let base = format!("{}{}", server.trim_end_matches('/'), MODEM_MANAGER_V1_API);

        Ok(Self {
            rest: RestClient::new(&base)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        self.rest.base()
    }

    fn modem_url(&self, modem_id: &str, segments: &[&str]) -> Result<Url> {
        self.rest
            .url(["modem", modem_id].iter().chain(segments.iter()))
    }

    async fn post_empty(&self, url: Url) -> Result<()> {
        debug!("POST {}", url);

        self.rest
            .client
            .post(url)
            .send()
            .await?
            .handle_error()
            .await?;

        Ok(())
    }

    async fn put_empty(&self, url: Url) -> Result<()> {
        debug!("PUT {}", url);

        self.rest
            .client
            .put(url)
            .send()
            .await?
            .handle_error()
            .await?;

        Ok(())
    }

    /// List device descriptor of all connected modems.
    pub async fn fetch(&self) -> Result<Vec<ModemDevice>> {
        self.rest.get_json(self.rest.url(["modem"])?).await
    }

    pub async fn fetch_by_id(&self, modem_id: &str) -> Result<ModemDeviceDetails> {
        self.rest
            .get_json(self.modem_url(modem_id, &["details"])?)
            .await
    }

    pub async fn fetch_signal_strength_by_id(&self, modem_id: &str) -> Result<ModemSignalQuality> {
        self.rest
            .get_json(self.modem_url(modem_id, &["signal"])?)
            .await
    }

    /// Serving cell and neighbour cells seen by the modem.
    pub async fn fetch_cell_info_by_id(&self, modem_id: &str) -> Result<ModemCellInfo> {
        self.rest
            .get_json(self.modem_url(modem_id, &["cell"])?)
            .await
    }

    /// Executes a raw AT command and returns the modem answer. `delay` is the
    /// wait in seconds before the backend reads the serial port.
    pub async fn command_by_id(
        &self,
        modem_id: &str,
        command: &str,
        delay: Option<f64>,
    ) -> Result<String> {
        let mut url = self.modem_url(modem_id, &["commander"])?;
        url.query_pairs_mut()
            .append_pair("command", command)
            .append_pair(
                "delay",
                &delay.unwrap_or(DEFAULT_COMMAND_DELAY).to_string(),
            );

        debug!("POST {}", url);

        let resp = self
            .rest
            .client
            .post(url)
            .send()
            .await?
            .handle_error()
            .await?;

        let text = resp.text().await?;

        // The answer usually comes JSON encoded, older backends send it raw
        Ok(serde_json::from_str::<String>(&text).unwrap_or(text))
    }

    pub async fn reboot_by_id(&self, modem_id: &str) -> Result<()> {
        self.post_empty(self.modem_url(modem_id, &["reboot"])?)
            .await
    }

    /// Resets the modem to factory settings.
    pub async fn reset_by_id(&self, modem_id: &str) -> Result<()> {
        self.post_empty(self.modem_url(modem_id, &["reset"])?)
            .await
    }

    pub async fn fetch_clock_by_id(&self, modem_id: &str) -> Result<ModemClockDetails> {
        self.rest
            .get_json(self.modem_url(modem_id, &["clock"])?)
            .await
    }

    pub async fn fetch_position_by_id(&self, modem_id: &str) -> Result<ModemPosition> {
        self.rest
            .get_json(self.modem_url(modem_id, &["position"])?)
            .await
    }

    pub async fn fetch_sim_status_by_id(&self, modem_id: &str) -> Result<ModemSimStatus> {
        self.rest
            .get_json(self.modem_url(modem_id, &["sim_status"])?)
            .await
    }

    pub async fn fetch_usb_mode_by_id(&self, modem_id: &str) -> Result<UsbNetMode> {
        self.rest
            .get_json(self.modem_url(modem_id, &["config", "usb_net"])?)
            .await
    }

    /// The modem only switches mode after a reboot.
    pub async fn set_usb_mode_by_id(&self, modem_id: &str, mode: UsbNetMode) -> Result<()> {
        self.put_empty(self.modem_url(modem_id, &["config", "usb_net", mode.as_digit()])?)
            .await
    }

    pub async fn fetch_pdp_info_by_id(&self, modem_id: &str) -> Result<Vec<PdpContext>> {
        self.rest
            .get_json(self.modem_url(modem_id, &["pdp"])?)
            .await
    }

    pub async fn fetch_operator_info_by_id(&self, modem_id: &str) -> Result<OperatorInfo> {
        self.rest
            .get_json(self.modem_url(modem_id, &["operator"])?)
            .await
    }

    pub async fn set_apn_by_profile_by_id(
        &self,
        modem_id: &str,
        profile: u8,
        apn: &str,
    ) -> Result<()> {
        let profile = profile.to_string();
        self.put_empty(self.modem_url(modem_id, &["pdp", profile.as_str(), "apn", apn])?)
            .await
    }

    pub async fn fetch_data_usage_by_id(&self, modem_id: &str) -> Result<DataUsageSettings> {
        self.rest
            .get_json(self.modem_url(modem_id, &["usage", "details"])?)
            .await
    }

    pub async fn set_data_usage_control_by_id(
        &self,
        modem_id: &str,
        control: &DataUsageControls,
    ) -> Result<DataUsageSettings> {
        let url = self.modem_url(modem_id, &["usage", "control"])?;

        debug!("PUT {}", url);

        let resp = self
            .rest
            .client
            .put(url)
            .json(control)
            .send()
            .await?
            .handle_error()
            .await?;

        Ok(resp.json().await?)
    }

    pub async fn fetch_cell_coordinates(&self, query: &CellQuery) -> Result<CellLocation> {
        let mut url = self.rest.url(["cells", "coordinate"])?;
        url.set_query(Some(&serde_html_form::to_string(query)?));

        self.rest.get_json(url).await
    }

    pub async fn fetch_nearby_cells_coordinates(
        &self,
        query: &NearbyQuery,
    ) -> Result<Vec<NearbyCellTower>> {
        let mut url = self.rest.url(["cells", "nearby"])?;
        url.set_query(Some(&serde_html_form::to_string(query)?));

        self.rest.get_json(url).await
    }
}
