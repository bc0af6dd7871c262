use crate::{api::RestClient, modem::MODEM_MANAGER_V1_API};
use anyhow::Result;
use models::system::NetworkInterface;
use url::Url;

/// The modem manager proxies the host system-information service under this prefix.
pub const SYSTEM_INFO_API: &str = "/blueos/system-information";

#[derive(Debug, Clone)]
pub struct SystemInfoAPI {
    rest: RestClient,
}

impl SystemInfoAPI {
    pub fn new(server: &str) -> Result<Self> {
        let base = format!(
            "{}{}{}",
            server.trim_end_matches('/'),
            MODEM_MANAGER_V1_API,
            SYSTEM_INFO_API
        );

        Ok(Self {
            rest: RestClient::new(&base)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        self.rest.base()
    }

    pub async fn fetch_network_info(&self) -> Result<Vec<NetworkInterface>> {
        self.rest
            .get_json(self.rest.url(["system", "network"])?)
            .await
    }
}
