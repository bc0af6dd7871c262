use crate::api::RestClient;
use anyhow::Result;
use models::internet::{SpeedTestResult, WebsiteStatus};
use std::collections::HashMap;
use url::Url;

pub const DEFAULT_HELPER_API: &str = "http://blueos.internal/helper/latest";

/// Client of the host helper service, which checks reachability and runs speed tests.
#[derive(Debug, Clone)]
pub struct InternetAPI {
    rest: RestClient,
}

impl InternetAPI {
    pub fn new(helper: &str) -> Result<Self> {
        Ok(Self {
            rest: RestClient::new(helper)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        self.rest.base()
    }

    /// Reachability of each probe website, keyed by probe name.
    pub async fn check_internet_access(&self) -> Result<HashMap<String, WebsiteStatus>> {
        self.rest
            .get_json(self.rest.url(["check_internet_access"])?)
            .await
    }

    pub async fn check_internet_best_server(&self) -> Result<SpeedTestResult> {
        self.rest
            .get_json(self.rest.url(["internet_best_server"])?)
            .await
    }

    pub async fn check_internet_download_speed(&self) -> Result<SpeedTestResult> {
        self.rest
            .get_json(self.rest.url(["internet_download_speed"])?)
            .await
    }

    pub async fn check_internet_upload_speed(&self) -> Result<SpeedTestResult> {
        self.rest
            .get_json(self.rest.url(["internet_upload_speed"])?)
            .await
    }
}
