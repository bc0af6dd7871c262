use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SpeedtestServer {
    pub url: String,
    pub lat: String,
    pub lon: String,
    pub name: String,
    pub country: String,
    pub cc: String,
    pub sponsor: String,
    pub id: String,
    pub host: String,
    /// Distance in km
    pub d: f64,
    pub latency: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SpeedtestClient {
    pub ip: String,
    pub lat: String,
    pub lon: String,
    pub isp: String,
    pub isprating: String,
    pub rating: String,
    pub ispdlavg: String,
    pub ispulavg: String,
    pub loggedin: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SpeedTestResult {
    /// bits per second
    pub download: f64,
    /// bits per second
    pub upload: f64,
    /// milliseconds
    pub ping: f64,
    pub server: SpeedtestServer,
    pub timestamp: DateTime<Utc>,
    pub bytes_sent: u64,
    pub bytes_received: u64,
    pub share: Option<String>,
    pub client: SpeedtestClient,
}

impl SpeedTestResult {
    pub fn download_mbps(&self) -> f64 {
        self.download / 1_000_000.0
    }

    pub fn upload_mbps(&self) -> f64 {
        self.upload / 1_000_000.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Website {
    pub hostname: String,
    pub path: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WebsiteStatus {
    pub site: Website,
    pub online: bool,
    pub error: Option<String>,
}
