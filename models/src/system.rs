use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Counters of one network interface. Non-`total_` counters cover the last
/// sampling window of the system-information service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NetworkInterface {
    pub description: String,
    pub errors_on_received: u64,
    pub errors_on_transmitted: u64,
    pub ips: Vec<String>,
    pub is_loopback: bool,
    pub is_up: bool,
    pub mac: String,
    pub name: String,
    pub packets_received: u64,
    pub packets_transmitted: u64,
    #[serde(rename = "received_B")]
    pub received_bytes: u64,
    pub total_errors_on_received: u64,
    pub total_errors_on_transmitted: u64,
    pub total_packets_received: u64,
    pub total_packets_transmitted: u64,
    #[serde(rename = "total_received_B")]
    pub total_received_bytes: u64,
    #[serde(rename = "total_transmitted_B")]
    pub total_transmitted_bytes: u64,
    #[serde(rename = "transmitted_B")]
    pub transmitted_bytes: u64,
}
