use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Estimated location of a cell tower.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CellLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// Coverage radius in meters
    pub range: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RadioType {
    Gsm,
    Umts,
    Lte,
    Cdma,
    Nr,
    #[serde(other)]
    Other,
}

impl fmt::Display for RadioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let radio = match self {
            RadioType::Gsm => "GSM",
            RadioType::Umts => "UMTS",
            RadioType::Lte => "LTE",
            RadioType::Cdma => "CDMA",
            RadioType::Nr => "NR",
            RadioType::Other => "OTHER",
        };
        f.write_str(radio)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NearbyCellRadio {
    #[serde(rename = "type")]
    pub kind: RadioType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NearbyCellTower {
    pub latitude: f64,
    pub longitude: f64,
    pub range: i64,
    pub radio: NearbyCellRadio,
}

/// Query of `/cells/coordinate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellQuery {
    pub mcc: i64,
    pub mnc: i64,
    pub lac: i64,
    pub cell_id: i64,
}

/// Query of `/cells/nearby`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lon: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nearby_tower_radio() {
        let towers: Vec<NearbyCellTower> = serde_json::from_value(json!([
            { "latitude": -22.9, "longitude": -43.2, "range": 1000, "radio": { "type": "LTE" } },
            { "latitude": -22.8, "longitude": -43.1, "range": 3145, "radio": { "type": "WIMAX" } }
        ]))
        .unwrap();

        assert_eq!(towers[0].radio.kind, RadioType::Lte);
        assert_eq!(towers[1].radio.kind, RadioType::Other);
    }
}
