use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use std::{collections::BTreeMap, fmt, str::FromStr};
use utoipa::ToSchema;

/// Descriptor of a modem attached to the companion computer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModemDevice {
    /// sysfs USB path of the device, e.g. `/sys/devices/platform/scb/.../usb1/1-1`
    pub device: String,
    /// Stable identifier derived by the backend from the device path
    pub id: String,
    pub manufacturer: String,
    pub product: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModemFirmwareRevision {
    pub firmware_revision: String,
    pub timestamp: String,
    pub authors: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModemDeviceDetails {
    #[serde(flatten)]
    pub descriptor: ModemDevice,
    pub imei: String,
    pub imsi: String,
    pub serial_number: String,
    pub firmware_revision: ModemFirmwareRevision,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown USB net mode '{0}', expected one of qmi, ecm, mbim")]
pub struct UnknownUsbNetMode(pub String);

/// Networking mode the modem exposes to the host over USB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum UsbNetMode {
    #[serde(rename = "0")]
    Qmi,
    #[serde(rename = "1")]
    Ecm,
    #[serde(rename = "2")]
    Mbim,
}

impl UsbNetMode {
    /// Value used on the wire and as path segment when changing the mode.
    pub fn as_digit(&self) -> &'static str {
        match self {
            UsbNetMode::Qmi => "0",
            UsbNetMode::Ecm => "1",
            UsbNetMode::Mbim => "2",
        }
    }
}

impl fmt::Display for UsbNetMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UsbNetMode::Qmi => "QMI",
            UsbNetMode::Ecm => "ECM",
            UsbNetMode::Mbim => "MBIM",
        };
        f.write_str(name)
    }
}

impl FromStr for UsbNetMode {
    type Err = UnknownUsbNetMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "qmi" | "0" => Ok(UsbNetMode::Qmi),
            "ecm" | "1" => Ok(UsbNetMode::Ecm),
            "mbim" | "2" => Ok(UsbNetMode::Mbim),
            _ => Err(UnknownUsbNetMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ModemSimStatus {
    #[serde(rename = "0")]
    Removed,
    #[serde(rename = "1")]
    Inserted,
    #[serde(rename = "2")]
    Unknown,
}

impl fmt::Display for ModemSimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            ModemSimStatus::Removed => "removed",
            ModemSimStatus::Inserted => "inserted",
            ModemSimStatus::Unknown => "unknown",
        };
        f.write_str(status)
    }
}

/// Raw `AT+CSQ` reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModemSignalQuality {
    /// 0..=31, 99 when not known or not detectable
    pub signal_strength: i32,
    /// RXQUAL class 0..=7, 99 when not known or not detectable
    pub bit_error_rate: i32,
}

impl ModemSignalQuality {
    /// Received signal strength in dBm, `None` when the modem reports it as unknown.
    pub fn rssi_dbm(&self) -> Option<i32> {
        match self.signal_strength {
            n @ 0..=31 => Some(-113 + 2 * n),
            _ => None,
        }
    }

    /// Signal bars from 0 to 4.
    pub fn bars(&self) -> u8 {
        match self.signal_strength {
            0..=9 => 1,
            10..=14 => 2,
            15..=19 => 3,
            20..=31 => 4,
            _ => 0,
        }
    }
}

// Cell towers

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServingCellState {
    Search,
    Limsrv,
    Noconn,
    Connect,
}

impl fmt::Display for ServingCellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self {
            ServingCellState::Search => "SEARCH",
            ServingCellState::Limsrv => "LIMSRV",
            ServingCellState::Noconn => "NOCONN",
            ServingCellState::Connect => "CONNECT",
        };
        f.write_str(state)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessTechnology {
    Gsm,
    Wcdma,
    Lte,
    Cdma,
    Hdr,
    Tdscdma,
}

impl fmt::Display for AccessTechnology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rat = match self {
            AccessTechnology::Gsm => "GSM",
            AccessTechnology::Wcdma => "WCDMA",
            AccessTechnology::Lte => "LTE",
            AccessTechnology::Cdma => "CDMA",
            AccessTechnology::Hdr => "HDR",
            AccessTechnology::Tdscdma => "TDSCDMA",
        };
        f.write_str(rat)
    }
}

/// Serving cell as reported by the modem. Most radio fields are optional since
/// not every modem or access technology provides them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServingCellInfo {
    pub state: ServingCellState,
    pub rat: AccessTechnology,
    pub mobile_country_code: i64,
    pub mobile_network_code: i64,
    pub area_id: i64,
    pub cell_id: i64,

    pub signal_quality_dbm: Option<f64>,
    pub signal_inr_db: Option<f64>,
    pub up_bandwidth_mhz: Option<f64>,
    pub dl_bandwidth_mhz: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum NeighborCellType {
    #[serde(rename = "neighbourcell")]
    NeighbourCell,
    #[serde(rename = "neighbourcell intra")]
    NeighbourCellIntra,
    #[serde(rename = "neighbourcell inter")]
    NeighbourCellInter,
}

impl fmt::Display for NeighborCellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            NeighborCellType::NeighbourCell => "neighbour",
            NeighborCellType::NeighbourCellIntra => "intra",
            NeighborCellType::NeighbourCellInter => "inter",
        };
        f.write_str(kind)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NeighborCellInfo {
    pub cell_type: NeighborCellType,
    pub rat: AccessTechnology,

    // Only GSM neighbours carry location parameters
    pub mobile_country_code: Option<i64>,
    pub mobile_network_code: Option<i64>,
    pub area_id: Option<i64>,
    pub cell_id: Option<i64>,

    pub signal_quality_dbm: Option<f64>,
    pub signal_inr_db: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ModemCellInfo {
    pub serving_cell: ServingCellInfo,
    pub neighbor_cells: Vec<NeighborCellInfo>,
}

// PDP contexts

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum PdpType {
    Ip,
    Ppp,
    Ipv6,
    Ipv4v6,
}

impl fmt::Display for PdpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let protocol = match self {
            PdpType::Ip => "IP",
            PdpType::Ppp => "PPP",
            PdpType::Ipv6 => "IPV6",
            PdpType::Ipv4v6 => "IPV4V6",
        };
        f.write_str(protocol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PdpDataCompression {
    #[serde(rename = "0")]
    Off,
    #[serde(rename = "1")]
    On,
    #[serde(rename = "2")]
    V42bis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PdpHeaderCompression {
    #[serde(rename = "0")]
    Off,
    #[serde(rename = "1")]
    On,
    #[serde(rename = "2")]
    Rfc1144,
    #[serde(rename = "3")]
    Rfc2507,
    #[serde(rename = "4")]
    Rfc3095,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PdpAddressAllocation {
    #[serde(rename = "0")]
    Nas,
    #[serde(rename = "1")]
    Dhcp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PdpRequestType {
    #[serde(rename = "0")]
    Normal,
    #[serde(rename = "1")]
    Emergency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PdpContext {
    pub context_id: i32,
    pub protocol: PdpType,
    pub access_point_name: String,
    pub ip_address: String,
    pub data_compression: PdpDataCompression,
    pub header_compression: PdpHeaderCompression,
    pub ipv6_address: PdpAddressAllocation,
    pub status: PdpRequestType,
}

// Clock

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockParseError {
    #[error("invalid modem date '{0}', expected yy/MM/dd")]
    Date(String),
    #[error("invalid modem time '{0}', expected hh:mm:ss±zz")]
    Time(String),
    #[error("invalid timezone offset '{0}'")]
    Offset(String),
}

/// Halves of an `AT+CCLK?` answer, `"24/05/17"` and `"13:45:10+08"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ModemClockDetails {
    pub date: String,
    pub time: String,
}

impl ModemClockDetails {
    /// The timezone suffix counts quarters of an hour.
    pub fn to_datetime(&self) -> Result<DateTime<FixedOffset>, ClockParseError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%y/%m/%d")
            .map_err(|_| ClockParseError::Date(self.date.clone()))?;

        let time = self.time.trim();
        let split = time
            .rfind(['+', '-'])
            .ok_or_else(|| ClockParseError::Offset(self.time.clone()))?;
        let (clock, offset) = time.split_at(split);

        let clock = NaiveTime::parse_from_str(clock, "%H:%M:%S")
            .map_err(|_| ClockParseError::Time(self.time.clone()))?;
        let quarters: i32 = offset
            .parse()
            .map_err(|_| ClockParseError::Offset(offset.to_string()))?;
        let offset = quarters
            .checked_mul(15 * 60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| ClockParseError::Offset(offset.to_string()))?;

        offset
            .from_local_datetime(&date.and_time(clock))
            .single()
            .ok_or_else(|| ClockParseError::Time(self.time.clone()))
    }
}

// Position

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PositionSource {
    /// GNSS receiver of the modem
    Internal,
    /// Position fed by the vehicle autopilot
    External,
}

impl fmt::Display for PositionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionSource::Internal => f.write_str("internal"),
            PositionSource::External => f.write_str("external"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ModemPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub source: Option<PositionSource>,
}

// Operator

/// `AT+COPS?` answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OperatorInfo {
    pub mode: i32,
    pub format: Option<i32>,
    pub operator: Option<String>,
    pub access_technology: Option<i32>,
}

// Data usage

pub const DEFAULT_DATA_LIMIT: u64 = 2 * 1024 * 1024 * 1024;

fn default_data_limit() -> u64 {
    DEFAULT_DATA_LIMIT
}

fn default_reset_day() -> u8 {
    1
}

/// Data usage bookkeeping of a modem. `data_used` and every data point are
/// `(rx, tx)` byte pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DataUsageSettings {
    #[serde(default)]
    pub data_control_enabled: bool,
    #[serde(default = "default_data_limit")]
    pub data_limit: u64,
    #[serde(default = "default_reset_day")]
    pub data_reset_day: u8,
    #[serde(default)]
    #[schema(value_type = Vec<u64>)]
    pub data_used: (u64, u64),
    /// Keyed by day of month
    #[serde(default, deserialize_with = "deserialize_data_points")]
    #[schema(value_type = Object)]
    pub data_points: BTreeMap<u8, (u64, u64)>,
}

impl Default for DataUsageSettings {
    fn default() -> Self {
        Self {
            data_control_enabled: false,
            data_limit: DEFAULT_DATA_LIMIT,
            data_reset_day: default_reset_day(),
            data_used: (0, 0),
            data_points: BTreeMap::new(),
        }
    }
}

impl DataUsageSettings {
    pub fn total_data_used(&self) -> u64 {
        self.data_used.0.saturating_add(self.data_used.1)
    }

    pub fn limit_reached(&self) -> bool {
        self.total_data_used() > self.data_limit
    }
}

/// Freshly created settings carry `data_points` as an empty list instead of a map.
fn deserialize_data_points<'de, D>(deserializer: D) -> Result<BTreeMap<u8, (u64, u64)>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DataPoints {
        // Untagged buffering hands map keys over as strings
        ByDay(BTreeMap<String, (u64, u64)>),
        Sequence(Vec<(u64, u64)>),
    }

    Ok(match DataPoints::deserialize(deserializer)? {
        DataPoints::ByDay(points) => points
            .into_iter()
            .map(|(day, point)| {
                day.parse::<u8>()
                    .map(|day| (day, point))
                    .map_err(|_| D::Error::custom(format!("invalid day of month '{day}'")))
            })
            .collect::<Result<_, _>>()?,
        DataPoints::Sequence(points) => points
            .into_iter()
            .enumerate()
            .map(|(index, point)| {
                u8::try_from(index + 1)
                    .map(|day| (day, point))
                    .map_err(|_| D::Error::custom(format!("too many data points ({})", index + 1)))
            })
            .collect::<Result<_, _>>()?,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DataUsageControls {
    pub data_control_enabled: bool,
    pub data_limit: u64,
    pub data_reset_day: u8,
}

impl From<&DataUsageSettings> for DataUsageControls {
    fn from(settings: &DataUsageSettings) -> Self {
        Self {
            data_control_enabled: settings.data_control_enabled,
            data_limit: settings.data_limit,
            data_reset_day: settings.data_reset_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{Datelike, Timelike};
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_details_flatten_descriptor() {
        let details: ModemDeviceDetails = serde_json::from_value(json!({
            "device": "/sys/devices/platform/scb/fd500000.pcie/usb2/2-1",
            "id": "5d41402abc4b2a76b9719d911017c592",
            "manufacturer": "Quectel",
            "product": "EG25",
            "imei": "867698041234567",
            "imsi": "724051234567890",
            "serial_number": "MPY21A0012",
            "firmware_revision": {
                "firmware_revision": "EG25GGBR07A08M2G_BETA0416",
                "timestamp": "Apr 16 2020 20:32:01",
                "authors": "Authors: QCT"
            }
        }))
        .unwrap();

        assert_eq!(details.descriptor.product, "EG25");
        assert_eq!(details.descriptor.id, "5d41402abc4b2a76b9719d911017c592");
        assert_eq!(
            details.firmware_revision.firmware_revision,
            "EG25GGBR07A08M2G_BETA0416"
        );
    }

    #[rstest]
    #[case("qmi", UsbNetMode::Qmi)]
    #[case("ECM", UsbNetMode::Ecm)]
    #[case("2", UsbNetMode::Mbim)]
    #[case(" mbim ", UsbNetMode::Mbim)]
    fn test_usb_net_mode_from_str(#[case] input: &str, #[case] expected: UsbNetMode) {
        assert_eq!(input.parse::<UsbNetMode>().unwrap(), expected);
    }

    #[test]
    fn test_usb_net_mode_wire_format() {
        assert_eq!(serde_json::to_string(&UsbNetMode::Ecm).unwrap(), "\"1\"");
        let mode: UsbNetMode = serde_json::from_str("\"2\"").unwrap();
        assert_eq!(mode, UsbNetMode::Mbim);
        assert_eq!(mode.as_digit(), "2");
        assert_matches!("rndis".parse::<UsbNetMode>(), Err(UnknownUsbNetMode(_)));
    }

    #[rstest]
    #[case(0, Some(-113), 1)]
    #[case(15, Some(-83), 3)]
    #[case(31, Some(-51), 4)]
    #[case(99, None, 0)]
    fn test_signal_quality(#[case] strength: i32, #[case] dbm: Option<i32>, #[case] bars: u8) {
        let quality = ModemSignalQuality {
            signal_strength: strength,
            bit_error_rate: 99,
        };
        assert_eq!(quality.rssi_dbm(), dbm);
        assert_eq!(quality.bars(), bars);
    }

    #[test]
    fn test_cell_info_decodes_backend_shape() {
        let info: ModemCellInfo = serde_json::from_value(json!({
            "serving_cell": {
                "state": "NOCONN",
                "rat": "LTE",
                "mobile_country_code": 724,
                "mobile_network_code": 5,
                "area_id": 14001,
                "cell_id": 26453761,
                "signal_quality_dbm": -97,
                "signal_inr_db": 12,
                "up_bandwidth_mhz": 1.4,
                "dl_bandwidth_mhz": null
            },
            "neighbor_cells": [
                {
                    "cell_type": "neighbourcell intra",
                    "rat": "LTE",
                    "signal_quality_dbm": -104,
                    "signal_inr_db": 3
                },
                {
                    "cell_type": "neighbourcell",
                    "rat": "WCDMA",
                    "signal_quality_dbm": -91.5
                }
            ]
        }))
        .unwrap();

        assert_eq!(info.serving_cell.state, ServingCellState::Noconn);
        assert_eq!(info.serving_cell.up_bandwidth_mhz, Some(1.4));
        assert_eq!(info.serving_cell.dl_bandwidth_mhz, None);
        assert_eq!(info.neighbor_cells.len(), 2);
        assert_eq!(
            info.neighbor_cells[0].cell_type,
            NeighborCellType::NeighbourCellIntra
        );
        assert_eq!(info.neighbor_cells[1].rat, AccessTechnology::Wcdma);
        assert_eq!(info.neighbor_cells[1].cell_id, None);
    }

    #[test]
    fn test_pdp_context_digit_enums() {
        let contexts: Vec<PdpContext> = serde_json::from_value(json!([{
            "context_id": 1,
            "protocol": "IPV4V6",
            "access_point_name": "zap.vivo.com.br",
            "ip_address": "0.0.0.0",
            "data_compression": "0",
            "header_compression": "4",
            "ipv6_address": "1",
            "status": "0"
        }]))
        .unwrap();

        let context = &contexts[0];
        assert_eq!(context.protocol, PdpType::Ipv4v6);
        assert_eq!(context.header_compression, PdpHeaderCompression::Rfc3095);
        assert_eq!(context.ipv6_address, PdpAddressAllocation::Dhcp);
        assert_eq!(context.status, PdpRequestType::Normal);
    }

    #[test]
    fn test_clock_to_datetime() {
        let clock = ModemClockDetails {
            date: "24/05/17".to_string(),
            time: "13:45:10-12".to_string(),
        };
        let datetime = clock.to_datetime().unwrap();

        assert_eq!(datetime.year(), 2024);
        assert_eq!(datetime.month(), 5);
        assert_eq!(datetime.hour(), 13);
        assert_eq!(datetime.offset().local_minus_utc(), -3 * 3600);
    }

    #[rstest]
    #[case("24-05-17", "13:45:10+00")]
    #[case("24/05/17", "13:45:10")]
    #[case("24/05/17", "25:45:10+00")]
    #[case("24/05/17", "13:45:10+xx")]
    #[case("24/05/17", "13:45:10+2000000000")]
    #[case("24/05/17", "13:45:10-2000000000")]
    fn test_clock_rejects_malformed(#[case] date: &str, #[case] time: &str) {
        let clock = ModemClockDetails {
            date: date.to_string(),
            time: time.to_string(),
        };
        assert!(clock.to_datetime().is_err());
    }

    #[test]
    fn test_data_usage_defaults_and_list_points() {
        let settings: DataUsageSettings = serde_json::from_value(json!({
            "data_used": [1024, 2048],
            "data_points": []
        }))
        .unwrap();

        assert_eq!(settings.data_limit, DEFAULT_DATA_LIMIT);
        assert_eq!(settings.data_reset_day, 1);
        assert!(!settings.data_control_enabled);
        assert!(settings.data_points.is_empty());
        assert_eq!(settings.total_data_used(), 3072);
        assert!(!settings.limit_reached());
    }

    #[test]
    fn test_clock_rejects_overflowing_offset() {
        let clock = ModemClockDetails {
            date: "24/05/17".to_string(),
            time: "13:45:10+2000000000".to_string(),
        };
        assert_matches!(clock.to_datetime(), Err(ClockParseError::Offset(_)));
    }

    #[test]
    fn test_data_usage_rejects_too_many_list_points() {
        let points: Vec<_> = (0..300).map(|_| json!([1, 1])).collect();
        let result = serde_json::from_value::<DataUsageSettings>(json!({
            "data_used": [0, 0],
            "data_points": points
        }));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("too many data points"), "{err}");
    }

    #[test]
    fn test_data_usage_list_points_numbered_from_day_one() {
        let settings: DataUsageSettings = serde_json::from_value(json!({
            "data_used": [0, 0],
            "data_points": [[1, 2], [3, 4]]
        }))
        .unwrap();

        assert_eq!(settings.data_points.get(&1), Some(&(1, 2)));
        assert_eq!(settings.data_points.get(&2), Some(&(3, 4)));
    }

    #[test]
    fn test_data_usage_points_by_day() {
        let settings: DataUsageSettings = serde_json::from_value(json!({
            "data_control_enabled": true,
            "data_limit": 1000,
            "data_reset_day": 5,
            "data_used": [600, 500],
            "data_points": { "5": [100, 50], "6": [600, 500] }
        }))
        .unwrap();

        assert_eq!(settings.data_points.get(&6), Some(&(600, 500)));
        assert!(settings.limit_reached());

        let controls = DataUsageControls::from(&settings);
        assert_eq!(controls.data_reset_day, 5);
        assert!(controls.data_control_enabled);
    }
}
