use crate::{cells, internet, modem, system};
use utoipa::OpenApi;

/// Every JSON shape the client expects from the modem manager, helper and
/// system-information services.
#[derive(OpenApi)]
#[openapi(
    info(title = "Modem Manager Client Models"),
    components(schemas(
        modem::ModemDevice,
        modem::ModemFirmwareRevision,
        modem::ModemDeviceDetails,
        modem::UsbNetMode,
        modem::ModemSimStatus,
        modem::ModemSignalQuality,
        modem::ServingCellState,
        modem::AccessTechnology,
        modem::ServingCellInfo,
        modem::NeighborCellType,
        modem::NeighborCellInfo,
        modem::ModemCellInfo,
        modem::PdpType,
        modem::PdpDataCompression,
        modem::PdpHeaderCompression,
        modem::PdpAddressAllocation,
        modem::PdpRequestType,
        modem::PdpContext,
        modem::ModemClockDetails,
        modem::PositionSource,
        modem::ModemPosition,
        modem::OperatorInfo,
        modem::DataUsageSettings,
        modem::DataUsageControls,
        cells::CellLocation,
        cells::RadioType,
        cells::NearbyCellRadio,
        cells::NearbyCellTower,
        internet::SpeedtestServer,
        internet::SpeedtestClient,
        internet::SpeedTestResult,
        internet::Website,
        internet::WebsiteStatus,
        system::NetworkInterface,
    ))
)]
pub struct ModelsDoc;

pub fn openapi_json() -> serde_json::Result<String> {
    ModelsDoc::openapi().to_pretty_json()
}
