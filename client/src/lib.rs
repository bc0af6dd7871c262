//! HTTP clients for the cellular modem manager extension, the host helper
//! service and the system-information proxy, plus the formatting helpers used
//! to present their data.

pub mod api;
pub mod internet;
pub mod modem;
pub mod system_info;
pub mod utils;

pub use internet::InternetAPI;
pub use modem::ModemManagerAPI;
pub use system_info::SystemInfoAPI;
