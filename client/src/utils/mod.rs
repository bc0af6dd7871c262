pub mod chart;
pub mod device;
pub mod units;

pub use chart::{base_chart_options, data_usage_chart};
pub use device::{thumbnail_from_product, usb_from_device};
pub use units::{ByteUnit, bytes_to_level, format_bytes, level_to_bytes, parse_byte_size};
