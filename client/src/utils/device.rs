use regex::Regex;
use std::sync::LazyLock;

pub const UNKNOWN_USB: &str = "UNKNOWN";

static USB_BUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(usb[0-9]+)").expect("USB bus pattern is valid"));

/// Extracts the USB bus name from a sysfs device path, e.g. `USB2` for
/// `/sys/devices/platform/scb/fd500000.pcie/usb2/2-1`.
pub fn usb_from_device(device: &str) -> String {
    USB_BUS
        .captures(device)
        .map(|captures| captures[1].to_uppercase())
        .unwrap_or_else(|| UNKNOWN_USB.to_string())
}

/// Path of the product picture served by the extension.
pub fn thumbnail_from_product(product: &str) -> String {
    format!("/static/thumbs/{}.png", product.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/sys/devices/platform/scb/fd500000.pcie/pci0000:00/0000:00:00.0/0000:01:00.0/usb1/1-1/1-1.3", "USB1")]
    #[case("/sys/devices/platform/soc/3f980000.usb/usb12/12-1", "USB12")]
    #[case("/usb3", "USB3")]
    #[case("/sys/bus/usb2/usb4/4-1", "USB2")]
    fn test_usb_from_device(#[case] device: &str, #[case] expected: &str) {
        assert_eq!(usb_from_device(device), expected);
    }

    #[rstest]
    #[case("")]
    #[case("/dev/ttyUSB2")]
    #[case("usb1/1-1")]
    #[case("/sys/devices/platform/usb/1-1")]
    fn test_usb_from_device_fallback(#[case] device: &str) {
        assert_eq!(usb_from_device(device), UNKNOWN_USB);
    }

    #[test]
    fn test_thumbnail_from_product() {
        assert_eq!(thumbnail_from_product("EG25"), "/static/thumbs/eg25.png");
        assert_eq!(thumbnail_from_product("EC25-E"), "/static/thumbs/ec25-e.png");
    }
}
