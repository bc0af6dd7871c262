use std::{fmt, str::FromStr};

const KIB: f64 = (1u64 << 10) as f64;
const MIB: f64 = (1u64 << 20) as f64;
const GIB: f64 = (1u64 << 30) as f64;

/// Binary byte units, as shown on the data usage and network panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ByteUnit {
    Bytes,
    Kilobytes,
    Megabytes,
    Gigabytes,
}

impl ByteUnit {
    pub const ALL: [ByteUnit; 4] = [
        ByteUnit::Bytes,
        ByteUnit::Kilobytes,
        ByteUnit::Megabytes,
        ByteUnit::Gigabytes,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            ByteUnit::Bytes => "B",
            ByteUnit::Kilobytes => "KB",
            ByteUnit::Megabytes => "MB",
            ByteUnit::Gigabytes => "GB",
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            ByteUnit::Bytes => 1.0,
            ByteUnit::Kilobytes => KIB,
            ByteUnit::Megabytes => MIB,
            ByteUnit::Gigabytes => GIB,
        }
    }

    /// Largest unit that keeps `bytes` at a level of at least one.
    pub fn fitting(bytes: f64) -> ByteUnit {
        if bytes < KIB {
            ByteUnit::Bytes
        } else if bytes < MIB {
            ByteUnit::Kilobytes
        } else if bytes < GIB {
            ByteUnit::Megabytes
        } else {
            ByteUnit::Gigabytes
        }
    }
}

impl fmt::Display for ByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown byte unit '{0}', expected one of B, KB, MB, GB")]
pub struct UnknownByteUnit(pub String);

impl FromStr for ByteUnit {
    type Err = UnknownByteUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        ByteUnit::ALL
            .into_iter()
            .find(|unit| unit.symbol().eq_ignore_ascii_case(symbol))
            .ok_or_else(|| UnknownByteUnit(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ByteSizeError {
    #[error("empty size")]
    Empty,
    #[error("invalid size '{0}'")]
    Number(String),
    #[error("size '{0}' is negative")]
    Negative(String),
    #[error("size '{0}' is too large")]
    TooLarge(String),
    #[error(transparent)]
    Unit(#[from] UnknownByteUnit),
}

/// Converts `bytes` to a level of `unit`, or of the fitting unit when none is given.
pub fn bytes_to_level(bytes: f64, unit: Option<ByteUnit>) -> (f64, ByteUnit) {
    let unit = unit.unwrap_or_else(|| ByteUnit::fitting(bytes));
    (bytes / unit.factor(), unit)
}

pub fn level_to_bytes(level: f64, unit: ByteUnit) -> f64 {
    level * unit.factor()
}

pub fn format_bytes(bytes: f64, unit: Option<ByteUnit>) -> String {
    let (level, unit) = bytes_to_level(bytes, unit);
    format!("{level:.2} {unit}")
}

/// Parses sizes such as `2GB`, `512 mb` or `100` (bytes) into a byte count.
pub fn parse_byte_size(input: &str) -> Result<u64, ByteSizeError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ByteSizeError::Empty);
    }

    let split = input
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(input.len());
    let (number, unit) = input.split_at(split);

    let level: f64 = number
        .trim()
        .parse()
        .map_err(|_| ByteSizeError::Number(input.to_string()))?;
    if !level.is_finite() {
        return Err(ByteSizeError::Number(input.to_string()));
    }
    if level.is_sign_negative() && level != 0.0 {
        return Err(ByteSizeError::Negative(input.to_string()));
    }

    let unit = match unit {
        "" => ByteUnit::Bytes,
        unit => unit.parse()?,
    };

    // `as` saturates at u64::MAX
    let bytes = level_to_bytes(level, unit).round();
    if bytes >= u64::MAX as f64 {
        return Err(ByteSizeError::TooLarge(input.to_string()));
    }

    Ok(bytes as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, ByteUnit::Bytes, 0.0)]
    #[case(1023.0, ByteUnit::Bytes, 1023.0)]
    #[case(1024.0, ByteUnit::Kilobytes, 1.0)]
    #[case(1536.0, ByteUnit::Kilobytes, 1.5)]
    #[case(1048576.0, ByteUnit::Megabytes, 1.0)]
    #[case(1073741823.0, ByteUnit::Megabytes, 1073741823.0 / 1048576.0)]
    #[case(1073741824.0, ByteUnit::Gigabytes, 1.0)]
    #[case(5e12, ByteUnit::Gigabytes, 5e12 / 1073741824.0)]
    fn test_bytes_to_level_picks_unit(
        #[case] bytes: f64,
        #[case] unit: ByteUnit,
        #[case] level: f64,
    ) {
        assert_eq!(bytes_to_level(bytes, None), (level, unit));
    }

    #[rstest]
    fn test_round_trip_each_unit(
        #[values(ByteUnit::Bytes, ByteUnit::Kilobytes, ByteUnit::Megabytes, ByteUnit::Gigabytes)]
        unit: ByteUnit,
        #[values(0.0, 1.0, 1536.0, 3221225472.0)] bytes: f64,
    ) {
        let (level, returned) = bytes_to_level(bytes, Some(unit));
        assert_eq!(returned, unit);
        assert_eq!(level_to_bytes(level, unit), bytes);
    }

    #[test]
    fn test_explicit_unit_is_kept() {
        assert_eq!(
            bytes_to_level(512.0, Some(ByteUnit::Megabytes)),
            (512.0 / 1048576.0, ByteUnit::Megabytes)
        );
        assert_eq!(level_to_bytes(2.0, ByteUnit::Gigabytes), 2147483648.0);
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(1536.0, None), "1.50 KB");
        assert_eq!(format_bytes(2147483648.0, Some(ByteUnit::Megabytes)), "2048.00 MB");
    }

    #[rstest]
    #[case("B", ByteUnit::Bytes)]
    #[case("kb", ByteUnit::Kilobytes)]
    #[case(" Mb ", ByteUnit::Megabytes)]
    #[case("GB", ByteUnit::Gigabytes)]
    fn test_unit_from_str(#[case] input: &str, #[case] unit: ByteUnit) {
        assert_eq!(input.parse::<ByteUnit>().unwrap(), unit);
    }

    #[rstest]
    #[case("2GB", 2147483648)]
    #[case("512 MB", 536870912)]
    #[case("1.5kb", 1536)]
    #[case("100", 100)]
    #[case("0", 0)]
    fn test_parse_byte_size(#[case] input: &str, #[case] bytes: u64) {
        assert_eq!(parse_byte_size(input).unwrap(), bytes);
    }

    #[test]
    fn test_parse_byte_size_errors() {
        assert_matches!(parse_byte_size("  "), Err(ByteSizeError::Empty));
        assert_matches!(parse_byte_size("GB"), Err(ByteSizeError::Number(_)));
        assert_matches!(parse_byte_size("-1GB"), Err(ByteSizeError::Negative(_)));
        assert_matches!(parse_byte_size("3TB"), Err(ByteSizeError::Unit(_)));
        assert_matches!(
            parse_byte_size("99999999999GB"),
            Err(ByteSizeError::TooLarge(_))
        );
        assert_matches!("TB".parse::<ByteUnit>(), Err(UnknownByteUnit(_)));
    }
}
