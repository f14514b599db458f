//! JSON output for calculation results.

use serde::Serialize;
use std::error::Error;
use std::net::Ipv4Addr;

/// Mask/prefix conversion result, shaped for JSON output.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct MaskConversion {
    /// Prefix length (0-32).
    pub prefix: u8,
    /// Dotted-decimal subnet mask.
    pub mask: Ipv4Addr,
}

/// Print any serializable result as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| format!("Error serializing JSON: {e}"))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarize;

    #[test]
    fn test_mask_conversion_shape() {
        let conversion = MaskConversion {
            prefix: 23,
            mask: Ipv4Addr::new(255, 255, 254, 0),
        };
        let json = serde_json::to_value(conversion).unwrap();
        assert_eq!(json["prefix"], 23);
        assert_eq!(json["mask"], "255.255.254.0");
    }

    #[test]
    fn test_range_report_shape() {
        let report = summarize("192.168.1.0/24").unwrap();
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["cidr"], "192.168.1.0/24");
        assert_eq!(json["network"], "192.168.1.0");
        assert_eq!(json["broadcast"], "192.168.1.255");
        assert_eq!(json["first_usable"], "192.168.1.1");
        assert_eq!(json["last_usable"], "192.168.1.254");
        assert_eq!(json["total_addresses"], 256);
        assert_eq!(json["usable_hosts"], 254);
    }

    #[test]
    fn test_degenerate_hosts_serialize_as_null() {
        let report = summarize("10.0.0.4/31").unwrap();
        let json = serde_json::to_value(report).unwrap();
        assert!(json["first_usable"].is_null());
        assert!(json["last_usable"].is_null());
    }
}
