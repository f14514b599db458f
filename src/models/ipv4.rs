//! IPv4 address text codec and prefix arithmetic.
//!
//! Addresses are handled as [`Ipv4Addr`] values and manipulated as
//! 32-bit integers, octet 0 occupying bits 31..24. Only canonical
//! dotted-decimal text is accepted on input.

use crate::error::CalcError;
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    static ref DOTTED_QUAD: Regex =
        Regex::new(r"^(\d{1,3})\.(\d{1,3})\.(\d{1,3})\.(\d{1,3})$").expect("Invalid Regex?");
}

/// Parse canonical dotted-decimal text into an [`Ipv4Addr`].
///
/// Exactly four `.`-separated octets in 0-255, with no leading zeros
/// other than a literal `0` and no surrounding characters.
///
/// # Examples
/// ```
/// use subnet_calculator::models::parse_address;
/// assert!(parse_address("192.168.1.0").is_ok());
/// assert!(parse_address("192.168.01.1").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<Ipv4Addr, CalcError> {
    let invalid = || CalcError::InvalidAddress(text.to_string());
    let caps = DOTTED_QUAD.captures(text).ok_or_else(invalid)?;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let segment = caps.get(i + 1).map(|m| m.as_str()).ok_or_else(invalid)?;
        // u8 bounds the range; comparing back catches "01" style octets
        let value: u8 = segment.parse().map_err(|_| invalid())?;
        if value.to_string() != segment {
            return Err(invalid());
        }
        *octet = value;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Render an address in canonical dotted-decimal form.
///
/// Inverse of [`parse_address`] for every canonical input.
pub fn format_address(addr: Ipv4Addr) -> String {
    addr.to_string()
}

/// Convert a CIDR prefix length to subnet mask bits.
///
/// # Examples
/// ```
/// use subnet_calculator::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, CalcError> {
    if len > MAX_LENGTH {
        Err(CalcError::InvalidPrefix(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}
