//! Subnet mask conversion.
//!
//! A subnet mask is only valid when its bit pattern is some number of
//! leading ones followed by zeros; anything else is rejected rather
//! than coerced.

use crate::error::CalcError;
use crate::models::get_cidr_mask;
use std::net::Ipv4Addr;

/// Count the leading one-bits of a contiguous subnet mask.
///
/// Fails with [`CalcError::NonContiguousMask`] when a zero bit precedes
/// a one bit (e.g. 255.254.255.0).
///
/// # Examples
/// ```
/// use subnet_calculator::processing::mask_to_prefix;
/// assert_eq!(mask_to_prefix("255.255.254.0".parse().unwrap()).unwrap(), 23);
/// ```
pub fn mask_to_prefix(mask: Ipv4Addr) -> Result<u8, CalcError> {
    let bits = u32::from(mask);
    let prefix = bits.leading_ones() as u8;
    // rebuilding from the count exposes any stray one-bit further right
    if get_cidr_mask(prefix)? != bits {
        return Err(CalcError::NonContiguousMask(mask));
    }
    Ok(prefix)
}

/// Render a prefix length as a dotted-decimal subnet mask.
pub fn prefix_to_mask(prefix: u8) -> Result<Ipv4Addr, CalcError> {
    let mask = get_cidr_mask(prefix)?;
    Ok(Ipv4Addr::from(mask))
}
