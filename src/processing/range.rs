//! Subnet range derivation.
//!
//! Turns a validated [`CidrBlock`] into the full set of derived
//! addresses and counts in one pass.

use crate::error::CalcError;
use crate::models::{get_cidr_mask, CidrBlock, MAX_LENGTH};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Derived summary of a CIDR block.
///
/// Every field is a pure function of the block; reports are recomputed
/// per request and never cached.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct RangeReport {
    /// The block this report was computed from.
    pub cidr: CidrBlock,
    /// First address in the block (host bits cleared).
    pub network: Ipv4Addr,
    /// Last address in the block (host bits set).
    pub broadcast: Ipv4Addr,
    /// Lowest assignable host address, when the block has one.
    pub first_usable: Option<Ipv4Addr>,
    /// Highest assignable host address, when the block has one.
    pub last_usable: Option<Ipv4Addr>,
    /// Block size, 2^(32 - prefix). u64 so the /0 case fits exactly.
    pub total_addresses: u64,
    /// Total minus network and broadcast; 0 for /31 and /32.
    pub usable_hosts: u64,
}

/// Calculate the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CalcError> {
    let mask = get_cidr_mask(len)?;
    let addr_bits = u32::from(addr);
    Ok(Ipv4Addr::from(addr_bits & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CalcError> {
    let mask = get_cidr_mask(len)?;
    let addr_bits = u32::from(addr);
    let network_bits = addr_bits & mask;
    let broadcast_bits = network_bits | (!mask);
    Ok(Ipv4Addr::from(broadcast_bits))
}

/// Derive the [`RangeReport`] for a block.
///
/// /31 and /32 blocks have no room for a distinct host range, so their
/// usable count is 0 and the usable bounds are `None`.
pub fn compute_range(cidr: &CidrBlock) -> Result<RangeReport, CalcError> {
    let network = network_addr(cidr.addr, cidr.prefix)?;
    let broadcast = broadcast_addr(cidr.addr, cidr.prefix)?;

    let total_addresses = 1u64 << (MAX_LENGTH - cidr.prefix);
    let usable_hosts = if total_addresses > 2 {
        total_addresses - 2
    } else {
        0
    };

    let (first_usable, last_usable) = if usable_hosts > 0 {
        (
            Some(Ipv4Addr::from(u32::from(network) + 1)),
            Some(Ipv4Addr::from(u32::from(broadcast) - 1)),
        )
    } else {
        (None, None)
    };

    log::debug!("compute_range({cidr}) network={network} broadcast={broadcast}");

    Ok(RangeReport {
        cidr: *cidr,
        network,
        broadcast,
        first_usable,
        last_usable,
        total_addresses,
        usable_hosts,
    })
}
