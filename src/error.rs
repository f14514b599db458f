//! Error taxonomy for subnet calculations.
//!
//! Every failure is recoverable and carries the offending input, so
//! callers can match on the kind and decide how to present it. The
//! library itself produces no user-facing prose beyond each variant's
//! `Display` text.

use std::net::Ipv4Addr;
use thiserror::Error;

/// All the ways a calculation request can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Malformed dotted-decimal address text.
    #[error("invalid IPv4 address: {0:?}")]
    InvalidAddress(String),
    /// Malformed `address/prefix` text, or a prefix outside 0-32.
    #[error("invalid CIDR block: {0:?}")]
    InvalidCidr(String),
    /// Subnet mask bit pattern is not "ones then zeros".
    #[error("non-contiguous subnet mask: {0}")]
    NonContiguousMask(Ipv4Addr),
    /// Prefix length outside 0-32.
    #[error("prefix length {0} is out of range (0-32)")]
    InvalidPrefix(u8),
    /// Negative requested usable-host count.
    #[error("invalid usable host count: {0}")]
    InvalidHostCount(i64),
    /// Requested usable-host count does not fit any IPv4 block.
    #[error("no IPv4 block can provide {0} usable hosts")]
    CapacityExceeded(i64),
}
