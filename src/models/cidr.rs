//! CIDR block model.

use crate::error::CalcError;
use crate::models::ipv4::{parse_address, MAX_LENGTH};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

lazy_static! {
    static ref CIDR_FORM: Regex = Regex::new(r"^([0-9.]+)/(\d{1,2})$").expect("Invalid Regex?");
}

/// IPv4 CIDR block: base address plus prefix length.
///
/// The base address is stored as given. Host bits are discarded when
/// the network address is derived, never rejected.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    /// The base IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::new(&s).map_err(de::Error::custom)
    }
}

impl CidrBlock {
    /// Create a new [`CidrBlock`] from CIDR text (e.g., "10.0.0.0/24").
    ///
    /// Both halves must be canonical: the address per
    /// [`parse_address`], the prefix a plain decimal in 0-32 with no
    /// leading zeros.
    pub fn new(addr_cidr: &str) -> Result<CidrBlock, CalcError> {
        let invalid = || CalcError::InvalidCidr(addr_cidr.to_string());
        let caps = CIDR_FORM.captures(addr_cidr).ok_or_else(invalid)?;
        let addr_text = caps.get(1).map(|m| m.as_str()).ok_or_else(invalid)?;
        let prefix_text = caps.get(2).map(|m| m.as_str()).ok_or_else(invalid)?;

        let addr = parse_address(addr_text).map_err(|_| invalid())?;
        let prefix: u8 = prefix_text.parse().map_err(|_| invalid())?;
        if prefix.to_string() != prefix_text || prefix > MAX_LENGTH {
            return Err(invalid());
        }
        Ok(CidrBlock { addr, prefix })
    }
}

/// Parse CIDR text into a [`CidrBlock`].
pub fn parse_cidr(text: &str) -> Result<CidrBlock, CalcError> {
    CidrBlock::new(text)
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

impl PartialEq for CidrBlock {
    fn eq(&self, other: &CidrBlock) -> bool {
        self.addr == other.addr && self.prefix == other.prefix
    }
}

impl PartialOrd for CidrBlock {
    fn partial_cmp(&self, other: &CidrBlock) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
