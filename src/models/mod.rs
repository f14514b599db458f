//! Domain models for subnet calculations.
//!
//! This module contains the value types and codecs the calculations
//! operate on:
//! - [`parse_address`] / [`format_address`] - canonical dotted-decimal codec
//! - [`CidrBlock`] - CIDR block with strict `address/prefix` parsing

mod cidr;
mod ipv4;

// Re-export public types
pub use cidr::{parse_cidr, CidrBlock};
pub use ipv4::{format_address, get_cidr_mask, parse_address, MAX_LENGTH};
