//! IPv4 subnet and CIDR calculation library.
//!
//! Pure, synchronous address arithmetic: CIDR range derivation, subnet
//! mask conversion and reverse sizing. The binary in `main.rs` is a
//! thin caller; all calculation lives here where it can be tested.

pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::CalcError;

use processing::RangeReport;

/// Parse CIDR text and derive its [`RangeReport`] in one call.
///
/// # Examples
/// ```
/// let report = subnet_calculator::summarize("192.168.1.0/24").unwrap();
/// assert_eq!(report.usable_hosts, 254);
/// ```
pub fn summarize(cidr_text: &str) -> Result<RangeReport, CalcError> {
    let block = models::parse_cidr(cidr_text)?;
    processing::compute_range(&block)
}
