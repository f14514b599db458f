//! Subnet calculation logic.
//!
//! This module contains the calculations over validated models:
//! - [`range`] - network/broadcast/usable-range derivation
//! - [`mask`] - mask and prefix length conversion
//! - [`sizer`] - reverse sizing from a usable-host requirement

mod mask;
mod range;
mod sizer;

// Re-export public functions
pub use mask::{mask_to_prefix, prefix_to_mask};
pub use range::{broadcast_addr, compute_range, network_addr, RangeReport};
pub use sizer::{size_for_usable_hosts, SizeResult};
