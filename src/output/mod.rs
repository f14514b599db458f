//! Output formatting for calculation results.
//!
//! - [`terminal`] - aligned, colored field tables on stdout
//! - [`json`] - machine-readable JSON rendering

pub mod json;
pub mod terminal;
