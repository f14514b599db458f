//! Environment-driven configuration.
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file loaded in `main`.

use std::env;

/// Default log4rs configuration file, relative to the working directory.
pub const DEFAULT_LOG4RS_FILE: &str = "log4rs.yml";

/// Runtime configuration resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the log4rs configuration file (`SUBNET_CALC_LOG4RS`).
    pub log4rs_file: String,
    /// Emit JSON even without `--json` (`SUBNET_CALC_OUTPUT=json`).
    pub json_output: bool,
}

impl Config {
    /// Resolve configuration from the environment.
    pub fn from_env() -> Config {
        let log4rs_file =
            env::var("SUBNET_CALC_LOG4RS").unwrap_or_else(|_| DEFAULT_LOG4RS_FILE.to_string());
        let json_output = matches!(
            env::var("SUBNET_CALC_OUTPUT").as_deref().map(str::trim),
            Ok("json") | Ok("JSON")
        );
        Config {
            log4rs_file,
            json_output,
        }
    }
}
