//! Command line surface.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "subnet-calculator")]
#[command(about = "IPv4 subnet and CIDR calculator.")]
pub struct CommandLine {
    /// Print results as JSON instead of a report table
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a CIDR block: network, broadcast, usable range
    #[command(alias = "r")]
    Range {
        /// CIDR text, e.g. 192.168.1.0/24
        cidr: String,
    },
    /// Convert a dotted-decimal subnet mask to its prefix length
    #[command(alias = "m")]
    Mask {
        /// Subnet mask, e.g. 255.255.254.0
        mask: String,
    },
    /// Convert a prefix length to its dotted-decimal subnet mask
    #[command(alias = "p")]
    Prefix {
        /// Prefix length, 0-32
        prefix: u8,
    },
    /// Find the smallest block holding a number of usable hosts
    #[command(alias = "s")]
    Size {
        /// Required usable host count
        #[arg(allow_negative_numbers = true)]
        hosts: i64,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
