//! Terminal output for calculation results.

use crate::models::format_address;
use crate::processing::{RangeReport, SizeResult};
use colored::Colorize;
use std::net::Ipv4Addr;

const LABEL_WIDTH: usize = 18;

/// Format one `label : value` report row with a right-aligned label.
///
/// # Arguments
/// * `label` - The field name
/// * `value` - The value to print after the separator
///
/// # Returns
/// The rendered row
pub fn format_row<T: ToString>(label: &str, value: T) -> String {
    format!(
        "{label:>width$} : {value}",
        width = LABEL_WIDTH,
        value = value.to_string()
    )
}

/// Render an optional host address, "N/A" when the block has none.
pub fn format_optional_host(addr: Option<Ipv4Addr>) -> String {
    match addr {
        Some(addr) => format_address(addr),
        None => "N/A".to_string(),
    }
}

/// Print a [`RangeReport`] as an aligned field table.
pub fn print_range_report(report: &RangeReport) {
    log::info!("#Start print_range_report({})", report.cidr);
    println!("{}", format!("Subnet report for {}", report.cidr).bold());
    println!("{}", format_row("Network address", format_address(report.network).green()));
    println!("{}", format_row("Broadcast address", format_address(report.broadcast).green()));
    println!(
        "{}",
        format_row("First usable host", format_optional_host(report.first_usable).cyan())
    );
    println!(
        "{}",
        format_row("Last usable host", format_optional_host(report.last_usable).cyan())
    );
    println!("{}", format_row("Total addresses", report.total_addresses));
    println!("{}", format_row("Usable hosts", report.usable_hosts));
}

/// Print a mask-to-prefix conversion.
pub fn print_mask_report(mask: Ipv4Addr, prefix: u8) {
    println!("{}", format_row("Subnet mask", format_address(mask).green()));
    println!("{}", format_row("Prefix length", format!("/{prefix}")));
}

/// Print a reverse-sizing result for a requested host count.
pub fn print_size_report(count: i64, sized: &SizeResult) {
    log::info!("#Start print_size_report({count})");
    println!(
        "{}",
        format!("Smallest block for {count} usable hosts").bold()
    );
    println!("{}", format_row("Prefix length", format!("/{}", sized.prefix)));
    println!("{}", format_row("Subnet mask", format_address(sized.mask).green()));
}
