//! Integration tests for subnet-calculator
//!
//! These tests verify the complete workflow from text input to derived
//! reports, the way the CLI drives the library.

use subnet_calculator::models::{format_address, parse_address, parse_cidr};
use subnet_calculator::processing::{
    compute_range, mask_to_prefix, prefix_to_mask, size_for_usable_hosts,
};
use subnet_calculator::{summarize, CalcError};

#[test]
fn test_range_workflow() {
    let report = summarize("192.168.1.0/24").expect("Failed to summarize block");

    assert_eq!(format_address(report.network), "192.168.1.0");
    assert_eq!(format_address(report.broadcast), "192.168.1.255");
    assert_eq!(report.first_usable.map(format_address).as_deref(), Some("192.168.1.1"));
    assert_eq!(report.last_usable.map(format_address).as_deref(), Some("192.168.1.254"));
    assert_eq!(report.total_addresses, 256);
    assert_eq!(report.usable_hosts, 254);
}

#[test]
fn test_sizing_then_verifying_capacity() {
    // size a block for 23 hosts, then confirm the block really offers them
    let sized = size_for_usable_hosts(23).expect("Failed to size block");
    assert_eq!(sized.prefix, 27);
    assert_eq!(format_address(sized.mask), "255.255.255.224");

    let block = parse_cidr("10.0.0.0/27").expect("Failed to parse block");
    let report = compute_range(&block).expect("Failed to compute range");
    assert_eq!(report.usable_hosts, 30);
    assert!(report.usable_hosts >= 23);
}

#[test]
fn test_mask_prefix_round_trip() {
    for prefix in 0..=32u8 {
        let mask = prefix_to_mask(prefix).expect("Failed to build mask");
        assert_eq!(mask_to_prefix(mask).unwrap(), prefix);
    }
}

#[test]
fn test_degenerate_blocks_report_no_hosts() {
    for cidr in ["203.0.113.6/31", "203.0.113.6/32"] {
        let report = summarize(cidr).expect("Failed to summarize block");
        assert_eq!(report.usable_hosts, 0, "{cidr} should have no usable hosts");
        assert_eq!(report.first_usable, None);
        assert_eq!(report.last_usable, None);
    }
}

#[test]
fn test_error_kinds_are_distinguishable() {
    assert!(matches!(
        parse_address("192.168.01.1"),
        Err(CalcError::InvalidAddress(_))
    ));
    assert!(matches!(
        summarize("192.168.1.0/33"),
        Err(CalcError::InvalidCidr(_))
    ));
    assert!(matches!(
        mask_to_prefix("255.254.255.0".parse().unwrap()),
        Err(CalcError::NonContiguousMask(_))
    ));
    assert!(matches!(
        prefix_to_mask(40),
        Err(CalcError::InvalidPrefix(40))
    ));
    assert!(matches!(
        size_for_usable_hosts(-3),
        Err(CalcError::InvalidHostCount(-3))
    ));
    assert!(matches!(
        size_for_usable_hosts(i64::MAX),
        Err(CalcError::CapacityExceeded(_))
    ));
}

#[test]
fn test_reports_are_idempotent() {
    let block = parse_cidr("172.16.0.9/12").expect("Failed to parse block");
    let first = compute_range(&block).expect("Failed to compute range");
    let second = compute_range(&block).expect("Failed to compute range");
    assert_eq!(first, second);
}
