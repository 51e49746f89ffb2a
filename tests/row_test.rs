//! Row formatting tests
//!
//! These tests verify how a single runtime container record is turned into
//! the cells of one table row.

use dockwatch::runtime::{ContainerRecord, PortRecord};
use dockwatch::table::row::{NO_NAME, format_created, format_port, select_port, short_id};
use dockwatch::table::{ContainerRow, StatusClass, build_rows};

/// Helper to create a port binding
fn port(ip: &str, private_port: u16, public_port: u16) -> PortRecord {
    PortRecord {
        ip: ip.to_string(),
        private_port,
        public_port,
    }
}

/// Helper to create a container record with sensible defaults
fn record(id: &str, status: &str, names: &[&str]) -> ContainerRecord {
    ContainerRecord {
        id: id.to_string(),
        image: "nginx:latest".to_string(),
        created: 0,
        ports: Vec::new(),
        status: status.to_string(),
        names: names.iter().map(|n| n.to_string()).collect(),
    }
}

// =============================================================================
// ID and name cells
// =============================================================================

/// Test that a full 64-char ID is cut to its first 12 characters
#[test]
fn test_id_truncated_to_twelve_chars() {
    let full = "abcdef0123456789abcdef0123456789abcdef0123456789abcdef0123456789";
    assert_eq!(short_id(full), "abcdef012345");
}

/// Test that a 12-char ID is kept unchanged
#[test]
fn test_id_exactly_twelve_chars_kept() {
    assert_eq!(short_id("abcdef012345"), "abcdef012345");
}

/// Test that IDs shorter than 12 characters are shown in full
#[test]
fn test_short_id_shown_in_full() {
    assert_eq!(short_id("abc"), "abc");
    assert_eq!(short_id(""), "");
}

/// Test that the Names cell shows only the first name
#[test]
fn test_name_is_first_entry() {
    let row = ContainerRow::from_record(&record("abcdef0123456789", "Up", &["/web", "/alias"]));
    assert_eq!(row.name, "/web");
}

/// Test that a container without names gets the placeholder instead of a crash
#[test]
fn test_empty_names_use_placeholder() {
    let row = ContainerRow::from_record(&record("abcdef0123456789", "Up", &[]));
    assert_eq!(row.name, NO_NAME);
}

// =============================================================================
// Created cell
// =============================================================================

/// Test created time at the Unix epoch
#[test]
fn test_created_epoch() {
    assert_eq!(format_created(0), "1970-01-01 00:00:00");
}

/// Test created time is formatted in UTC
#[test]
fn test_created_is_utc() {
    assert_eq!(format_created(1_700_000_000), "2023-11-14 22:13:20");
    assert_eq!(format_created(1_700_000_100), "2023-11-14 22:15:00");
}

/// Test created time before the epoch
#[test]
fn test_created_before_epoch() {
    assert_eq!(format_created(-1), "1969-12-31 23:59:59");
}

// =============================================================================
// Port cell
// =============================================================================

/// Test that the `::` binding wins over an IPv4 binding
#[test]
fn test_port_prefers_ipv6_wildcard() {
    let ports = vec![port("0.0.0.0", 80, 8080), port("::", 80, 8080)];
    assert_eq!(format_port(select_port(&ports)), "::80->8080");
}

/// Test port cell for a container without ports
#[test]
fn test_port_empty_list_falls_back() {
    assert_eq!(format_port(select_port(&[])), "->0");
}

/// Test that IPv4-only bindings fall back to the unmapped port
#[test]
fn test_port_ipv4_only_falls_back() {
    let ports = vec![port("0.0.0.0", 5432, 5432)];
    assert_eq!(format_port(select_port(&ports)), "->0");
}

/// Test a `::` binding whose port is exposed but not published
#[test]
fn test_port_unpublished_wildcard() {
    let ports = vec![port("::", 80, 0)];
    assert_eq!(format_port(select_port(&ports)), "::80->0");
}

// =============================================================================
// Status classification
// =============================================================================

/// Test statuses containing "Up" classify as up
#[test]
fn test_status_up() {
    assert_eq!(StatusClass::classify("Up 2 hours"), StatusClass::Up);
    assert_eq!(StatusClass::classify("Up 3 seconds (healthy)"), StatusClass::Up);
}

/// Test every other status classifies as down
#[test]
fn test_status_down() {
    assert_eq!(StatusClass::classify("Exited (0) 3 minutes ago"), StatusClass::Down);
    assert_eq!(
        StatusClass::classify("Restarting (1) 5 seconds ago"),
        StatusClass::Down
    );
    assert_eq!(StatusClass::classify("Created"), StatusClass::Down);
    assert_eq!(StatusClass::classify(""), StatusClass::Down);
}

/// Test that lowercase "up" does not count
#[test]
fn test_status_match_is_case_sensitive() {
    assert_eq!(StatusClass::classify("up 2 hours"), StatusClass::Down);
}

// =============================================================================
// Whole rows
// =============================================================================

/// Test a complete row built from one record
#[test]
fn test_row_from_record() {
    let rec = ContainerRecord {
        id: "abcdef0123456789".to_string(),
        image: "nginx:latest".to_string(),
        created: 1_700_000_000,
        ports: vec![port("::", 80, 8080)],
        status: "Up 5 minutes".to_string(),
        names: vec!["/web".to_string()],
    };

    let row = ContainerRow::from_record(&rec);
    assert_eq!(row.id, "abcdef012345");
    assert_eq!(row.image, "nginx:latest");
    assert_eq!(row.port, "::80->8080");
    assert_eq!(row.created, "2023-11-14 22:13:20");
    assert_eq!(row.status, "Up 5 minutes");
    assert_eq!(row.status_class, StatusClass::Up);
    assert_eq!(row.name, "/web");
}

/// Test rows keep the order the runtime returned
#[test]
fn test_build_rows_keeps_runtime_order() {
    let records = vec![
        record("zzzzzzzzzzzzzzzz", "Up", &["/z"]),
        record("aaaaaaaaaaaaaaaa", "Up", &["/a"]),
        record("mmmmmmmmmmmmmmmm", "Exited (0)", &["/m"]),
    ];

    let names: Vec<String> = build_rows(&records).into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["/z", "/a", "/m"]);
}

/// Test no records gives no rows
#[test]
fn test_build_rows_empty() {
    assert!(build_rows(&[]).is_empty());
}
