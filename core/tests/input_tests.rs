/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation and parsing functions

extern crate core as provost_core;
use provost_core::input::*;

#[test]
fn test_port_in_range() {
    let port = port_in_range("8080").unwrap();
    assert_eq!(port, 8080);

    let port = port_in_range("65535").unwrap();
    assert_eq!(port, 65535);

    let port = port_in_range("65536").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("0").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("abc").unwrap_err();
    assert_eq!(port, "`abc` is not a port number");
}

#[test]
fn test_check_required_field() {
    check_required_field("Title", "Smart Attendance System").unwrap();
    check_required_field("Technology", "Rust").unwrap();

    let err = check_required_field("Title", "").unwrap_err();
    assert_eq!(err, "Title cannot be empty");

    let err = check_required_field("Abstract", "   ").unwrap_err();
    assert_eq!(err, "Abstract cannot be empty");

    let err = check_required_field("Document", "\t\n").unwrap_err();
    assert_eq!(err, "Document cannot be empty");
}

#[test]
fn test_validate_password() {
    validate_password("secret").unwrap();
    validate_password("admin123").unwrap();

    let err = validate_password("short").unwrap_err();
    assert_eq!(err, "Password must be at least 6 characters long");

    let err = validate_password("").unwrap_err();
    assert_eq!(err, "Password must be at least 6 characters long");

    let err = validate_password(&"x".repeat(129)).unwrap_err();
    assert_eq!(err, "Password cannot exceed 128 characters");

    validate_password(&"x".repeat(128)).unwrap();
}

#[test]
fn test_load_secret_missing_file() {
    let secret = load_secret("/nonexistent/path/to/secret");
    assert_eq!(secret, "");
}

#[test]
fn test_load_secret_trims_whitespace() {
    let dir = std::env::temp_dir();
    let path = dir.join("provost-test-secret");
    std::fs::write(&path, "  top-secret\n").unwrap();

    let secret = load_secret(path.to_str().unwrap());
    assert_eq!(secret, "top-secret");

    std::fs::remove_file(&path).unwrap();
}
