/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation and parsing functions

extern crate core as pavilion_core;
use pavilion_core::input::*;
use uuid::Uuid;

#[test]
fn test_required() {
    let value = Some("hall-a".to_string());
    let field = required("venue", &value).unwrap();
    assert_eq!(field, "hall-a");

    let err = required("venue", &None).unwrap_err();
    assert_eq!(err.to_string(), "Missing required field: venue");
}

#[test]
fn test_check_uuid() {
    let id = Uuid::new_v4();
    let parsed = check_uuid("venue", &id.to_string()).unwrap();
    assert_eq!(parsed, id);

    let err = check_uuid("venue", "not-a-uuid").unwrap_err();
    assert_eq!(err.to_string(), "Invalid identifier: venue");

    // Unhyphenated form is rejected even though the parser accepts it
    let err = check_uuid("venue", &id.simple().to_string()).unwrap_err();
    assert_eq!(err.to_string(), "Invalid identifier: venue");

    let err = check_uuid("venue", &Uuid::nil().to_string()).unwrap_err();
    assert_eq!(err.to_string(), "Invalid identifier: venue");

    let err = check_uuid("venue", "").unwrap_err();
    assert_eq!(err.to_string(), "Invalid identifier: venue");
}

#[test]
fn test_parse_date() {
    let date = parse_date("start_date", "2025-03-10").unwrap();
    assert_eq!(date.to_string(), "2025-03-10");

    let err = parse_date("start_date", "10-03-2025").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid date: start_date (expected YYYY-MM-DD)"
    );

    let err = parse_date("start_date", "2025-13-01").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid date: start_date (expected YYYY-MM-DD)"
    );

    assert!(parse_date("start_date", "not-a-date").is_err());
}

#[test]
fn test_parse_time() {
    let time = parse_time("start_time", "09:30").unwrap();
    assert_eq!(time.to_string(), "09:30:00");

    let time = parse_time("start_time", "09:30:15").unwrap();
    assert_eq!(time.to_string(), "09:30:15");

    let err = parse_time("start_time", "25:00").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid time: start_time (expected HH:MM or HH:MM:SS)"
    );

    assert!(parse_time("start_time", "0930").is_err());
    assert!(parse_time("start_time", "").is_err());
}

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
}

#[test]
fn test_greater_than_zero() {
    let num = greater_than_zero::<u32>("1").unwrap();
    assert_eq!(num, 1);

    let num = greater_than_zero::<usize>("0").unwrap_err();
    assert_eq!(num, "`0` is not larger than 0");

    let num = greater_than_zero::<u32>("-1").unwrap_err();
    assert_eq!(num, "`-1` is not a valid number");

    let num = greater_than_zero::<i32>("-1").unwrap_err();
    assert_eq!(num, "`-1` is not larger than 0");

    let num = greater_than_zero::<u32>("a").unwrap_err();
    assert_eq!(num, "`a` is not a valid number");

    let num = greater_than_zero::<f32>("1.0").unwrap();
    assert_eq!(num, 1.0);
}

#[test]
fn test_check_index_name() {
    check_index_name("test").unwrap();
    check_index_name("te-st").unwrap();
    check_index_name("test1").unwrap();
    check_index_name("te-9st").unwrap();

    let name = check_index_name("Test").unwrap_err();
    assert_eq!(name, "Name must be lowercase");

    let name = check_index_name("test-").unwrap_err();
    assert_eq!(name, "Name can only start and end with letters or numbers");

    let name = check_index_name("test_").unwrap_err();
    assert_eq!(name, "Name can only contain letters, numbers, and dashes");

    let name = check_index_name("test ").unwrap_err();
    assert_eq!(name, "Name can only contain letters, numbers, and dashes");

    let name = check_index_name("test name").unwrap_err();
    assert_eq!(name, "Name can only contain letters, numbers, and dashes");

    let name = check_index_name("test?name").unwrap_err();
    assert_eq!(name, "Name can only contain letters, numbers, and dashes");

    let name = check_index_name("").unwrap_err();
    assert_eq!(name, "Name cannot be empty");
}

#[test]
fn test_load_secret() {
    let secret_path = "/tmp/pavilion_test_secret";
    std::fs::write(secret_path, "s3cret-value\n").unwrap();

    let secret = load_secret(secret_path);
    assert_eq!(secret, "s3cret-value");

    let missing = load_secret("/tmp/pavilion_test_secret_missing");
    assert_eq!(missing, "");

    // Cleanup
    std::fs::remove_file(secret_path).ok();
}

#[test]
fn test_validate_password() {
    validate_password("Str0ng!Pass").unwrap();
    validate_password("An0ther-Go0d#One").unwrap();

    let err = validate_password("Ab1!").unwrap_err();
    assert_eq!(err, "Password must be at least 8 characters long");

    let err = validate_password("MyPassword1!").unwrap_err();
    assert_eq!(err, "Password cannot contain the word 'password'");

    let err = validate_password("weak1!weak").unwrap_err();
    assert_eq!(err, "Password must contain at least one uppercase letter");

    let err = validate_password("WEAK1!WEAK").unwrap_err();
    assert_eq!(err, "Password must contain at least one lowercase letter");

    let err = validate_password("Weak!weak").unwrap_err();
    assert_eq!(err, "Password must contain at least one digit");

    let err = validate_password("Weak1weak").unwrap_err();
    assert_eq!(
        err,
        "Password must contain at least one special character (!@#$%^&*()_+-=[]{}|;:,.<>?)"
    );
}
