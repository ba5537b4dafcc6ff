/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use web::endpoints::auth::*;

#[test]
fn test_make_login_request_serialization() {
    let request = MakeLoginRequest {
        loginname: "organizer".to_string(),
        password: "Sup3r-Secret".to_string(),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("organizer"));
    assert!(json.contains("Sup3r-Secret"));

    let parsed: MakeLoginRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.loginname, "organizer");
}

#[test]
fn test_make_login_request_accepts_email_as_loginname() {
    let json = r#"{"loginname": "organizer@example.com", "password": "Sup3r-Secret"}"#;

    let request: MakeLoginRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.loginname, "organizer@example.com");
}

#[test]
fn test_make_user_request_serialization() {
    let request = MakeUserRequest {
        username: "organizer".to_string(),
        name: "Event Organizer".to_string(),
        email: "organizer@example.com".to_string(),
        password: "Sup3r-Secret1!".to_string(),
    };

    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("organizer"));
    assert!(json.contains("Event Organizer"));
    assert!(json.contains("organizer@example.com"));
}

#[test]
fn test_make_user_request_requires_all_fields() {
    let json = r#"{"username": "organizer", "name": "Event Organizer"}"#;

    assert!(serde_json::from_str::<MakeUserRequest>(json).is_err());
}
