/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for credential encoding and artifact handling

extern crate core as pavilion_core;
use pavilion_core::credential::*;
use std::path::Path;
use uuid::Uuid;

fn create_mock_payload() -> CredentialPayload {
    CredentialPayload {
        registration_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        event_id: Uuid::new_v4(),
        serial: Uuid::new_v4(),
    }
}

#[test]
fn test_payload_round_trip() {
    let payload = create_mock_payload();

    let encoded = encode_payload(&payload).unwrap();
    let decoded = decode_payload(&encoded).unwrap();

    assert_eq!(decoded, payload);
}

#[test]
fn test_decode_payload_trims_whitespace() {
    let payload = create_mock_payload();
    let encoded = encode_payload(&payload).unwrap();

    let decoded = decode_payload(&format!("  {}\n", encoded)).unwrap();
    assert_eq!(decoded, payload);
}

#[test]
fn test_decode_payload_rejects_tampered_content() {
    // Valid base64 that does not hold a payload
    let err = decode_payload("bm90LWpzb24=").unwrap_err();
    assert_eq!(err.to_string(), "Credential payload is not valid JSON");

    let err = decode_payload("%%% not base64 %%%").unwrap_err();
    assert_eq!(err.to_string(), "Credential is not valid base64");
}

#[test]
fn test_artifact_filename_format() {
    let registration_id = Uuid::new_v4();
    let serial = Uuid::new_v4();

    let filename = artifact_filename(registration_id, serial);
    assert_eq!(filename, format!("qrcode-{}-{}.png", registration_id, serial));
}

#[test]
fn test_artifact_path_joins_directory() {
    let path = artifact_path("/tmp/qr", "test.png");
    assert_eq!(path, Path::new("/tmp/qr/test.png"));
}

#[test]
fn test_render_and_remove_artifact() {
    let dir = "/tmp/pavilion_test_credentials";
    std::fs::create_dir_all(dir).unwrap();

    let payload = create_mock_payload();
    let encoded = encode_payload(&payload).unwrap();
    let filename = artifact_filename(payload.registration_id, payload.serial);

    render_artifact(dir, &filename, &encoded).unwrap();
    assert!(artifact_path(dir, &filename).exists());

    remove_artifact(dir, &filename);
    assert!(!artifact_path(dir, &filename).exists());

    // Removing a missing file is fine
    remove_artifact(dir, &filename);

    // Cleanup
    std::fs::remove_dir_all(dir).ok();
}
