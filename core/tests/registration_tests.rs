/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for event registration and credential validation

extern crate core as pavilion_core;
use entity::registration::PaymentStatus;
use pavilion_core::consts::NULL_TIME;
use pavilion_core::credential::{encode_payload, CredentialPayload};
use pavilion_core::registration::*;
use pavilion_core::types::*;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;
use uuid::Uuid;

fn create_mock_cli(qr_dir: &str) -> Cli {
    Cli {
        debug: false,
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        serve_url: "http://127.0.0.1:8000".to_string(),
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret_file: "test_jwt".to_string(),
        session_hours: 24,
        qr_dir: qr_dir.to_string(),
        disable_registration: false,
    }
}

fn create_mock_state(db: DatabaseConnection, qr_dir: &str) -> Arc<ServerState> {
    Arc::new(ServerState {
        db,
        cli: create_mock_cli(qr_dir),
    })
}

fn create_mock_user(id: Uuid) -> MUser {
    MUser {
        id,
        username: "testuser".to_string(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        password: Some("hashed_password".to_string()),
        last_login_at: *NULL_TIME,
        created_at: *NULL_TIME,
    }
}

fn create_mock_registration(event_id: Uuid, user_id: Uuid) -> MRegistration {
    MRegistration {
        id: Uuid::new_v4(),
        event: event_id,
        user: user_id,
        buyer: user_id,
        bought_for: vec![],
        ticket_type: None,
        venue: None,
        no_of_tickets: 1,
        registration_date: *NULL_TIME,
        payment_status: PaymentStatus::Pending,
        qr_code: None,
        qr_serial: None,
        check_date: None,
        attended: false,
    }
}

fn create_request(event_id: Uuid, user_id: Uuid) -> RegistrationRequest {
    RegistrationRequest {
        event: event_id,
        user: user_id,
        ticket_type: None,
        venue: None,
        no_of_tickets: 1,
        registration_date: None,
        bought_for: vec![],
    }
}

#[test]
fn test_registration_request_defaults() {
    let event_id = Uuid::new_v4();
    let user_id = Uuid::new_v4();

    let json = format!(r#"{{"event": "{}", "user": "{}"}}"#, event_id, user_id);
    let request: RegistrationRequest = serde_json::from_str(&json).unwrap();

    assert_eq!(request.event, event_id);
    assert_eq!(request.no_of_tickets, 1);
    assert!(request.bought_for.is_empty());
    assert!(request.registration_date.is_none());
}

#[test]
fn test_register_rejects_overlapping_person_set() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let event_id = Uuid::new_v4();
        let guest_id = Uuid::new_v4();

        // The guest already appears on another row for this event
        let mut existing = create_mock_registration(event_id, Uuid::new_v4());
        existing.bought_for = vec![guest_id];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing]])
            .into_connection();

        let state = create_mock_state(db, "qrcodes");
        let buyer = create_mock_user(Uuid::new_v4());

        let mut request = create_request(event_id, Uuid::new_v4());
        request.bought_for = vec![guest_id];

        let err = register(state, request, buyer).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "A registration for this event already exists"
        );
    });
}

#[test]
fn test_register_reports_missing_event() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let qr_dir = "/tmp/pavilion_test_qr_missing_event";
        std::fs::create_dir_all(qr_dir).unwrap();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<MRegistration>::new()])
            .append_query_results([Vec::<MEvent>::new()])
            .into_connection();

        let state = create_mock_state(db, qr_dir);
        let buyer = create_mock_user(Uuid::new_v4());
        let request = create_request(Uuid::new_v4(), Uuid::new_v4());

        let err = register(state, request, buyer).await.unwrap_err();
        assert_eq!(err.to_string(), "Referenced event does not exist");

        // Cleanup
        std::fs::remove_dir_all(qr_dir).ok();
    });
}

#[test]
fn test_resolve_credential_accepts_issued_code() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let event_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();
        let serial = Uuid::new_v4();

        let mut row = create_mock_registration(event_id, user_id);
        row.qr_serial = Some(serial);
        let registration_id = row.id;

        let payload = CredentialPayload {
            registration_id,
            user_id,
            event_id,
            serial,
        };
        let raw = encode_payload(&payload).unwrap();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        let state = create_mock_state(db, "qrcodes");

        let registration = resolve_credential(state, &raw).await.unwrap();
        assert_eq!(registration.id, registration_id);
    });
}

#[test]
fn test_resolve_credential_rejects_rotated_serial() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let event_id = Uuid::new_v4();
        let user_id = Uuid::new_v4();

        // The stored serial moved on, the presented credential did not
        let mut row = create_mock_registration(event_id, user_id);
        row.qr_serial = Some(Uuid::new_v4());

        let payload = CredentialPayload {
            registration_id: row.id,
            user_id,
            event_id,
            serial: Uuid::new_v4(),
        };
        let raw = encode_payload(&payload).unwrap();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        let state = create_mock_state(db, "qrcodes");

        let err = resolve_credential(state, &raw).await.unwrap_err();
        assert_eq!(err.to_string(), "Credential is not valid");
    });
}

#[test]
fn test_resolve_credential_rejects_garbage() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let state = create_mock_state(db, "qrcodes");

        let err = resolve_credential(state, "%%% not a credential %%%")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Credential is not valid");
    });
}

#[test]
fn test_check_in_rejects_missing_registration() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<MRegistration>::new()])
            .into_connection();

        let state = create_mock_state(db, "qrcodes");

        let err = check_in(state, Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.to_string(), "Registration not found");
    });
}

#[test]
fn test_check_in_rejects_second_scan() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let mut row = create_mock_registration(Uuid::new_v4(), Uuid::new_v4());
        row.attended = true;
        let registration_id = row.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        let state = create_mock_state(db, "qrcodes");

        let err = check_in(state, registration_id).await.unwrap_err();
        assert_eq!(err.to_string(), "Registration already checked in");
    });
}

#[test]
fn test_check_in_marks_attendance() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let row = create_mock_registration(Uuid::new_v4(), Uuid::new_v4());
        let registration_id = row.id;

        let mut updated = row.clone();
        updated.attended = true;
        updated.check_date = Some(*NULL_TIME);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .append_query_results([vec![updated]])
            .into_connection();

        let state = create_mock_state(db, "qrcodes");

        let registration = check_in(state, registration_id).await.unwrap();
        assert!(registration.attended);
        assert!(registration.check_date.is_some());
    });
}

#[test]
fn test_update_payment_status_rejects_unknown_status() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let state = create_mock_state(db, "qrcodes");

        let err = update_payment_status(state, Uuid::new_v4(), "unpaid")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown payment status: unpaid");
    });
}

#[test]
fn test_update_payment_status_marks_paid() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let row = create_mock_registration(Uuid::new_v4(), Uuid::new_v4());
        let registration_id = row.id;

        let mut updated = row.clone();
        updated.payment_status = PaymentStatus::Paid;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .append_query_results([vec![updated]])
            .into_connection();

        let state = create_mock_state(db, "qrcodes");

        let registration = update_payment_status(state, registration_id, "paid")
            .await
            .unwrap();
        assert_eq!(registration.payment_status, PaymentStatus::Paid);
    });
}
