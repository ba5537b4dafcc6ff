/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for types and data structures

extern crate core as pavilion_core;
use pavilion_core::types::*;
use sea_orm::{DatabaseBackend, MockDatabase};
use uuid::Uuid;

fn create_mock_cli() -> Cli {
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
        qr_dir: "qrcodes".to_string(),
        disable_registration: false,
    }
}

fn create_mock_db() -> sea_orm::DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<entity::organization::Model>::new()])
        .into_connection()
}

#[test]
fn test_server_state_creation() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let cli = create_mock_cli();
        let db = create_mock_db();

        let state = ServerState { db, cli };

        assert_eq!(state.cli.port, 3000);
        assert_eq!(state.cli.ip, "127.0.0.1");
        assert!(!state.cli.debug);
    });
}

#[test]
fn test_identity_holds_raw_claims() {
    let user_id = Uuid::new_v4();
    let org_id = Uuid::new_v4();

    let identity = Identity {
        user_id: Some(user_id.to_string()),
        organizations: vec![org_id.to_string()],
    };

    assert_eq!(identity.user_id.as_deref(), Some(user_id.to_string().as_str()));
    assert_eq!(identity.organizations.len(), 1);
}

#[test]
fn test_base_response_serialization() {
    let response = BaseResponse {
        error: false,
        message: "ok".to_string(),
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["error"], false);
    assert_eq!(json["message"], "ok");
}

#[test]
fn test_list_item_serialization() {
    let item = ListItem {
        id: Uuid::new_v4(),
        name: "main-hall".to_string(),
    };

    let json = serde_json::to_string(&item).unwrap();
    let parsed: ListItem = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.id, item.id);
    assert_eq!(parsed.name, "main-hall");
}
