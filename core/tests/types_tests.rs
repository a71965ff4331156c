/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for types and data structures

extern crate core as provost_core;
use provost_core::types::*;
use sea_orm::{DatabaseBackend, MockDatabase};

fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret_file: "test_jwt".to_string(),
        admin_email: "admin@example.com".to_string(),
        admin_password_file: None,
        disable_registration: false,
        report_errors: false,
        sentry_dsn: None,
    }
}

fn create_mock_db() -> sea_orm::DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<entity::project::Model>::new()])
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
        assert_eq!(state.cli.admin_email, "admin@example.com");
        assert!(!state.cli.disable_registration);
    });
}

#[test]
fn test_base_response_serialization() {
    let res = BaseResponse {
        error: false,
        message: "200 ALIVE".to_string(),
    };

    let json = serde_json::to_string(&res).unwrap();
    assert_eq!(json, r#"{"error":false,"message":"200 ALIVE"}"#);
}

#[test]
fn test_base_response_with_struct_payload() {
    let res = BaseResponse {
        error: true,
        message: vec!["first".to_string(), "second".to_string()],
    };

    let json = serde_json::to_string(&res).unwrap();
    assert_eq!(json, r#"{"error":true,"message":["first","second"]}"#);

    let parsed: BaseResponse<Vec<String>> = serde_json::from_str(&json).unwrap();
    assert!(parsed.error);
    assert_eq!(parsed.message.len(), 2);
}
