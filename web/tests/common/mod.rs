/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use provost_core::types::*;
use entity::*;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use std::sync::Arc;

pub fn create_mock_cli() -> Cli {
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

pub fn create_mock_state() -> Arc<ServerState> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    state_with_db(db)
}

pub fn state_with_db(db: DatabaseConnection) -> Arc<ServerState> {
    let cli = create_mock_cli();

    Arc::new(ServerState { db, cli })
}
