/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::Utc;
use entity::user::Role;
use password_auth::generate_hash;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectOptions, Database, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter,
};
use sea_orm_migration::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::consts::{
    ADMIN_USER_ID, DEFAULT_ADMIN_DEPARTMENT, DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_PASSWORD,
};
use super::input::load_secret;
use super::types::*;
use migration::Migrator;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        std::fs::read_to_string(file).context("Failed to read database url from file")?
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    // Only enable SQL logging at debug level
    if cli.log_level == "debug" {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(100)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    update_db(&db, cli).await.context("Failed to update database")?;
    Ok(db)
}

async fn update_db(db: &DatabaseConnection, cli: &Cli) -> Result<(), DbErr> {
    let admin = EUser::find()
        .filter(CUser::Role.eq(Role::Admin))
        .one(db)
        .await?;

    if admin.is_none() {
        let password = match &cli.admin_password_file {
            Some(file) => load_secret(file),
            None => DEFAULT_ADMIN_PASSWORD.to_string(),
        };

        let auser = AUser {
            id: Set(ADMIN_USER_ID),
            name: Set(DEFAULT_ADMIN_NAME.to_string()),
            email: Set(cli.admin_email.clone()),
            password: Set(generate_hash(password)),
            role: Set(Role::Admin),
            department: Set(DEFAULT_ADMIN_DEPARTMENT.to_string()),
            created_at: Set(Utc::now().naive_utc()),
        };

        auser.insert(db).await?;
        tracing::info!("Seeded admin account {}", cli.admin_email);
    }

    Ok(())
}

pub async fn get_user_by_email(state: Arc<ServerState>, email: String) -> Result<Option<MUser>> {
    Ok(EUser::find()
        .filter(CUser::Email.eq(email))
        .one(&state.db)
        .await
        .context("Failed to query user")?)
}

pub async fn get_project_by_id(state: Arc<ServerState>, id: Uuid) -> Result<Option<MProject>> {
    Ok(EProject::find_by_id(id)
        .one(&state.db)
        .await
        .context("Failed to query project")?)
}
