/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::port_in_range;
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "Provost", display_name = "Provost", bin_name = "provost-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "PROVOST_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "PROVOST_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "PROVOST_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "PROVOST_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "PROVOST_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "PROVOST_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    #[arg(long, env = "PROVOST_ADMIN_EMAIL", default_value = "admin@example.com")]
    pub admin_email: String,
    #[arg(long, env = "PROVOST_ADMIN_PASSWORD_FILE")]
    pub admin_password_file: Option<String>,
    #[arg(long, env = "PROVOST_DISABLE_REGISTRATION", default_value = "false")]
    pub disable_registration: bool,
    #[arg(long, env = "PROVOST_REPORT_ERRORS", default_value = "false")]
    pub report_errors: bool,
    #[arg(long, env = "PROVOST_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type EProject = project::Entity;
pub type EUser = user::Entity;

pub type MProject = project::Model;
pub type MUser = user::Model;

pub type AProject = project::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CProject = project::Column;
pub type CUser = user::Column;

pub type RProject = project::Relation;
pub type RUser = user::Relation;
