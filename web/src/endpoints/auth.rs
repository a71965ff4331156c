/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::encode_jwt;
use crate::endpoints::user::UserInfoResponse;
use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::State;
use chrono::Utc;
use provost_core::database::get_user_by_email;
use provost_core::input::{check_required_field, validate_password};
use provost_core::types::*;
use email_address::EmailAddress;
use entity::user::Role;
use password_auth::{generate_hash, verify_password};
use sea_orm::ActiveValue::Set;
use sea_orm::ActiveModelTrait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub department: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfoResponse,
}

pub async fn post_register(
    state: State<Arc<ServerState>>,
    Json(body): Json<MakeUserRequest>,
) -> WebResult<Json<BaseResponse<String>>> {
    if state.cli.disable_registration {
        return Err(WebError::registration_disabled());
    }

    if let Err(e) = check_required_field("Name", &body.name) {
        return Err(WebError::BadRequest(e));
    }

    if !EmailAddress::is_valid(body.email.clone().as_str()) {
        return Err(WebError::invalid_email());
    }

    // Admin accounts are seeded at startup, never self-registered.
    if body.role == Role::Admin {
        return Err(WebError::BadRequest(
            "Admin accounts cannot be registered".to_string(),
        ));
    }

    if let Err(e) = check_required_field("Department", &body.department) {
        return Err(WebError::BadRequest(e));
    }

    if let Err(e) = validate_password(&body.password) {
        return Err(WebError::invalid_password(e));
    }

    let user = get_user_by_email(state.0.clone(), body.email.clone()).await?;

    if user.is_some() {
        return Err(WebError::already_exists("User"));
    };

    let user = AUser {
        id: Set(Uuid::new_v4()),
        name: Set(body.name.clone()),
        email: Set(body.email.clone()),
        password: Set(generate_hash(body.password.clone())),
        role: Set(body.role),
        department: Set(body.department.clone()),
        created_at: Set(Utc::now().naive_utc()),
    };

    let user = user.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: user.id.to_string(),
    };

    Ok(Json(res))
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    Json(body): Json<MakeLoginRequest>,
) -> WebResult<Json<BaseResponse<LoginResponse>>> {
    let user = get_user_by_email(state.0.clone(), body.email.clone())
        .await?
        .ok_or_else(WebError::invalid_credentials)?;

    verify_password(body.password, &user.password)
        .map_err(|_| WebError::invalid_credentials())?;

    let token =
        encode_jwt(state.clone(), user.id).map_err(|_| WebError::failed_to_generate_token())?;

    let res = BaseResponse {
        error: false,
        message: LoginResponse {
            token,
            user: UserInfoResponse::from(user),
        },
    };

    Ok(Json(res))
}
