/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::{Extension, Json};
use provost_core::types::*;
use entity::user::Role;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct UserInfoResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
}

impl From<MUser> for UserInfoResponse {
    fn from(user: MUser) -> Self {
        UserInfoResponse {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            role: user.role,
            department: user.department,
        }
    }
}

pub async fn get(
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<UserInfoResponse>>> {
    let res = BaseResponse {
        error: false,
        message: UserInfoResponse::from(user),
    };

    Ok(Json(res))
}
