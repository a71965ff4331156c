/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::{Path, State};
use axum::{Extension, Json};
use chrono::Utc;
use provost_core::database::get_project_by_id;
use provost_core::input::check_required_field;
use provost_core::review::{ReviewTier, apply_review};
use provost_core::types::*;
use provost_core::visibility::{is_visible, scope_condition};
use entity::project::{ProjectStatus, ReviewAction, StudentSnapshot};
use entity::user::Role;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MakeProjectRequest {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub technology: String,
    pub team_members: String,
    pub document: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeReviewRequest {
    pub action: ReviewAction,
    pub comment: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct StatsResponse {
    pub total: i64,
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<Vec<MProject>>>> {
    let projects = EProject::find()
        .filter(scope_condition(user.role, user.id))
        .order_by_desc(CProject::CreatedAt)
        .all(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: projects,
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Json(body): Json<MakeProjectRequest>,
) -> WebResult<Json<BaseResponse<MProject>>> {
    if user.role != Role::Student {
        return Err(WebError::Forbidden(
            "Only students can submit projects".to_string(),
        ));
    }

    for (name, value) in [
        ("Title", &body.title),
        ("Abstract", &body.abstract_text),
        ("Technology", &body.technology),
        ("Team members", &body.team_members),
        ("Document", &body.document),
    ] {
        if let Err(e) = check_required_field(name, value) {
            return Err(WebError::BadRequest(e));
        }
    }

    let project = AProject {
        id: Set(Uuid::new_v4()),
        title: Set(body.title.clone()),
        abstract_text: Set(body.abstract_text.clone()),
        technology: Set(body.technology.clone()),
        team_members: Set(body.team_members.clone()),
        document: Set(body.document.clone()),
        student_id: Set(user.id),
        student: Set(StudentSnapshot {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            department: user.department.clone(),
        }),
        status: Set(ProjectStatus::Pending),
        faculty_review: Set(None),
        admin_review: Set(None),
        created_at: Set(Utc::now().naive_utc()),
    };

    let project = project.insert(&state.db).await?;

    let res = BaseResponse {
        error: false,
        message: project,
    };

    Ok(Json(res))
}

pub async fn get_project(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(project): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MProject>>> {
    let project: MProject = get_project_by_id(state.0.clone(), project)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    // Out-of-scope projects are indistinguishable from missing ones.
    if !is_visible(user.role, user.id, &project) {
        return Err(WebError::not_found("Project"));
    }

    let res = BaseResponse {
        error: false,
        message: project,
    };

    Ok(Json(res))
}

pub async fn put_review(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(project): Path<Uuid>,
    Json(body): Json<MakeReviewRequest>,
) -> WebResult<Json<BaseResponse<MProject>>> {
    // Concurrent reviews of the same project serialize on the row lock.
    let txn = state.db.begin().await?;

    let record: MProject = EProject::find_by_id(project)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or_else(|| WebError::not_found("Project"))?;

    let outcome = apply_review(
        record.status,
        user.role,
        body.action,
        &body.comment,
        &user.name,
        Utc::now().naive_utc(),
    )?;

    let mut aproject: AProject = record.into();
    aproject.status = Set(outcome.status);

    match outcome.tier {
        ReviewTier::Faculty => aproject.faculty_review = Set(Some(outcome.review)),
        ReviewTier::Admin => aproject.admin_review = Set(Some(outcome.review)),
    }

    let project = aproject.update(&txn).await?;
    txn.commit().await?;

    let res = BaseResponse {
        error: false,
        message: project,
    };

    Ok(Json(res))
}

pub async fn get_stats(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<StatsResponse>>> {
    let scope = scope_condition(user.role, user.id);

    let total = EProject::find()
        .filter(scope.clone())
        .count(&state.db)
        .await?;

    let pending = EProject::find()
        .filter(scope.clone())
        .filter(CProject::Status.eq(ProjectStatus::Pending))
        .count(&state.db)
        .await?;

    let approved = EProject::find()
        .filter(scope.clone())
        .filter(CProject::Status.eq(ProjectStatus::Approved))
        .count(&state.db)
        .await?;

    let rejected = EProject::find()
        .filter(scope)
        .filter(CProject::Status.eq(ProjectStatus::Rejected))
        .count(&state.db)
        .await?;

    let res = BaseResponse {
        error: false,
        message: StatsResponse {
            total: total as i64,
            pending: pending as i64,
            approved: approved as i64,
            rejected: rejected as i64,
        },
    };

    Ok(Json(res))
}
