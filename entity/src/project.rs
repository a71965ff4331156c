/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[sea_orm(num_value = 0)]
    Pending,
    #[sea_orm(num_value = 1)]
    FacultyApproved,
    #[sea_orm(num_value = 2)]
    Approved,
    #[sea_orm(num_value = 3)]
    Rejected,
    #[sea_orm(num_value = 4)]
    NeedsRevision,
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ProjectStatus::Pending),
            "faculty-approved" => Ok(ProjectStatus::FacultyApproved),
            "approved" => Ok(ProjectStatus::Approved),
            "rejected" => Ok(ProjectStatus::Rejected),
            "needs-revision" => Ok(ProjectStatus::NeedsRevision),
            _ => Err(format!("Unknown project status: {}", s)),
        }
    }
}

/// Verdict a reviewer submits; distinct from [`ProjectStatus`], which is what
/// the project ends up as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    Approved,
    Rejected,
    Revision,
}

/// Submitter details captured at submission time, kept with the project so
/// listings do not need a join.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, FromJsonQueryResult)]
pub struct StudentSnapshot {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub department: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, FromJsonQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReview {
    pub action: ReviewAction,
    pub comment: String,
    pub reviewed_by: String,
    pub reviewed_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "project")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub technology: String,
    pub team_members: String,
    pub document: String,
    #[sea_orm(indexed)]
    pub student_id: Uuid,
    #[sea_orm(column_type = "JsonBinary")]
    pub student: StudentSnapshot,
    pub status: ProjectStatus,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub faculty_review: Option<ProjectReview>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub admin_review: Option<ProjectReview>,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::StudentId",
        to = "super::user::Column::Id"
    )]
    Student,
}

impl ActiveModelBehavior for ActiveModel {}
