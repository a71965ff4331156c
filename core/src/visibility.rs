/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use entity::project::ProjectStatus;
use entity::user::Role;
use sea_orm::{ColumnTrait, Condition};
use uuid::Uuid;

use super::types::*;

/// Whether a caller may see a single project. Admins see everything, faculty
/// see projects still in their queue, students see only their own.
pub fn is_visible(role: Role, caller: Uuid, project: &MProject) -> bool {
    match role {
        Role::Admin => true,
        Role::Faculty => matches!(
            project.status,
            ProjectStatus::Pending | ProjectStatus::FacultyApproved
        ),
        Role::Student => project.student_id == caller,
    }
}

/// Store-side form of [`is_visible`] for listings and counts; the two must
/// agree for every role and status.
pub fn scope_condition(role: Role, caller: Uuid) -> Condition {
    match role {
        Role::Admin => Condition::all(),
        Role::Faculty => Condition::any()
            .add(CProject::Status.eq(ProjectStatus::Pending))
            .add(CProject::Status.eq(ProjectStatus::FacultyApproved)),
        Role::Student => Condition::all().add(CProject::StudentId.eq(caller)),
    }
}
