/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for entity enums

use entity::*;
use std::str::FromStr;

#[test]
fn test_role_from_str() {
    assert_eq!(user::Role::from_str("student").unwrap(), user::Role::Student);
    assert_eq!(user::Role::from_str("faculty").unwrap(), user::Role::Faculty);
    assert_eq!(user::Role::from_str("admin").unwrap(), user::Role::Admin);

    assert!(user::Role::from_str("supervisor").is_err());
    assert!(user::Role::from_str("Admin").is_err());
    assert!(user::Role::from_str("").is_err());
}

#[test]
fn test_role_serde() {
    assert_eq!(
        serde_json::to_string(&user::Role::Student).unwrap(),
        "\"student\""
    );
    assert_eq!(
        serde_json::to_string(&user::Role::Faculty).unwrap(),
        "\"faculty\""
    );
    assert_eq!(
        serde_json::to_string(&user::Role::Admin).unwrap(),
        "\"admin\""
    );

    let role: user::Role = serde_json::from_str("\"faculty\"").unwrap();
    assert_eq!(role, user::Role::Faculty);

    assert!(serde_json::from_str::<user::Role>("\"root\"").is_err());
}

#[test]
fn test_project_status_from_str() {
    assert_eq!(
        project::ProjectStatus::from_str("pending").unwrap(),
        project::ProjectStatus::Pending
    );
    assert_eq!(
        project::ProjectStatus::from_str("faculty-approved").unwrap(),
        project::ProjectStatus::FacultyApproved
    );
    assert_eq!(
        project::ProjectStatus::from_str("approved").unwrap(),
        project::ProjectStatus::Approved
    );
    assert_eq!(
        project::ProjectStatus::from_str("rejected").unwrap(),
        project::ProjectStatus::Rejected
    );
    assert_eq!(
        project::ProjectStatus::from_str("needs-revision").unwrap(),
        project::ProjectStatus::NeedsRevision
    );

    assert!(project::ProjectStatus::from_str("in-review").is_err());
    assert!(project::ProjectStatus::from_str("facultyApproved").is_err());
}

#[test]
fn test_project_status_serde() {
    assert_eq!(
        serde_json::to_string(&project::ProjectStatus::Pending).unwrap(),
        "\"pending\""
    );
    assert_eq!(
        serde_json::to_string(&project::ProjectStatus::FacultyApproved).unwrap(),
        "\"faculty-approved\""
    );
    assert_eq!(
        serde_json::to_string(&project::ProjectStatus::NeedsRevision).unwrap(),
        "\"needs-revision\""
    );

    let status: project::ProjectStatus = serde_json::from_str("\"faculty-approved\"").unwrap();
    assert_eq!(status, project::ProjectStatus::FacultyApproved);

    assert!(serde_json::from_str::<project::ProjectStatus>("\"unknown\"").is_err());
}

#[test]
fn test_review_action_serde() {
    assert_eq!(
        serde_json::to_string(&project::ReviewAction::Approved).unwrap(),
        "\"approved\""
    );
    assert_eq!(
        serde_json::to_string(&project::ReviewAction::Rejected).unwrap(),
        "\"rejected\""
    );
    assert_eq!(
        serde_json::to_string(&project::ReviewAction::Revision).unwrap(),
        "\"revision\""
    );

    let action: project::ReviewAction = serde_json::from_str("\"revision\"").unwrap();
    assert_eq!(action, project::ReviewAction::Revision);

    assert!(serde_json::from_str::<project::ReviewAction>("\"escalate\"").is_err());
}
