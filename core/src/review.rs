/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use entity::project::{ProjectReview, ProjectStatus, ReviewAction};
use entity::user::Role;
use std::fmt;

/// Which of the two review records a verdict lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewTier {
    Faculty,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewError {
    EmptyComment,
    RoleNotPermitted,
}

impl fmt::Display for ReviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewError::EmptyComment => write!(f, "Review comment cannot be empty"),
            ReviewError::RoleNotPermitted => write!(f, "Not allowed to review projects"),
        }
    }
}

impl std::error::Error for ReviewError {}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewOutcome {
    pub status: ProjectStatus,
    pub tier: ReviewTier,
    pub review: ProjectReview,
}

/// Computes the status transition and review record for a single verdict.
///
/// Faculty reviews are first-level and act on any current status: an approval
/// parks the project at [`ProjectStatus::FacultyApproved`], every other
/// verdict lands at [`ProjectStatus::Rejected`]. Admin reviews are final:
/// an approval only finalizes projects faculty already approved, while a
/// revision request or rejection applies regardless of current status.
pub fn apply_review(
    current: ProjectStatus,
    reviewer_role: Role,
    action: ReviewAction,
    comment: &str,
    reviewed_by: &str,
    now: NaiveDateTime,
) -> Result<ReviewOutcome, ReviewError> {
    if comment.trim().is_empty() {
        return Err(ReviewError::EmptyComment);
    }

    let tier = match reviewer_role {
        Role::Faculty => ReviewTier::Faculty,
        Role::Admin => ReviewTier::Admin,
        Role::Student => return Err(ReviewError::RoleNotPermitted),
    };

    let status = match tier {
        // A faculty revision request counts as a rejection.
        ReviewTier::Faculty => match action {
            ReviewAction::Approved => ProjectStatus::FacultyApproved,
            ReviewAction::Rejected | ReviewAction::Revision => ProjectStatus::Rejected,
        },
        ReviewTier::Admin => match action {
            ReviewAction::Approved if current == ProjectStatus::FacultyApproved => {
                ProjectStatus::Approved
            }
            // Admin approval without a prior faculty approval records the
            // review but leaves the status where it is.
            ReviewAction::Approved => current,
            ReviewAction::Revision => ProjectStatus::NeedsRevision,
            ReviewAction::Rejected => ProjectStatus::Rejected,
        },
    };

    Ok(ReviewOutcome {
        status,
        tier,
        review: ProjectReview {
            action,
            comment: comment.to_string(),
            reviewed_by: reviewed_by.to_string(),
            reviewed_at: now,
        },
    })
}
