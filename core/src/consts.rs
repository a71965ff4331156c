/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;
use uuid::{uuid, Uuid};

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const ADMIN_USER_ID: Uuid = uuid!("00000000-0000-0000-0000-000000000001");

// Development fallback; deployments set --admin-password-file instead.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const DEFAULT_ADMIN_NAME: &str = "Admin";
pub const DEFAULT_ADMIN_DEPARTMENT: &str = "ADMIN";
