// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

pub mod auditor;
pub mod git;
pub mod github;
pub mod properties;
pub mod readme;
pub mod workflows;
pub mod yaml_layout;
