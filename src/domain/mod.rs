// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

mod keywords;
mod outcome;
mod repo;

pub use keywords::*;
pub use outcome::*;
pub use repo::*;
