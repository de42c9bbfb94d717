// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::PropertiesOutcome;
use crate::error::Result;

/// Delete the scanner properties file if it exists.
///
/// Filesystem errors are returned to the caller and abort the run.
pub fn remove_properties(path: &Path, dry_run: bool) -> Result<PropertiesOutcome> {
    if !path.exists() {
        debug!(path = %path.display(), "properties file absent");
        return Ok(PropertiesOutcome::Absent(path.to_path_buf()));
    }

    if !dry_run {
        fs::remove_file(path)?;
    }
    Ok(PropertiesOutcome::Deleted(path.to_path_buf()))
}
