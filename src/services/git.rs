// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

pub struct GitService {
    work_dir: PathBuf,
}

impl GitService {
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = gix::discover(path).map_err(|_| Error::NotAGitRepo)?;

        let work_dir = repo
            .workdir()
            .ok_or_else(|| Error::Git("Bare repository not supported".into()))?
            .to_path_buf();

        Ok(Self { work_dir })
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Configured URL of `remote`, `None` when the remote is not set
    pub async fn remote_url(&self, remote: &str) -> Result<Option<String>> {
        let key = format!("remote.{remote}.url");
        let output = Command::new("git")
            .args(["config", "--get", &key])
            .current_dir(&self.work_dir)
            .output()
            .await?;

        // git config exits 1 for a missing key
        if output.status.code() == Some(1) {
            debug!(key = %key, "remote not configured");
            return Ok(None);
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Git(stderr.trim().to_string()));
        }

        let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((!url.is_empty()).then_some(url))
    }
}
