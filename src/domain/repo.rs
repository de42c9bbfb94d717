// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A GitHub repository identity in `owner/name` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl RepoSlug {
    /// Derive the slug from a remote URL pointing at `host`.
    ///
    /// Accepts `https://host/owner/name`, `git@host:owner/name` and
    /// `ssh://git@host/owner/name`, each with or without a trailing `.git`.
    /// Remotes on other hosts yield `None`.
    pub fn from_remote_url(url: &str, host: &str) -> Option<Self> {
        let url = url.trim();
        let url = url.strip_suffix(".git").unwrap_or(url);

        let prefixes = [
            format!("https://{host}/"),
            format!("git@{host}:"),
            format!("ssh://git@{host}/"),
        ];

        let path = prefixes
            .iter()
            .find_map(|prefix| url.strip_prefix(prefix.as_str()))?;

        path.trim_end_matches('/').parse().ok()
    }
}

impl FromStr for RepoSlug {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidRepository {
            input: s.to_string(),
        };

        let (owner, name) = s.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
