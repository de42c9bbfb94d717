// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::{RepoSlug, SecretAudit, contains_ignore_case};
use crate::services::git::GitService;
use crate::services::github::{GitHubClient, SecretsApi};

/// Where the repository identity came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentitySource {
    Explicit,
    OriginRemote,
}

/// Resolve `owner/name`: the explicit setting wins, then the origin remote.
pub async fn resolve_repository(
    config: &Config,
) -> std::result::Result<(RepoSlug, IdentitySource), String> {
    if let Some(ref explicit) = config.repository {
        return explicit
            .parse()
            .map(|slug| (slug, IdentitySource::Explicit))
            .map_err(|e: crate::error::Error| e.to_string());
    }

    let git = GitService::discover(&config.root).map_err(|e| {
        debug!(error = %e, "no git repository for identity lookup");
        "Could not determine repository name (no GITHUB_REPOSITORY and not a git repository)"
            .to_string()
    })?;

    let url = match git.remote_url("origin").await {
        Ok(Some(url)) => url,
        Ok(None) => {
            return Err(
                "Could not determine repository name (no GITHUB_REPOSITORY and no origin remote)"
                    .into(),
            );
        }
        Err(e) => return Err(format!("Could not read origin remote: {e}")),
    };

    RepoSlug::from_remote_url(&url, &config.github_host)
        .map(|slug| (slug, IdentitySource::OriginRemote))
        .ok_or_else(|| format!("Could not determine repository name from remote '{url}'"))
}

/// Lists repository secrets whose name contains the audit keyword
pub struct SecretAuditor {
    keyword: String,
}

impl SecretAuditor {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }

    /// Full audit: token check, identity resolution, then the API calls.
    ///
    /// Never fails; every problem is folded into the returned [`SecretAudit`].
    pub async fn run(&self, config: &Config) -> SecretAudit {
        if config.skip_secrets {
            return SecretAudit::Skipped;
        }

        let Some(ref token) = config.github_token else {
            return SecretAudit::MissingToken;
        };

        let repo = match resolve_repository(config).await {
            Ok((repo, source)) => {
                debug!(repository = %repo, ?source, "repository resolved");
                repo
            }
            Err(reason) => return SecretAudit::Unresolved(reason),
        };

        let client = match GitHubClient::new(config, token) {
            Ok(client) => client,
            Err(e) => return SecretAudit::Failed(e.to_string()),
        };

        self.audit(&client, &repo).await
    }

    /// Query `api` for `repo` and filter secret names by keyword
    pub async fn audit(&self, api: &dyn SecretsApi, repo: &RepoSlug) -> SecretAudit {
        let result = async {
            let repository = api.resolve_repository(repo).await?;
            let names = api.list_secret_names(&repository).await?;
            Ok::<_, crate::error::Error>((repository, names))
        }
        .await;

        match result {
            Ok((repository, names)) => {
                let names = names
                    .into_iter()
                    .filter(|name| contains_ignore_case(name, &self.keyword))
                    .collect();
                SecretAudit::Matches { repository, names }
            }
            Err(e) => {
                warn!(repository = %repo, error = %e, "secret audit failed");
                SecretAudit::Failed(e.to_string())
            }
        }
    }
}
