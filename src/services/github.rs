// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::domain::RepoSlug;
use crate::error::{Error, Result};

const PER_PAGE: usize = 100;
const API_VERSION: &str = "2022-11-28";

/// Read-only view of the hosting API needed by the secret audit
#[async_trait]
pub trait SecretsApi: Send + Sync {
    /// Confirm the repository exists and is visible, returning its canonical slug
    async fn resolve_repository(&self, repo: &RepoSlug) -> Result<RepoSlug>;

    /// Names of the Actions secrets configured on `repo`
    async fn list_secret_names(&self, repo: &RepoSlug) -> Result<Vec<String>>;
}

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct RepositoryResponse {
    full_name: String,
}

#[derive(Deserialize)]
struct SecretsPage {
    total_count: usize,
    secrets: Vec<SecretEntry>,
}

#[derive(Deserialize)]
struct SecretEntry {
    name: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl GitHubClient {
    pub fn new(config: &Config, token: &SecretString) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(concat!("desonar/", env!("CARGO_PKG_VERSION"))));
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| Error::Config("GitHub token contains invalid characters".into()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(url = %url, "github request");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(Error::GitHub {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl SecretsApi for GitHubClient {
    async fn resolve_repository(&self, repo: &RepoSlug) -> Result<RepoSlug> {
        let response: RepositoryResponse = self
            .get_json(&format!("/repos/{}/{}", repo.owner, repo.name))
            .await?;
        response.full_name.parse()
    }

    async fn list_secret_names(&self, repo: &RepoSlug) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut page = 1;

        loop {
            let response: SecretsPage = self
                .get_json(&format!(
                    "/repos/{}/{}/actions/secrets?per_page={}&page={}",
                    repo.owner, repo.name, PER_PAGE, page
                ))
                .await?;

            let page_len = response.secrets.len();
            names.extend(response.secrets.into_iter().map(|s| s.name));

            if page_len < PER_PAGE || names.len() >= response.total_count {
                break;
            }
            page += 1;
        }

        Ok(names)
    }
}
