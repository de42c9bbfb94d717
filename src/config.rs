// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use globset::{Glob, GlobSet, GlobSetBuilder};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::domain::KeywordSet;
use crate::error::{Error, Result};

/// Project-level config file name, looked up in the repository root
pub const PROJECT_CONFIG: &str = ".desonar.toml";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Repository root every relative path is resolved against
    #[serde(skip, default = "default_root")]
    pub root: PathBuf,

    /// Substrings marking SonarQube content (case-sensitive)
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    #[serde(default = "default_properties_file")]
    pub properties_file: PathBuf,

    #[serde(default = "default_readme")]
    pub readme: PathBuf,

    /// Prefix that marks a section header in the README
    #[serde(default = "default_header_marker")]
    pub header_marker: String,

    #[serde(default = "default_workflows_dir")]
    pub workflows_dir: PathBuf,

    #[serde(default = "default_workflow_globs")]
    pub workflow_globs: Vec<String>,

    /// Secret names containing this (case-insensitive) are reported
    #[serde(default = "default_secret_keyword")]
    pub secret_keyword: String,

    /// Host used to recognise the origin remote URL
    #[serde(default = "default_github_host")]
    pub github_host: String,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// HTTP timeout in seconds; unset means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Explicit owner/name, overrides the origin remote
    #[serde(default)]
    pub repository: Option<String>,

    #[serde(skip)]
    pub github_token: Option<SecretString>,

    #[serde(skip)]
    pub dry_run: bool,

    #[serde(skip)]
    pub skip_secrets: bool,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}
fn default_keywords() -> Vec<String> {
    vec![
        "sonar-scanner".into(),
        "SonarQube".into(),
        "SonarCloud".into(),
    ]
}
fn default_properties_file() -> PathBuf {
    PathBuf::from("sonar-project.properties")
}
fn default_readme() -> PathBuf {
    PathBuf::from("README.md")
}
fn default_header_marker() -> String {
    "##".into()
}
fn default_workflows_dir() -> PathBuf {
    PathBuf::from(".github/workflows")
}
fn default_workflow_globs() -> Vec<String> {
    vec!["*.yml".into(), "*.yaml".into()]
}
fn default_secret_keyword() -> String {
    "SONAR".into()
}
fn default_github_host() -> String {
    "github.com".into()
}
fn default_api_url() -> String {
    "https://api.github.com".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            keywords: default_keywords(),
            properties_file: default_properties_file(),
            readme: default_readme(),
            header_marker: default_header_marker(),
            workflows_dir: default_workflows_dir(),
            workflow_globs: default_workflow_globs(),
            secret_keyword: default_secret_keyword(),
            github_host: default_github_host(),
            api_url: default_api_url(),
            timeout_secs: None,
            repository: None,
            github_token: None,
            dry_run: false,
            skip_secrets: false,
        }
    }
}

impl Config {
    /// Defaults anchored at `root`, without reading any file or environment
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Load with priority: CLI > GITHUB_* env > DESONAR_* env > project config > user config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = match cli.root {
            Some(ref root) => root.clone(),
            None => std::env::current_dir()?,
        };

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        let project_config = root.join(PROJECT_CONFIG);
        if project_config.exists() {
            figment = figment.merge(Toml::file(&project_config));
        }

        // Environment variables (DESONAR_API_URL, DESONAR_KEYWORDS, etc.)
        figment = figment.merge(Env::prefixed("DESONAR_").split("__"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;
        config.root = root;

        if let Some(repo) = std::env::var("GITHUB_REPOSITORY")
            .ok()
            .filter(|r| !r.trim().is_empty())
        {
            config.repository = Some(repo);
        }
        config.github_token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .map(SecretString::from);

        #[cfg(feature = "secure-storage")]
        if config.github_token.is_none() {
            if let Ok(entry) = keyring::Entry::new("desonar", "github") {
                if let Ok(token) = entry.get_password() {
                    config.github_token = Some(SecretString::from(token));
                }
            }
        }

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "desonar").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref token) = cli.token {
            if !token.trim().is_empty() {
                self.github_token = Some(SecretString::from(token.clone()));
            }
        }
        if let Some(ref repo) = cli.repository {
            if !repo.trim().is_empty() {
                self.repository = Some(repo.clone());
            }
        }
        self.dry_run = cli.dry_run;
        self.skip_secrets = cli.skip_secrets;
    }

    pub fn validate(&self) -> Result<()> {
        if self.keywords.is_empty() {
            return Err(Error::Config("keywords cannot be empty".into()));
        }

        if self.keywords.iter().any(|k| k.is_empty()) {
            return Err(Error::Config(
                "keywords cannot contain an empty string".into(),
            ));
        }

        if self.header_marker.is_empty() {
            return Err(Error::Config("header_marker cannot be empty".into()));
        }

        if self.secret_keyword.trim().is_empty() {
            return Err(Error::Config("secret_keyword cannot be empty".into()));
        }

        if self.github_host.is_empty() {
            return Err(Error::Config("github_host cannot be empty".into()));
        }

        let api_url = url::Url::parse(&self.api_url)
            .map_err(|e| Error::Config(format!("api_url '{}' is invalid: {e}", self.api_url)))?;
        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "api_url must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }

        if let Some(secs) = self.timeout_secs {
            if !(1..=3600).contains(&secs) {
                return Err(Error::Config(format!(
                    "timeout_secs must be between 1 and 3600, got {secs}"
                )));
            }
        }

        self.workflow_globset()?;

        Ok(())
    }

    pub fn keyword_set(&self) -> KeywordSet {
        KeywordSet::new(self.keywords.iter().cloned())
    }

    /// Keywords plus the properties file name, used to locate the README section
    pub fn readme_keyword_set(&self) -> KeywordSet {
        let mut keywords = self.keywords.clone();
        if let Some(name) = self.properties_file.file_name() {
            keywords.push(name.to_string_lossy().into_owned());
        }
        KeywordSet::new(keywords)
    }

    pub fn workflow_globset(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.workflow_globs {
            let glob = Glob::new(pattern)
                .map_err(|e| Error::Config(format!("invalid workflow glob '{pattern}': {e}")))?;
            builder.add(glob);
        }
        builder
            .build()
            .map_err(|e| Error::Config(format!("invalid workflow globs: {e}")))
    }

    pub fn properties_path(&self) -> PathBuf {
        self.root.join(&self.properties_file)
    }

    pub fn readme_path(&self) -> PathBuf {
        self.root.join(&self.readme)
    }

    pub fn workflows_path(&self) -> PathBuf {
        self.root.join(&self.workflows_dir)
    }

    /// Create the project config file with commented defaults
    pub fn create_default(root: &Path) -> Result<PathBuf> {
        let path = root.join(PROJECT_CONFIG);
        if path.exists() {
            return Err(Error::Config(format!(
                "{} already exists",
                path.display()
            )));
        }

        let content = r###"# desonar configuration

# Substrings that mark SonarQube content in workflows and the README
keywords = ["sonar-scanner", "SonarQube", "SonarCloud"]

# File deleted outright
properties_file = "sonar-project.properties"

# README pruned of the SonarQube section
readme = "README.md"
header_marker = "##"

# Workflow documents to clean
workflows_dir = ".github/workflows"
workflow_globs = ["*.yml", "*.yaml"]

# Secrets whose name contains this (case-insensitive) are listed
secret_keyword = "SONAR"

# GitHub host and REST API
github_host = "github.com"
api_url = "https://api.github.com"

# HTTP timeout in seconds (unset: no timeout)
# timeout_secs = 30

# Repository as owner/name (default: GITHUB_REPOSITORY, then the origin remote)
# repository = "owner/name"
"###;

        fs::write(&path, content)?;
        Ok(path)
    }
}
