// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Not a git repository")]
    #[diagnostic(
        code(desonar::git::not_repo),
        help("Run this command inside a git repository or pass --repository owner/name")
    )]
    NotAGitRepo,

    #[error("Git error: {0}")]
    #[diagnostic(code(desonar::git::error))]
    Git(String),

    #[error("Invalid repository '{input}': expected owner/name")]
    #[diagnostic(
        code(desonar::repo::invalid),
        help("Set GITHUB_REPOSITORY=owner/name or pass --repository owner/name")
    )]
    InvalidRepository { input: String },

    #[error("GitHub API returned HTTP {status} for {endpoint}: {message}")]
    #[diagnostic(code(desonar::github::status))]
    GitHub {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(desonar::config::error))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(desonar::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(code(desonar::yaml))]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error(transparent)]
    #[diagnostic(code(desonar::http))]
    Http(#[from] reqwest::Error),

    #[cfg(feature = "secure-storage")]
    #[error("Dialog error: {0}")]
    Dialog(String),

    #[cfg(feature = "secure-storage")]
    #[error("Keyring error: {0}")]
    #[diagnostic(
        code(desonar::keyring::error),
        help("Check your system keychain configuration")
    )]
    Keyring(String),
}

#[cfg(feature = "secure-storage")]
impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
