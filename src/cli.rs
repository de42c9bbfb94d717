// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "desonar")]
#[command(version)]
#[command(about = "Remove SonarQube integration artifacts from a repository", long_about = None)]
pub struct Cli {
    /// Repository root to operate on
    #[arg(short = 'C', long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// GitHub token used for the secret audit
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Repository as owner/name (defaults to the origin remote)
    #[arg(long, env = "GITHUB_REPOSITORY", value_name = "OWNER/NAME")]
    pub repository: Option<String>,

    /// Report changes without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Skip listing SONAR secrets
    #[arg(long)]
    pub skip_secrets: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Write a default .desonar.toml into the repository root
    Init,
    /// Show current configuration
    Config,
    /// Check token, repository identity and target files
    Doctor,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Store a GitHub token in the system keychain
    #[cfg(feature = "secure-storage")]
    SetToken,
}
