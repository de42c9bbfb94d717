// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::path::PathBuf;

use super::RepoSlug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertiesOutcome {
    Deleted(PathBuf),
    Absent(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadmeOutcome {
    Missing(PathBuf),
    NoSection(PathBuf),
    Pruned { path: PathBuf, removed: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowsOutcome {
    MissingDir(PathBuf),
    Scanned(Vec<WorkflowReport>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    /// The job name or body mentions a keyword
    Keyword,
    /// Every step was removed, or the job never had any
    NoStepsLeft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedJob {
    pub name: String,
    pub reason: RemovalReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedStep {
    pub job: String,
    /// Position in the job's original `steps` list
    pub index: usize,
    /// `name`, `uses` or `run` of the step, whichever comes first
    pub label: String,
}

/// One removal, in the order jobs were walked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    Job(RemovedJob),
    Step(RemovedStep),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowAction {
    Deleted,
    Rewritten,
    Unchanged,
    Skipped(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowReport {
    pub path: PathBuf,
    pub removals: Vec<Removal>,
    pub action: WorkflowAction,
}

impl WorkflowReport {
    pub fn skipped(path: PathBuf, reason: impl Into<String>) -> Self {
        Self {
            path,
            removals: Vec::new(),
            action: WorkflowAction::Skipped(reason.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretAudit {
    Skipped,
    MissingToken,
    Unresolved(String),
    Matches {
        repository: RepoSlug,
        names: Vec<String>,
    },
    Failed(String),
}
