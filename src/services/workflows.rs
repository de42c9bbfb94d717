// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::fs;
use std::path::{Path, PathBuf};

use globset::GlobSet;
use serde_yaml_ng::Value;
use tracing::{debug, warn};

use super::yaml_layout;
use crate::domain::{
    KeywordSet, Removal, RemovalReason, RemovedJob, RemovedStep, WorkflowAction, WorkflowReport,
    WorkflowsOutcome,
};
use crate::error::Result;

/// What cleaning did to one parsed workflow document
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanedDocument {
    /// Job and step removals in job order, each job's steps before the job
    pub removals: Vec<Removal>,
    pub modified: bool,
    pub jobs_left: usize,
}

/// Strip SonarQube jobs and steps from a workflow document in place.
///
/// Returns `None` when `doc` is not a mapping with a `jobs` mapping. Matching
/// is substring-based over the YAML serialization of each job and step, so
/// a keyword anywhere inside (name, `uses`, `run`, `env`, ...) counts.
///
/// A job left without steps is removed too, including one that never had any.
pub fn clean_document(doc: &mut Value, keywords: &KeywordSet) -> Result<Option<CleanedDocument>> {
    let Some(jobs) = doc.get_mut("jobs").and_then(Value::as_mapping_mut) else {
        return Ok(None);
    };

    let mut cleaned = CleanedDocument::default();

    // Snapshot: jobs is mutated while walking it
    let job_keys: Vec<Value> = jobs.keys().cloned().collect();

    for key in job_keys {
        let name = key_label(&key);
        let Some(job) = jobs.get_mut(&key) else {
            continue;
        };

        let job_text = serde_yaml_ng::to_string(&*job)?;
        if keywords.matches(&name) || keywords.matches(&job_text) {
            jobs.shift_remove(&key);
            cleaned.removals.push(Removal::Job(RemovedJob {
                name,
                reason: RemovalReason::Keyword,
            }));
            cleaned.modified = true;
            continue;
        }

        let steps = job
            .get("steps")
            .and_then(Value::as_sequence)
            .cloned()
            .unwrap_or_default();
        let original_len = steps.len();

        let mut kept = Vec::with_capacity(original_len);
        for (index, step) in steps.into_iter().enumerate() {
            let step_text = serde_yaml_ng::to_string(&step)?;
            if keywords.matches(&step_text) {
                cleaned.removals.push(Removal::Step(RemovedStep {
                    job: name.clone(),
                    index,
                    label: step_label(&step),
                }));
                cleaned.modified = true;
            } else {
                kept.push(step);
            }
        }

        if kept.is_empty() {
            jobs.shift_remove(&key);
            cleaned.removals.push(Removal::Job(RemovedJob {
                name,
                reason: RemovalReason::NoStepsLeft,
            }));
            cleaned.modified = true;
        } else if kept.len() != original_len {
            if let Some(job) = job.as_mapping_mut() {
                job.insert(Value::from("steps"), Value::Sequence(kept));
            }
        }
    }

    cleaned.jobs_left = jobs.len();
    Ok(Some(cleaned))
}

/// Clean one workflow file on disk: delete it when no jobs survive, rewrite it
/// when something changed, leave it byte-for-byte alone otherwise.
pub fn clean_workflow_file(path: &Path, keywords: &KeywordSet, dry_run: bool) -> Result<WorkflowReport> {
    let text = fs::read_to_string(path)?;

    let mut doc: Value = match serde_yaml_ng::from_str(&text) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping unparsable workflow");
            return Ok(WorkflowReport::skipped(
                path.to_path_buf(),
                format!("invalid YAML: {e}"),
            ));
        }
    };

    let Some(cleaned) = clean_document(&mut doc, keywords)? else {
        debug!(path = %path.display(), "no jobs mapping, skipping");
        return Ok(WorkflowReport::skipped(path.to_path_buf(), "no jobs mapping"));
    };

    let action = if cleaned.jobs_left == 0 {
        if !dry_run {
            fs::remove_file(path)?;
        }
        WorkflowAction::Deleted
    } else if cleaned.modified {
        if !dry_run {
            let content = match preserve_layout(&text, &doc, &cleaned.removals) {
                Some(content) => content,
                None => {
                    warn!(path = %path.display(), "cannot cut workflow in place, re-serializing");
                    serde_yaml_ng::to_string(&doc)?
                }
            };
            fs::write(path, content)?;
        }
        WorkflowAction::Rewritten
    } else {
        WorkflowAction::Unchanged
    };

    Ok(WorkflowReport {
        path: path.to_path_buf(),
        removals: cleaned.removals,
        action,
    })
}

/// Clean every workflow in `dir` whose file name matches `globs`
pub fn clean_workflows(
    dir: &Path,
    globs: &GlobSet,
    keywords: &KeywordSet,
    dry_run: bool,
) -> Result<WorkflowsOutcome> {
    if !dir.is_dir() {
        return Ok(WorkflowsOutcome::MissingDir(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if globs.is_match(entry.file_name()) {
            files.push(entry.path());
        }
    }
    files.sort();

    debug!(dir = %dir.display(), count = files.len(), "workflow files found");

    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        reports.push(clean_workflow_file(&path, keywords, dry_run)?);
    }

    Ok(WorkflowsOutcome::Scanned(reports))
}

/// Cut `removals` out of the original text, keeping every other byte.
///
/// The result is accepted only if it parses back to `cleaned`; otherwise
/// `None` and the caller falls back to re-serializing.
pub fn preserve_layout(original: &str, cleaned: &Value, removals: &[Removal]) -> Option<String> {
    let edited = yaml_layout::cut_removals(original, removals)?;
    match serde_yaml_ng::from_str::<Value>(&edited) {
        Ok(reparsed) if reparsed == *cleaned => Some(edited),
        _ => {
            debug!("layout-preserving cut does not match the cleaned document");
            None
        }
    }
}

pub(crate) fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => format!("{other:?}"),
    }
}

fn step_label(step: &Value) -> String {
    ["name", "uses", "run"]
        .iter()
        .find_map(|field| step.get(*field).and_then(Value::as_str))
        .and_then(|s| s.lines().next())
        .map(str::to_string)
        .unwrap_or_else(|| "<unnamed step>".to_string())
}
