// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::fs;
use std::ops::Range;
use std::path::Path;

use tracing::debug;

use crate::domain::{KeywordSet, ReadmeOutcome};
use crate::error::Result;

/// README text with the SonarQube section cut out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunedReadme {
    pub content: String,
    pub removed: Vec<String>,
}

/// Locate the section to remove as a `[start, end)` line range.
///
/// The span covers every line mentioning a keyword, widened backward to the
/// header that opens it and forward up to (not including) the next header.
pub fn find_section(lines: &[&str], keywords: &KeywordSet, marker: &str) -> Option<Range<usize>> {
    let first = lines.iter().position(|l| keywords.matches(l))?;
    let last = lines.iter().rposition(|l| keywords.matches(l))?;

    let is_header = |i: usize| lines[i].starts_with(marker);

    let mut start = first;
    while start > 0 && !is_header(start) {
        start -= 1;
    }

    let mut end = last + 1;
    while end < lines.len() && !is_header(end) {
        end += 1;
    }

    Some(start..end)
}

/// Remove the section from `text`, or `None` when nothing matches.
pub fn prune(text: &str, keywords: &KeywordSet, marker: &str) -> Option<PrunedReadme> {
    let lines: Vec<&str> = text.lines().collect();
    let range = find_section(&lines, keywords, marker)?;

    let removed = lines[range.clone()]
        .iter()
        .map(|l| l.to_string())
        .collect();

    let mut kept: Vec<&str> = Vec::with_capacity(lines.len() - range.len());
    kept.extend_from_slice(&lines[..range.start]);
    kept.extend_from_slice(&lines[range.end..]);

    let mut content = kept.join("\n");
    content.push('\n');

    Some(PrunedReadme { content, removed })
}

pub fn prune_readme(
    path: &Path,
    keywords: &KeywordSet,
    marker: &str,
    dry_run: bool,
) -> Result<ReadmeOutcome> {
    if !path.exists() {
        return Ok(ReadmeOutcome::Missing(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?;
    let Some(pruned) = prune(&text, keywords, marker) else {
        return Ok(ReadmeOutcome::NoSection(path.to_path_buf()));
    };

    debug!(
        path = %path.display(),
        removed = pruned.removed.len(),
        "readme section located"
    );

    if !dry_run {
        fs::write(path, &pruned.content)?;
    }

    Ok(ReadmeOutcome::Pruned {
        path: path.to_path_buf(),
        removed: pruned.removed,
    })
}
