// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

//! Whole-line cuts in workflow text, located through a tree-sitter syntax
//! tree. Bytes outside the cut lines are copied through untouched, so comments,
//! flow collections, quoting and indentation of the kept jobs survive.

use std::ops::Range;

use serde_yaml_ng::Value;
use tree_sitter::{Node, Parser};

use crate::domain::Removal;

/// Cut every job and step in `removals` out of `text`.
///
/// Returns `None` when a removal cannot be mapped to whole lines: flow-style
/// `jobs` or `steps`, an entry sharing a line with its neighbour, or a
/// document tree-sitter cannot parse cleanly.
pub fn cut_removals(text: &str, removals: &[Removal]) -> Option<String> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_yaml::LANGUAGE.into())
        .ok()?;
    let tree = parser.parse(text, None)?;
    let root = tree.root_node();
    if root.has_error() {
        return None;
    }

    let source = text.as_bytes();
    let top = collection(root, "block_mapping")?;
    let jobs = pair_value(top, "jobs", source, "block_mapping")?;

    let mut spans = Vec::with_capacity(removals.len());
    for removal in removals {
        let node = match removal {
            Removal::Job(job) => find_pair(jobs, &job.name, source)?,
            Removal::Step(step) => {
                let job = find_pair(jobs, &step.job, source)?;
                let body = collection(job.child_by_field_name("value")?, "block_mapping")?;
                let steps = pair_value(body, "steps", source, "block_sequence")?;
                nth_item(steps, step.index)?
            }
        };
        spans.push(line_span(text, node)?);
    }

    Some(cut(text, spans))
}

/// Descend through stream, document and block wrappers to the first `kind` node
fn collection<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    if node.kind() == kind {
        return Some(node);
    }
    if !matches!(node.kind(), "stream" | "document" | "block_node") {
        return None;
    }

    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find_map(|child| collection(child, kind));
    found
}

fn find_pair<'t>(mapping: Node<'t>, key: &str, source: &[u8]) -> Option<Node<'t>> {
    let mut cursor = mapping.walk();
    let found = mapping
        .named_children(&mut cursor)
        .filter(|pair| pair.kind() == "block_mapping_pair")
        .find(|pair| {
            pair.child_by_field_name("key")
                .and_then(|k| key_text(k, source))
                .is_some_and(|k| k == key)
        });
    found
}

fn pair_value<'t>(mapping: Node<'t>, key: &str, source: &[u8], kind: &str) -> Option<Node<'t>> {
    let pair = find_pair(mapping, key, source)?;
    collection(pair.child_by_field_name("value")?, kind)
}

fn nth_item(sequence: Node<'_>, index: usize) -> Option<Node<'_>> {
    let mut cursor = sequence.walk();
    let item = sequence
        .named_children(&mut cursor)
        .filter(|item| item.kind() == "block_sequence_item")
        .nth(index);
    item
}

/// Key as serde sees it, so quoted and plain spellings compare equal
fn key_text(node: Node<'_>, source: &[u8]) -> Option<String> {
    let raw = node.utf8_text(source).ok()?;
    let value: Value = serde_yaml_ng::from_str(raw).ok()?;
    Some(super::workflows::key_label(&value))
}

/// The full lines `node` occupies, trailing newline included
fn line_span(text: &str, node: Node<'_>) -> Option<Range<usize>> {
    let (start, end) = (node.start_byte(), node.end_byte());

    let line_start = text.get(..start)?.rfind('\n').map_or(0, |i| i + 1);
    if !text.get(line_start..start)?.trim().is_empty() {
        return None;
    }

    // Some block nodes already end past their newline
    if text.get(..end)?.ends_with('\n') {
        return Some(line_start..end);
    }

    let rest = text.get(end..)?;
    let line_end = rest.find('\n').map_or(text.len(), |i| end + i + 1);
    let tail = text.get(end..line_end)?.trim();
    if !tail.is_empty() && !tail.starts_with('#') {
        return None;
    }

    Some(line_start..line_end)
}

/// Drop `spans` from `text`; a span nested in an earlier one is absorbed
fn cut(text: &str, mut spans: Vec<Range<usize>>) -> String {
    spans.sort_by_key(|span| span.start);

    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    for span in spans {
        if span.start < pos {
            pos = pos.max(span.end);
            continue;
        }
        out.push_str(&text[pos..span.start]);
        pos = span.end;
    }
    out.push_str(&text[pos..]);
    out
}
