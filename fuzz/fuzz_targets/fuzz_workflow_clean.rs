// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use desonar::Config;
use desonar::services::workflows::{clean_document, preserve_layout};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let Ok(mut doc) = serde_yaml_ng::from_str::<serde_yaml_ng::Value>(data) else {
        return;
    };
    let keywords = Config::default().keyword_set();
    if let Ok(Some(cleaned)) = clean_document(&mut doc, &keywords) {
        if let Some(jobs) = doc.get("jobs").and_then(|j| j.as_mapping()) {
            assert_eq!(jobs.len(), cleaned.jobs_left);
        }
        if let Some(edited) = preserve_layout(data, &doc, &cleaned.removals) {
            let reparsed: serde_yaml_ng::Value = serde_yaml_ng::from_str(&edited).unwrap();
            assert_eq!(reparsed, doc);
        }
    }
});
