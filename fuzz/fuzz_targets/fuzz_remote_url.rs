// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use desonar::domain::RepoSlug;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Some(slug) = RepoSlug::from_remote_url(data, "github.com") {
        assert!(!slug.owner.is_empty() && !slug.name.is_empty());
        assert!(!slug.name.contains('/'));
    }
});
