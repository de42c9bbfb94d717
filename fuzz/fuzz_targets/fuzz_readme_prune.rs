// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

#![no_main]

use desonar::Config;
use desonar::services::readme::prune;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let keywords = Config::default().readme_keyword_set();
    if let Some(pruned) = prune(data, &keywords, "##") {
        assert!(prune(&pruned.content, &keywords, "##").is_none());
    }
});
