// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use desonar::domain::{KeywordSet, RepoSlug, contains_ignore_case};
use desonar::error::Error;

fn slug(owner: &str, name: &str) -> RepoSlug {
    RepoSlug {
        owner: owner.into(),
        name: name.into(),
    }
}

// ─── owner/name parsing ──────────────────────────────────────────────────────

#[test]
fn parses_owner_and_name() {
    let parsed: RepoSlug = "acme/widgets".parse().unwrap();
    assert_eq!(parsed, slug("acme", "widgets"));
    assert_eq!(parsed.to_string(), "acme/widgets");
}

#[test]
fn rejects_malformed_slugs() {
    for input in ["", "acme", "/widgets", "acme/", "acme/widgets/extra"] {
        let err = input.parse::<RepoSlug>().unwrap_err();
        assert!(
            matches!(err, Error::InvalidRepository { .. }),
            "expected InvalidRepository for {input:?}, got {err:?}"
        );
    }
}

// ─── Remote URLs ─────────────────────────────────────────────────────────────

#[test]
fn https_remote_with_and_without_git_suffix() {
    assert_eq!(
        RepoSlug::from_remote_url("https://github.com/acme/widgets.git", "github.com"),
        Some(slug("acme", "widgets"))
    );
    assert_eq!(
        RepoSlug::from_remote_url("https://github.com/acme/widgets", "github.com"),
        Some(slug("acme", "widgets"))
    );
}

#[test]
fn scp_style_ssh_remote() {
    assert_eq!(
        RepoSlug::from_remote_url("git@github.com:acme/widgets.git", "github.com"),
        Some(slug("acme", "widgets"))
    );
}

#[test]
fn url_style_ssh_remote() {
    assert_eq!(
        RepoSlug::from_remote_url("ssh://git@github.com/acme/widgets.git", "github.com"),
        Some(slug("acme", "widgets"))
    );
}

#[test]
fn trailing_newline_from_git_output_is_ignored() {
    assert_eq!(
        RepoSlug::from_remote_url("git@github.com:acme/widgets.git\n", "github.com"),
        Some(slug("acme", "widgets"))
    );
}

#[test]
fn other_hosts_are_not_recognised() {
    assert_eq!(
        RepoSlug::from_remote_url("https://gitlab.com/acme/widgets.git", "github.com"),
        None
    );
    assert_eq!(
        RepoSlug::from_remote_url("git@bitbucket.org:acme/widgets.git", "github.com"),
        None
    );
}

#[test]
fn enterprise_host_is_configurable() {
    assert_eq!(
        RepoSlug::from_remote_url("git@github.example.com:acme/widgets.git", "github.example.com"),
        Some(slug("acme", "widgets"))
    );
    assert_eq!(
        RepoSlug::from_remote_url("git@github.com:acme/widgets.git", "github.example.com"),
        None
    );
}

#[test]
fn remote_path_must_be_owner_and_name() {
    assert_eq!(
        RepoSlug::from_remote_url("https://github.com/acme", "github.com"),
        None
    );
}

// ─── Keyword matching ────────────────────────────────────────────────────────

#[test]
fn keyword_set_is_case_sensitive() {
    let keywords = KeywordSet::new(["SonarQube", "sonar-scanner"]);
    assert!(keywords.matches("uses: SonarQube action"));
    assert!(keywords.matches("run: sonar-scanner -X"));
    assert!(!keywords.matches("uses: sonarqube-scan-action"));
    assert_eq!(keywords.find("run: sonar-scanner"), Some("sonar-scanner"));
}

#[test]
fn keyword_set_drops_empty_entries() {
    let keywords = KeywordSet::new(["", "SonarCloud"]);
    assert_eq!(keywords.iter().collect::<Vec<_>>(), vec!["SonarCloud"]);
    assert!(!keywords.matches("anything"));
    assert!(KeywordSet::new([""]).is_empty());
}

#[test]
fn secret_keyword_match_ignores_case() {
    assert!(contains_ignore_case("SONAR_TOKEN", "SONAR"));
    assert!(contains_ignore_case("sonar_host_url", "SONAR"));
    assert!(contains_ignore_case("MY_Sonar_KEY", "sonar"));
    assert!(!contains_ignore_case("DEPLOY_KEY", "SONAR"));
}
