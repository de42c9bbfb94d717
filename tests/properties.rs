// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

mod helpers;

use desonar::domain::PropertiesOutcome;
use desonar::services::properties::remove_properties;
use helpers::TestRepo;

#[test]
fn absent_properties_file_is_a_no_op() {
    let repo = TestRepo::new();
    let path = repo.config().properties_path();

    let outcome = remove_properties(&path, false).unwrap();
    assert_eq!(outcome, PropertiesOutcome::Absent(path));
}

#[test]
fn existing_properties_file_is_deleted() {
    let repo = TestRepo::new();
    let path = repo.write("sonar-project.properties", "sonar.projectKey=acme\n");

    let outcome = remove_properties(&path, false).unwrap();
    assert_eq!(outcome, PropertiesOutcome::Deleted(path.clone()));
    assert!(!path.exists());
}

#[test]
fn dry_run_keeps_properties_file() {
    let repo = TestRepo::new();
    let path = repo.write("sonar-project.properties", "sonar.projectKey=acme\n");

    let outcome = remove_properties(&path, true).unwrap();
    assert_eq!(outcome, PropertiesOutcome::Deleted(path.clone()));
    assert!(path.exists());
}
