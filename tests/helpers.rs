// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::fs;
use std::path::{Path, PathBuf};

use desonar::Config;
use tempfile::TempDir;

/// Scratch repository rooted in a temp directory
#[allow(dead_code)]
pub struct TestRepo {
    dir: TempDir,
}

#[allow(dead_code)]
impl TestRepo {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    /// Defaults anchored at this repo, with no token or repository set
    pub fn config(&self) -> Config {
        Config::for_root(self.root())
    }
}

#[allow(dead_code)]
pub const SONAR_WORKFLOW: &str = r#"name: Quality
on:
  push:
    branches: [main]
jobs:
  sonarqube:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - name: SonarQube Scan
        uses: sonarsource/sonarqube-scan-action@v2
"#;

#[allow(dead_code)]
pub const MIXED_WORKFLOW: &str = r#"name: CI
on:
  push:
    branches: [main]
  pull_request:
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - name: Build
        run: cargo build --locked
  analyze:
    runs-on: ubuntu-latest
    steps:
      - name: SonarQube Scan
        uses: sonarsource/sonarqube-scan-action@v2
  test:
    runs-on: ubuntu-latest
    steps:
      - run: cargo test
"#;

#[allow(dead_code)]
pub const CLEAN_WORKFLOW: &str = r#"# Release pipeline
name: Release
on:
  push:
    tags: ['v*']
jobs:
  publish:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - run: cargo publish   # needs CARGO_REGISTRY_TOKEN
        env:
          CARGO_REGISTRY_TOKEN: ${{ secrets.CARGO_REGISTRY_TOKEN }}
"#;

#[allow(dead_code)]
pub const README_WITH_SECTION: &str = "# Widgets
Intro paragraph.
## Build
cargo build
## Code Quality
We use SonarQube for static analysis.
Settings live in sonar-project.properties.
## License
MIT
";
