// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use console::style;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::{Config, PROJECT_CONFIG};
use crate::domain::{
    PropertiesOutcome, ReadmeOutcome, Removal, RemovalReason, SecretAudit, WorkflowAction,
    WorkflowReport, WorkflowsOutcome,
};
use crate::error::Result;
use crate::services::{
    auditor::{self, SecretAuditor},
    properties, readme, workflows,
};

/// Everything one migration run did, step by step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub properties: PropertiesOutcome,
    pub readme: ReadmeOutcome,
    pub workflows: WorkflowsOutcome,
    pub secrets: SecretAudit,
}

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(
            root = %config.root.display(),
            dry_run = config.dry_run,
            keywords = ?config.keywords,
            "config loaded"
        );
        Ok(Self { cli, config })
    }

    pub async fn run(&mut self) -> Result<()> {
        if let Some(ref cmd) = self.cli.command {
            return self.handle_command(cmd).await;
        }

        if self.config.dry_run {
            self.print_info("Dry run: no file will be modified");
        }

        let report = migrate(&self.config).await?;
        self.render(&report);
        Ok(())
    }

    // ─── Report rendering ───

    fn render(&self, report: &MigrationReport) {
        self.render_properties(&report.properties);
        self.render_readme(&report.readme);
        self.render_workflows(&report.workflows);
        self.render_secrets(&report.secrets);
    }

    fn render_properties(&self, outcome: &PropertiesOutcome) {
        match outcome {
            PropertiesOutcome::Deleted(path) => {
                self.print_done(&format!("Deleted {}", path.display()))
            }
            PropertiesOutcome::Absent(path) => {
                self.print_status(&format!("{} not found, skipping", path.display()))
            }
        }
    }

    fn render_readme(&self, outcome: &ReadmeOutcome) {
        match outcome {
            ReadmeOutcome::Missing(path) => {
                self.print_status(&format!("{} not found, skipping", path.display()))
            }
            ReadmeOutcome::NoSection(path) => self.print_status(&format!(
                "No SonarQube section found in {}",
                path.display()
            )),
            ReadmeOutcome::Pruned { path, removed } => {
                self.print_done(&format!(
                    "Removed SonarQube section from {}:",
                    path.display()
                ));
                for line in removed {
                    println!("  {}", style(line).dim());
                }
            }
        }
    }

    fn render_workflows(&self, outcome: &WorkflowsOutcome) {
        match outcome {
            WorkflowsOutcome::MissingDir(path) => self.print_status(&format!(
                "No workflows directory found at {}",
                path.display()
            )),
            WorkflowsOutcome::Scanned(reports) => {
                if reports.is_empty() {
                    self.print_status("No workflow files found");
                }
                for report in reports {
                    self.render_workflow(report);
                }
            }
        }
    }

    fn render_workflow(&self, report: &WorkflowReport) {
        let path = report.path.display();

        for removal in &report.removals {
            let line = match removal {
                Removal::Step(step) => format!(
                    "Removed step '{}' from job '{}' in {}",
                    step.label, step.job, path
                ),
                Removal::Job(job) if job.reason == RemovalReason::NoStepsLeft => {
                    format!("Removed job '{}' from {} (no steps left)", job.name, path)
                }
                Removal::Job(job) => format!("Removed job '{}' from {}", job.name, path),
            };
            self.print_done(&line);
        }

        match report.action {
            WorkflowAction::Deleted => {
                self.print_done(&format!("Removed entire workflow {path}"))
            }
            WorkflowAction::Rewritten => self.print_done(&format!("Updated workflow {path}")),
            WorkflowAction::Unchanged => debug!(path = %path, "workflow unchanged"),
            WorkflowAction::Skipped(ref reason) => {
                debug!(path = %path, reason = %reason, "workflow skipped")
            }
        }
    }

    fn render_secrets(&self, audit: &SecretAudit) {
        let keyword = &self.config.secret_keyword;
        match audit {
            SecretAudit::Skipped => self.print_status("Secret audit skipped"),
            SecretAudit::MissingToken => {
                self.print_warning("GITHUB_TOKEN not provided; cannot list secrets")
            }
            SecretAudit::Unresolved(reason) => {
                self.print_warning(&format!("{reason}; skipping secret check"))
            }
            SecretAudit::Matches { repository, names } if names.is_empty() => self.print_info(
                &format!("No secrets containing '{keyword}' found in {repository}"),
            ),
            SecretAudit::Matches { repository, names } => {
                self.print_info(&format!(
                    "Secrets containing '{keyword}' in {repository}:"
                ));
                for name in names {
                    println!(" - {name}");
                }
            }
            SecretAudit::Failed(message) => {
                self.print_warning(&format!("Error fetching secrets: {message}"))
            }
        }
    }

    // ─── Subcommands ───

    async fn handle_command(&self, cmd: &Commands) -> Result<()> {
        match cmd {
            Commands::Init => {
                let path = Config::create_default(&self.config.root)?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => {
                println!("Root: {}", self.config.root.display());
                println!("Keywords: {}", self.config.keywords.join(", "));
                println!("Properties file: {}", self.config.properties_file.display());
                println!("README: {}", self.config.readme.display());
                println!("Header marker: {}", self.config.header_marker);
                println!("Workflows dir: {}", self.config.workflows_dir.display());
                println!("Workflow globs: {}", self.config.workflow_globs.join(", "));
                println!("Secret keyword: {}", self.config.secret_keyword);
                println!("GitHub host: {}", self.config.github_host);
                println!("API URL: {}", self.config.api_url);
                match self.config.timeout_secs {
                    Some(secs) => println!("Timeout: {secs}s"),
                    None => println!("Timeout: none"),
                }
                println!(
                    "Repository: {}",
                    self.config.repository.as_deref().unwrap_or("(from origin remote)")
                );
                println!(
                    "Token: {}",
                    if self.config.github_token.is_some() {
                        "configured"
                    } else {
                        "not set"
                    }
                );
                Ok(())
            }
            Commands::Doctor => self.run_doctor().await,
            Commands::Completions { shell } => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "desonar", &mut std::io::stdout());
                Ok(())
            }
            #[cfg(feature = "secure-storage")]
            Commands::SetToken => self.set_token(),
        }
    }

    async fn run_doctor(&self) -> Result<()> {
        eprintln!("{} Running diagnostics...\n", style("→").cyan());

        eprintln!("{}", style("Configuration").bold().underlined());
        eprintln!("  Root:        {}", self.config.root.display());
        if let Some(ref path) = Config::config_path() {
            let status = if path.exists() { "found" } else { "not found" };
            eprintln!("  User config: {} ({})", path.display(), status);
        }
        let project = self.config.root.join(PROJECT_CONFIG);
        let status = if project.exists() { "found" } else { "not found" };
        eprintln!("  Project:     {} ({})", project.display(), status);
        eprintln!();

        eprintln!("{}", style("Targets").bold().underlined());
        for (label, path) in [
            ("Properties", self.config.properties_path()),
            ("README", self.config.readme_path()),
            ("Workflows", self.config.workflows_path()),
        ] {
            let status = if path.exists() {
                style("present").green()
            } else {
                style("absent").dim()
            };
            eprintln!("  {:<11}  {} ({})", label, path.display(), status);
        }
        eprintln!();

        eprintln!("{}", style("GitHub").bold().underlined());
        eprint!("  Token:       ");
        if self.config.github_token.is_some() {
            eprintln!("{}", style("configured").green());
        } else {
            eprintln!("{}", style("MISSING").red().bold());
        }
        eprint!("  Repository:  ");
        match auditor::resolve_repository(&self.config).await {
            Ok((repo, source)) => eprintln!("{} ({:?})", style(repo).green(), source),
            Err(reason) => eprintln!("{}: {}", style("UNRESOLVED").red().bold(), reason),
        }

        eprintln!();
        eprintln!("{} Diagnostics complete.", style("✓").green().bold());

        Ok(())
    }

    #[cfg(feature = "secure-storage")]
    fn set_token(&self) -> Result<()> {
        use crate::error::Error;

        eprintln!("Enter GitHub token (input will be hidden):");

        let token = dialoguer::Password::new()
            .with_prompt("Token")
            .interact()?;

        if token.trim().is_empty() {
            return Err(Error::Config("Token cannot be empty".into()));
        }

        let entry =
            keyring::Entry::new("desonar", "github").map_err(|e| Error::Keyring(e.to_string()))?;
        entry
            .set_password(token.trim())
            .map_err(|e| Error::Keyring(e.to_string()))?;

        self.print_done("Token stored in system keychain");
        Ok(())
    }

    // ─── Output helpers ───

    fn print_status(&self, msg: &str) {
        println!("{} {}", style("→").cyan(), msg);
    }

    fn print_done(&self, msg: &str) {
        println!("{} {}", style("✓").green(), msg);
    }

    fn print_info(&self, msg: &str) {
        println!("{} {}", style("info:").cyan(), msg);
    }

    fn print_warning(&self, msg: &str) {
        println!("{} {}", style("warning:").yellow().bold(), msg);
    }
}

/// Run the four cleanup steps in order.
///
/// Filesystem errors from the first three steps propagate; the secret audit
/// folds every failure into its outcome.
pub async fn migrate(config: &Config) -> Result<MigrationReport> {
    let properties = properties::remove_properties(&config.properties_path(), config.dry_run)?;

    let readme = readme::prune_readme(
        &config.readme_path(),
        &config.readme_keyword_set(),
        &config.header_marker,
        config.dry_run,
    )?;

    let workflows = workflows::clean_workflows(
        &config.workflows_path(),
        &config.workflow_globset()?,
        &config.keyword_set(),
        config.dry_run,
    )?;

    let secrets = SecretAuditor::new(config.secret_keyword.clone())
        .run(config)
        .await;

    Ok(MigrationReport {
        properties,
        readme,
        workflows,
        secrets,
    })
}
