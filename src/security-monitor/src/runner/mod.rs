//! Orchestrates a monitoring run.
//!
//! Repositories are processed in list order and checks in registry order.
//! Each check is awaited before the next one starts, so log output for a
//! repository is never interleaved with another check's.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::checks::run_check;
use crate::client::{GitHubClient, Transport};
use crate::directories::StateDirectories;
use crate::repositories::RepositoryDescriptor;
use crate::summary::{RepositoryReport, RunSummary};
use tracing::{error, info, info_span, Instrument};
use url::Url;

/// Runs every registered check against every configured repository.
pub struct Runner<T = GitHubClient> {
    config: RunnerConfig,
    transport: T,
}

impl Runner<GitHubClient> {
    /// Builds a runner backed by the GitHub REST API.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        Url::parse(config.base_url()).map_err(|e| RunnerError::InvalidBaseUrl {
            url: config.base_url().to_string(),
            source: e,
        })?;

        let transport = GitHubClient::new(config.base_url(), config.user_agent())?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> Runner<T> {
    /// Builds a runner over an arbitrary transport.
    pub fn with_transport(config: RunnerConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Executes the full run.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] only if the state directories cannot be
    /// created. Check outcomes never fail the run.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        info!(
            repositories = self.config.repositories().len(),
            checks = self.config.registry().len(),
            "OpenJS Security Monitor starting"
        );

        StateDirectories::new(self.config.cache_dir()).ensure_exist()?;

        let mut summary = RunSummary::new();
        for repository in self.config.repositories() {
            let span = info_span!("repository", repo = %repository.full_name());
            let report = self.process_repository(repository).instrument(span).await;
            summary.record_report(report);
        }

        info!(
            processed = summary.repositories_processed,
            skipped = summary.repositories_skipped,
            checks = summary.checks_run,
            "Run complete"
        );
        Ok(summary)
    }

    /// Runs each check for one repository, sequentially.
    async fn process_repository(&self, repository: &RepositoryDescriptor) -> RepositoryReport {
        if let Err(e) = repository.validate() {
            error!(error = %e, "Skipping invalid repository");
            return RepositoryReport::Skipped {
                repository: repository.clone(),
                reason: e.to_string(),
            };
        }

        info!("🛡️ Analyzing security best practices for {}", repository.name);

        let mut results = Vec::with_capacity(self.config.registry().len());
        for &kind in self.config.registry().checks() {
            results.push(run_check(&self.transport, kind, repository).await);
        }

        RepositoryReport::Checked {
            repository: repository.clone(),
            results,
        }
    }
}
