#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod checks;
pub mod client;
pub mod directories;
pub mod repositories;
pub mod runner;
pub mod summary;

#[cfg(test)]
pub(crate) mod testing;

pub use checks::{
    run_check, AdvisoryOutcome, CheckKind, CheckOutcome, CheckRegistry, CheckResult,
    PracticeStatus, UnknownCheckError,
};
pub use client::{
    GitHubClient, ProbeMethod, ProbeRequest, ProbeResponse, Transport, TransportError,
    DEFAULT_BASE_URL, DEFAULT_USER_AGENT,
};
pub use directories::{StateDirectories, DEFAULT_CACHE_DIR};
pub use repositories::{default_repositories, load_repositories, ConfigError, RepositoryDescriptor};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use summary::{RepositoryReport, RunSummary};
