//! Runner configuration.

use crate::checks::CheckRegistry;
use crate::client::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::directories::DEFAULT_CACHE_DIR;
use crate::repositories::RepositoryDescriptor;
use std::path::{Path, PathBuf};

/// Configuration for a monitoring run.
///
/// Immutable once handed to a [`Runner`](super::Runner).
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Repositories to check, in processing order.
    repositories: Vec<RepositoryDescriptor>,
    /// Checks run against every repository.
    registry: CheckRegistry,
    /// GitHub REST API base URL.
    base_url: String,
    /// User agent sent with every request.
    user_agent: String,
    /// Root of the cache and checksum directories.
    cache_dir: PathBuf,
}

impl RunnerConfig {
    /// Creates a configuration with every check and the public GitHub API.
    pub fn new(repositories: Vec<RepositoryDescriptor>) -> Self {
        Self {
            repositories,
            registry: CheckRegistry::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
        }
    }

    /// Sets the checks to run.
    pub fn with_registry(mut self, registry: CheckRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Sets the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the state directory root.
    pub fn with_cache_dir(mut self, cache_dir: PathBuf) -> Self {
        self.cache_dir = cache_dir;
        self
    }

    /// Returns the repositories to check.
    pub fn repositories(&self) -> &[RepositoryDescriptor] {
        &self.repositories
    }

    /// Returns the check registry.
    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the user agent.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the state directory root.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }
}
