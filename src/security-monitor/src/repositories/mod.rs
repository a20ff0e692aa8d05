//! Repository list configuration.
//!
//! The list of repositories to check is either the built-in OpenJS set or a
//! TOML file of `[[repositories]]` tables:
//!
//! ```toml
//! [[repositories]]
//! name = "Express"
//! owner = "expressjs"
//! repo = "express"
//! security-file-path = "SECURITY.md"
//! branch = "master"
//! npm-package = "express"
//! ```

mod descriptor;
mod error;

pub use descriptor::RepositoryDescriptor;
pub use error::ConfigError;

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// On-disk shape of a repository list file.
#[derive(Debug, Deserialize)]
struct RepositoryList {
    #[serde(default)]
    repositories: Vec<RepositoryDescriptor>,
}

/// Returns the built-in list of repositories, in processing order.
#[must_use]
pub fn default_repositories() -> Vec<RepositoryDescriptor> {
    // The Node.js runtime is not an npm package; "node" is a placeholder.
    vec![
        RepositoryDescriptor::new("Node.js", "nodejs", "node", "main").with_npm_package("node"),
        RepositoryDescriptor::new("Express", "expressjs", "express", "master")
            .with_npm_package("express"),
        RepositoryDescriptor::new("webpack", "webpack", "webpack", "main")
            .with_npm_package("webpack"),
    ]
}

/// Loads and validates a repository list from a TOML file.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing, unreadable, not valid TOML,
/// contains no repositories, or any entry fails validation.
pub fn load_repositories(path: &Path) -> Result<Vec<RepositoryDescriptor>, ConfigError> {
    info!(path = %path.display(), "Loading repository list");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let list: RepositoryList = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
        path: path.display().to_string(),
        source: e,
    })?;

    if list.repositories.is_empty() {
        return Err(ConfigError::ValidationError {
            path: path.display().to_string(),
            message: "no repositories defined".to_string(),
        });
    }

    for descriptor in &list.repositories {
        descriptor
            .validate()
            .map_err(|e| ConfigError::ValidationError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        debug!(repo = %descriptor.full_name(), "Loaded repository");
    }

    info!(count = list.repositories.len(), "Loaded repositories");
    Ok(list.repositories)
}
