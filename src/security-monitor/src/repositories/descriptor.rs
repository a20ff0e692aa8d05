//! Repository descriptor deserialization and validation.

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// A repository whose security practices are checked.
///
/// Identity is `(owner, repo)`; `name` is only used for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RepositoryDescriptor {
    /// Human-readable project name (e.g., "Express").
    pub name: String,

    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Path of the security policy file inside the repository.
    #[serde(default = "default_security_file_path")]
    pub security_file_path: String,

    /// Branch the security policy file is read from.
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Package published to npm, if any.
    #[serde(default)]
    pub npm_package: Option<String>,
}

pub(crate) fn default_security_file_path() -> String {
    "SECURITY.md".to_string()
}

pub(crate) fn default_branch() -> String {
    "main".to_string()
}

impl RepositoryDescriptor {
    /// Creates a descriptor with the default security file path and no npm package.
    pub fn new(
        name: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            repo: repo.into(),
            security_file_path: default_security_file_path(),
            branch: branch.into(),
            npm_package: None,
        }
    }

    /// Sets the npm package name.
    pub fn with_npm_package(mut self, npm_package: impl Into<String>) -> Self {
        self.npm_package = Some(npm_package.into());
        self
    }

    /// Sets the security policy file path.
    pub fn with_security_file_path(mut self, path: impl Into<String>) -> Self {
        self.security_file_path = path.into();
        self
    }

    /// Returns the repository name in "owner/repo" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Checks that every field used to build API paths is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("name", &self.name),
            ("owner", &self.owner),
            ("repo", &self.repo),
            ("security-file-path", &self.security_file_path),
            ("branch", &self.branch),
        ];

        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    path: self.full_name(),
                    message: format!("{field} must not be empty"),
                });
            }
        }

        Ok(())
    }
}
