//! Working directories created at startup.
//!
//! The cache and checksum directories are created before any check runs.
//! No check reads from or writes to them.

use crate::repositories::ConfigError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default root for the state directories.
pub const DEFAULT_CACHE_DIR: &str = ".cache";

/// Paths of the cache and checksum directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateDirectories {
    cache: PathBuf,
    checksums: PathBuf,
}

impl StateDirectories {
    /// Derives `<root>` and `<root>/checksums`.
    pub fn new(root: &Path) -> Self {
        Self {
            cache: root.to_path_buf(),
            checksums: root.join("checksums"),
        }
    }

    /// Returns the cache directory.
    pub fn cache(&self) -> &Path {
        &self.cache
    }

    /// Returns the checksum directory.
    pub fn checksums(&self) -> &Path {
        &self.checksums
    }

    /// Creates both directories if they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IoError`] if a directory cannot be created.
    pub fn ensure_exist(&self) -> Result<(), ConfigError> {
        for dir in [&self.cache, &self.checksums] {
            std::fs::create_dir_all(dir).map_err(|e| ConfigError::IoError {
                path: dir.display().to_string(),
                source: e,
            })?;
            debug!(path = %dir.display(), "Ensured directory exists");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_nested_directories() {
        let temp = TempDir::new().unwrap();
        let dirs = StateDirectories::new(&temp.path().join("state"));

        dirs.ensure_exist().unwrap();

        assert!(dirs.cache().is_dir());
        assert!(dirs.checksums().is_dir());
        assert_eq!(dirs.checksums(), temp.path().join("state/checksums"));
    }

    #[test]
    fn ensure_exist_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dirs = StateDirectories::new(temp.path());

        dirs.ensure_exist().unwrap();
        dirs.ensure_exist().unwrap();

        assert!(dirs.checksums().is_dir());
    }

    #[test]
    fn fails_when_root_is_a_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("occupied");
        std::fs::write(&file, "").unwrap();

        let result = StateDirectories::new(&file).ensure_exist();
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }
}
