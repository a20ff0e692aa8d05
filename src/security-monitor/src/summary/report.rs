//! Per-repository report types.

use crate::checks::CheckResult;
use crate::repositories::RepositoryDescriptor;

/// Result of processing a single repository.
#[derive(Debug, Clone)]
pub enum RepositoryReport {
    /// Every registered check ran.
    Checked {
        /// Repository that was checked.
        repository: RepositoryDescriptor,
        /// Check results in registry order.
        results: Vec<CheckResult>,
    },

    /// The repository was skipped before any probe was issued.
    Skipped {
        /// Repository that was skipped.
        repository: RepositoryDescriptor,
        /// Reason for skipping.
        reason: String,
    },
}

impl RepositoryReport {
    /// Returns the repository this report is about.
    #[must_use]
    pub fn repository(&self) -> &RepositoryDescriptor {
        match self {
            Self::Checked { repository, .. } | Self::Skipped { repository, .. } => repository,
        }
    }

    /// Returns the check results; empty when skipped.
    #[must_use]
    pub fn results(&self) -> &[CheckResult] {
        match self {
            Self::Checked { results, .. } => results,
            Self::Skipped { .. } => &[],
        }
    }
}
