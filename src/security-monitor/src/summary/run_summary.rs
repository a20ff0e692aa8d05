//! Run summary types.

use super::report::RepositoryReport;
use crate::checks::PracticeStatus;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Reports in repository order.
    pub reports: Vec<RepositoryReport>,

    /// Number of repositories whose checks ran.
    pub repositories_processed: usize,

    /// Number of repositories skipped (e.g., invalid descriptor).
    pub repositories_skipped: usize,

    /// Number of checks run.
    pub checks_run: usize,

    /// Checks that found the practice.
    pub present: usize,

    /// Checks that found the practice missing.
    pub absent: usize,

    /// Checks that could not determine the practice.
    pub indeterminate: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with a repository report.
    pub fn record_report(&mut self, report: RepositoryReport) {
        match &report {
            RepositoryReport::Checked { results, .. } => {
                self.repositories_processed += 1;
                for result in results {
                    self.checks_run += 1;
                    match result.status {
                        PracticeStatus::Present => self.present += 1,
                        PracticeStatus::Absent => self.absent += 1,
                        PracticeStatus::Indeterminate => self.indeterminate += 1,
                    }
                }
            }
            RepositoryReport::Skipped { .. } => self.repositories_skipped += 1,
        }
        self.reports.push(report);
    }

    /// Returns true if any check could not reach a verdict.
    #[must_use]
    pub fn has_indeterminate(&self) -> bool {
        self.indeterminate > 0
    }
}
