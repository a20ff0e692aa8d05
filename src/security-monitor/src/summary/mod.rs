//! Run summary types and helpers.

mod report;
mod run_summary;

pub use report::RepositoryReport;
pub use run_summary::RunSummary;
