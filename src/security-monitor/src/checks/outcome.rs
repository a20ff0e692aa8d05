//! Check outcome types.

use super::CheckKind;
use serde::Serialize;

/// Tri-state result of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticeStatus {
    /// The API answered 200.
    Present,
    /// The API answered 404.
    Absent,
    /// Unexpected status, transport failure or unparsable body.
    Indeterminate,
}

impl PracticeStatus {
    /// Icon used in human-readable output.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Present => "✅",
            Self::Absent => "⚠️",
            Self::Indeterminate => "❌",
        }
    }
}

/// Value returned by a check.
///
/// Serializes untagged: flag checks as `true`/`false`, the advisories check
/// as `{"count": .., "advisories": [..]}` or `{"error": ".."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CheckOutcome {
    /// Presence of a practice; indeterminate collapses to `false`.
    Flag(bool),
    /// Security advisories lookup.
    Advisories(AdvisoryOutcome),
}

/// Outcome of the security advisories check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AdvisoryOutcome {
    /// Advisories were fetched and parsed.
    Retrieved {
        /// Number of advisories.
        count: usize,
        /// Advisories exactly as returned by the API.
        advisories: Vec<serde_json::Value>,
    },

    /// Not found, unexpected status, transport or parse failure.
    Error {
        /// Error message.
        error: String,
    },
}

impl CheckOutcome {
    /// Returns true if the practice was found.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Self::Flag(present) => *present,
            Self::Advisories(AdvisoryOutcome::Retrieved { .. }) => true,
            Self::Advisories(AdvisoryOutcome::Error { .. }) => false,
        }
    }

    /// Number of advisories, if retrieved.
    #[must_use]
    pub fn advisory_count(&self) -> Option<usize> {
        match self {
            Self::Advisories(AdvisoryOutcome::Retrieved { count, .. }) => Some(*count),
            _ => None,
        }
    }
}

/// Result of running one check against one repository.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    /// Which check ran.
    pub kind: CheckKind,

    /// Tri-state classification.
    pub status: PracticeStatus,

    /// Value returned to callers.
    pub outcome: CheckOutcome,
}

impl CheckResult {
    /// Returns true if the practice was found.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.outcome.is_present()
    }
}
