//! Check error types.

use thiserror::Error;

/// A check identifier that does not name any known check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown check '{0}' (expected one of: security-policy, dependabot, code-scanning, security-advisories, security-md)")]
pub struct UnknownCheckError(pub String);
