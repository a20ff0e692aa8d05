//! The security practices that can be checked.

use super::UnknownCheckError;
use crate::client::ProbeRequest;
use crate::repositories::RepositoryDescriptor;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use url::form_urlencoded;

/// Characters escaped inside a single path segment: all but RFC 3986 unreserved.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A security practice check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    /// Private vulnerability reporting via repository security advisories.
    SecurityPolicy,
    /// `.github/dependabot.yml` is present.
    Dependabot,
    /// `.github/workflows/codeql-analysis.yml` is present.
    CodeScanning,
    /// Published security advisories, counted.
    SecurityAdvisories,
    /// The descriptor's security policy file exists on its branch.
    SecurityMd,
}

impl CheckKind {
    /// Every check, in registry order.
    pub const ALL: [CheckKind; 5] = [
        Self::SecurityPolicy,
        Self::Dependabot,
        Self::CodeScanning,
        Self::SecurityAdvisories,
        Self::SecurityMd,
    ];

    /// Stable identifier used on the command line.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::SecurityPolicy => "security-policy",
            Self::Dependabot => "dependabot",
            Self::CodeScanning => "code-scanning",
            Self::SecurityAdvisories => "security-advisories",
            Self::SecurityMd => "security-md",
        }
    }

    /// Human-readable name of the practice.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SecurityPolicy => "GitHub Security Policy",
            Self::Dependabot => "Dependabot",
            Self::CodeScanning => "CodeQL Code Scanning",
            Self::SecurityAdvisories => "Security advisories",
            Self::SecurityMd => "SECURITY.md",
        }
    }

    /// Builds the single request this check issues for `repository`.
    #[must_use]
    pub fn request(self, repository: &RepositoryDescriptor) -> ProbeRequest {
        let base = format!(
            "/repos/{}/{}",
            encode_segment(&repository.owner),
            encode_segment(&repository.repo)
        );
        match self {
            Self::SecurityPolicy => ProbeRequest::get(format!("{base}/security/advisories")),
            Self::Dependabot => ProbeRequest::head(format!("{base}/contents/.github/dependabot.yml")),
            Self::CodeScanning => ProbeRequest::head(format!(
                "{base}/contents/.github/workflows/codeql-analysis.yml"
            )),
            Self::SecurityAdvisories => ProbeRequest::get(format!("{base}/security-advisories")),
            Self::SecurityMd => {
                let file_path = repository
                    .security_file_path
                    .trim_start_matches('/')
                    .split('/')
                    .map(encode_segment)
                    .collect::<Vec<_>>()
                    .join("/");
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair("ref", &repository.branch)
                    .finish();
                ProbeRequest::head(format!("{base}/contents/{file_path}?{query}"))
            }
        }
    }

    pub(crate) fn present_phrase(self) -> &'static str {
        match self {
            Self::SecurityPolicy => "has GitHub Security Policy enabled",
            Self::Dependabot => "has Dependabot configured",
            Self::CodeScanning => "has CodeQL Code Scanning configured",
            Self::SecurityAdvisories => "has security advisories",
            Self::SecurityMd => "has a security policy file",
        }
    }

    pub(crate) fn absent_phrase(self) -> &'static str {
        match self {
            Self::SecurityPolicy => "does not have GitHub Security Policy enabled",
            Self::Dependabot => "does not have Dependabot configuration",
            Self::CodeScanning => "does not have CodeQL configuration",
            Self::SecurityAdvisories => "does not have security advisories",
            Self::SecurityMd => "does not have a security policy file",
        }
    }
}

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CheckKind {
    type Err = UnknownCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == wanted)
            .ok_or_else(|| UnknownCheckError(s.to_string()))
    }
}
