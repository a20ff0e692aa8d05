//! The check protocol.
//!
//! A check issues one probe for a repository, classifies the response and
//! logs the result. Checks never fail: every failure path resolves to a
//! negative outcome.
//!
//! | Response                  | Status          | Flag    | Advisories                 |
//! |---------------------------|-----------------|---------|----------------------------|
//! | 200                       | `Present`       | `true`  | `{count, advisories}`      |
//! | 404                       | `Absent`        | `false` | `{error: "Not found: 404"}`|
//! | other status              | `Indeterminate` | `false` | `{error: "Status code: N"}`|
//! | transport / parse failure | `Indeterminate` | `false` | `{error: message}`         |

mod error;
mod kind;
mod outcome;
mod registry;

pub use error::UnknownCheckError;
pub use kind::CheckKind;
pub use outcome::{AdvisoryOutcome, CheckOutcome, CheckResult, PracticeStatus};
pub use registry::CheckRegistry;

use crate::client::{ProbeResponse, Transport, TransportError};
use crate::repositories::RepositoryDescriptor;
use tracing::{debug, error, info, warn};

/// Runs a single check against a repository.
///
/// Issues exactly one request through `transport` and never retries.
pub async fn run_check<T: Transport>(
    transport: &T,
    kind: CheckKind,
    repository: &RepositoryDescriptor,
) -> CheckResult {
    let request = kind.request(repository);
    debug!(
        check = %kind,
        method = %request.method,
        path = %request.path,
        "🔍 Checking {} for {}",
        kind.label(),
        repository.name
    );

    let response = transport.send(&request).await;
    classify(kind, repository, response)
}

/// Maps a probe response onto a check result, logging it.
fn classify(
    kind: CheckKind,
    repository: &RepositoryDescriptor,
    response: Result<ProbeResponse, TransportError>,
) -> CheckResult {
    let name = &repository.name;

    let (status, outcome) = match response {
        Ok(response) if response.status == 200 => match kind {
            CheckKind::SecurityAdvisories => parse_advisories(name, &response.body),
            _ => {
                info!(check = %kind, "✅ {name} {}", kind.present_phrase());
                (PracticeStatus::Present, CheckOutcome::Flag(true))
            }
        },
        Ok(response) if response.status == 404 => {
            warn!(check = %kind, status = 404, "⚠️ {name} {}", kind.absent_phrase());
            (
                PracticeStatus::Absent,
                negative(kind, "Not found: 404".to_string()),
            )
        }
        Ok(response) => {
            warn!(
                check = %kind,
                status = response.status,
                "⚠️ Error: {} when checking {} for {name}",
                response.status,
                kind.label()
            );
            (
                PracticeStatus::Indeterminate,
                negative(kind, format!("Status code: {}", response.status)),
            )
        }
        Err(e) => {
            warn!(
                check = %kind,
                error = %e,
                "⚠️ Could not determine {} for {name}",
                kind.label()
            );
            (PracticeStatus::Indeterminate, negative(kind, e.to_string()))
        }
    };

    CheckResult {
        kind,
        status,
        outcome,
    }
}

/// The negative outcome for a check, carrying `error` where the shape allows.
fn negative(kind: CheckKind, error: String) -> CheckOutcome {
    match kind {
        CheckKind::SecurityAdvisories => {
            CheckOutcome::Advisories(AdvisoryOutcome::Error { error })
        }
        _ => CheckOutcome::Flag(false),
    }
}

/// Parses a 200 advisories body, which must be a JSON array.
fn parse_advisories(name: &str, body: &str) -> (PracticeStatus, CheckOutcome) {
    match serde_json::from_str::<Vec<serde_json::Value>>(body) {
        Ok(advisories) => {
            info!(
                check = %CheckKind::SecurityAdvisories,
                count = advisories.len(),
                "✅ Retrieved {} security advisories for {name}",
                advisories.len()
            );
            (
                PracticeStatus::Present,
                CheckOutcome::Advisories(AdvisoryOutcome::Retrieved {
                    count: advisories.len(),
                    advisories,
                }),
            )
        }
        Err(e) => {
            error!(
                check = %CheckKind::SecurityAdvisories,
                error = %e,
                "❌ Error parsing security advisories for {name}"
            );
            (
                PracticeStatus::Indeterminate,
                CheckOutcome::Advisories(AdvisoryOutcome::Error {
                    error: e.to_string(),
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{transport_failure, FakeTransport};
    use serde_json::json;

    const ADVISORIES: &str = "/repos/expressjs/express/security-advisories";

    fn express() -> RepositoryDescriptor {
        RepositoryDescriptor::new("Express", "expressjs", "express", "master")
    }

    fn path(kind: CheckKind) -> String {
        kind.request(&express()).path
    }

    #[tokio::test]
    async fn ok_status_is_present() {
        let mut transport = FakeTransport::new();
        for kind in CheckKind::ALL {
            transport = transport.with_body(&path(kind), 200, "[]");
        }

        for kind in CheckKind::ALL {
            let result = run_check(&transport, kind, &express()).await;
            assert_eq!(result.status, PracticeStatus::Present, "{kind}");
            assert!(result.is_present(), "{kind}");
        }
    }

    #[tokio::test]
    async fn not_found_is_absent() {
        let transport = FakeTransport::new();

        for kind in [
            CheckKind::SecurityPolicy,
            CheckKind::Dependabot,
            CheckKind::CodeScanning,
            CheckKind::SecurityMd,
        ] {
            let result = run_check(&transport, kind, &express()).await;
            assert_eq!(result.status, PracticeStatus::Absent);
            assert_eq!(result.outcome, CheckOutcome::Flag(false));
        }

        let result = run_check(&transport, CheckKind::SecurityAdvisories, &express()).await;
        assert_eq!(result.status, PracticeStatus::Absent);
        assert_eq!(
            result.outcome,
            CheckOutcome::Advisories(AdvisoryOutcome::Error {
                error: "Not found: 404".to_string()
            })
        );
    }

    #[tokio::test]
    async fn unexpected_status_is_negative() {
        let transport = FakeTransport::new()
            .with_status(&path(CheckKind::Dependabot), 500)
            .with_status(ADVISORIES, 403);

        let dependabot = run_check(&transport, CheckKind::Dependabot, &express()).await;
        assert_eq!(dependabot.status, PracticeStatus::Indeterminate);
        assert_eq!(dependabot.outcome, CheckOutcome::Flag(false));

        let advisories = run_check(&transport, CheckKind::SecurityAdvisories, &express()).await;
        assert_eq!(
            advisories.outcome,
            CheckOutcome::Advisories(AdvisoryOutcome::Error {
                error: "Status code: 403".to_string()
            })
        );
    }

    #[tokio::test]
    async fn transport_failure_resolves_to_negative() {
        let mut transport = FakeTransport::new();
        for kind in CheckKind::ALL {
            transport = transport.unreachable(&path(kind));
        }

        for kind in CheckKind::ALL {
            let result = run_check(&transport, kind, &express()).await;
            assert_eq!(result.status, PracticeStatus::Indeterminate);
            assert!(!result.is_present());
        }

        let advisories = run_check(&transport, CheckKind::SecurityAdvisories, &express()).await;
        assert_eq!(
            advisories.outcome,
            CheckOutcome::Advisories(AdvisoryOutcome::Error {
                error: transport_failure().to_string()
            })
        );
    }

    #[tokio::test]
    async fn counts_advisories() {
        let transport = FakeTransport::new().with_body(ADVISORIES, 200, r#"[{"id":1},{"id":2}]"#);

        let result = run_check(&transport, CheckKind::SecurityAdvisories, &express()).await;

        assert_eq!(
            result.outcome,
            CheckOutcome::Advisories(AdvisoryOutcome::Retrieved {
                count: 2,
                advisories: vec![json!({"id": 1}), json!({"id": 2})],
            })
        );
    }

    #[tokio::test]
    async fn unparsable_advisories_body_is_an_error() {
        for body in ["not json", r#"{"message":"Moved"}"#] {
            let transport = FakeTransport::new().with_body(ADVISORIES, 200, body);

            let result = run_check(&transport, CheckKind::SecurityAdvisories, &express()).await;

            assert_eq!(result.status, PracticeStatus::Indeterminate);
            assert!(matches!(
                result.outcome,
                CheckOutcome::Advisories(AdvisoryOutcome::Error { .. })
            ));
        }
    }

    #[tokio::test]
    async fn issues_exactly_one_request() {
        let transport = FakeTransport::new().with_status(&path(CheckKind::CodeScanning), 502);

        run_check(&transport, CheckKind::CodeScanning, &express()).await;

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], CheckKind::CodeScanning.request(&express()));
    }

    #[tokio::test]
    async fn repeated_checks_are_identical() {
        let transport = FakeTransport::new()
            .with_status(&path(CheckKind::Dependabot), 200)
            .with_body(ADVISORIES, 200, r#"[{"id":7}]"#);

        for kind in CheckKind::ALL {
            let first = run_check(&transport, kind, &express()).await;
            let second = run_check(&transport, kind, &express()).await;
            assert_eq!(first, second);
        }
    }
}
