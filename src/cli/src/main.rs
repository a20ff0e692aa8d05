//! CLI for the OpenJS Security Monitor.
//!
//! Checks a list of GitHub repositories for a security policy, Dependabot,
//! CodeQL code scanning, security advisories and a SECURITY.md file.

use clap::Parser;
use openjs_security_monitor::{
    default_repositories, load_repositories, AdvisoryOutcome, CheckKind, CheckOutcome,
    CheckRegistry, RepositoryReport, RunSummary, Runner, RunnerConfig, RunnerError,
    DEFAULT_BASE_URL, DEFAULT_CACHE_DIR, DEFAULT_USER_AGENT,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// OpenJS Security Monitor - Report which security practices GitHub repositories have adopted.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file listing the repositories to check. Defaults to the built-in list.
    #[arg(long)]
    repositories: Option<PathBuf>,

    /// Only run the given check (repeatable): security-policy, dependabot,
    /// code-scanning, security-advisories, security-md.
    #[arg(long = "check", value_name = "ID")]
    checks: Vec<CheckKind>,

    /// GitHub REST API base URL.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// User agent sent with every request.
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Root of the cache and checksum directories.
    #[arg(long, default_value = DEFAULT_CACHE_DIR)]
    cache_dir: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    // Check outcomes never affect the exit code; only startup failures do.
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Log level is read from `RUST_LOG` and defaults to "info".
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let repositories = match &args.repositories {
        Some(path) => load_repositories(path)?,
        None => default_repositories(),
    };

    let config = RunnerConfig::new(repositories)
        .with_registry(CheckRegistry::only(&args.checks))
        .with_base_url(args.base_url)
        .with_user_agent(args.user_agent)
        .with_cache_dir(args.cache_dir);

    let runner = Runner::new(config)?;
    runner.run().await
}

/// Prints per-repository outcomes and the final counts.
fn print_summary(summary: &RunSummary) {
    for report in &summary.reports {
        let repository = report.repository();
        println!("\n{} ({})", repository.name, repository.full_name());

        match report {
            RepositoryReport::Skipped { reason, .. } => {
                println!("  ❌ skipped: {reason}");
            }
            RepositoryReport::Checked { results, .. } => {
                for result in results {
                    let detail = match (&result.outcome, result.outcome.advisory_count()) {
                        (_, Some(count)) => format!("{count} advisories"),
                        (CheckOutcome::Advisories(AdvisoryOutcome::Error { error }), None) => {
                            error.clone()
                        }
                        (outcome, None) => outcome.is_present().to_string(),
                    };
                    println!(
                        "  {} {:<24} {}",
                        result.status.icon(),
                        result.kind.label(),
                        detail
                    );
                }
            }
        }
    }

    println!("\nSummary:");
    println!(
        "  Repositories processed: {}",
        summary.repositories_processed
    );
    println!("  Repositories skipped: {}", summary.repositories_skipped);
    println!("  Checks run: {}", summary.checks_run);
    println!("  Present: {}", summary.present);
    println!("  Absent: {}", summary.absent);
    println!("  Indeterminate: {}", summary.indeterminate);

    if summary.has_indeterminate() {
        println!("\n  ❌ Some checks could not be determined; see the warnings above.");
    }
}

