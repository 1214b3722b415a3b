//! CLI for the Pull Request Status Notifier.
//!
//! Scans an organization's open pull requests and posts a status summary of
//! each to a chat channel, once or on a cron schedule.

use clap::Parser;
use pr_status_notifier::{
    load_config, run_on_schedule, DryRunSink, GitHubProvider, NotificationSink, NotifierConfig,
    RunSummary, Runner, RunnerConfig, RunnerError, Settings, WebhookSink,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Pull Request Status Notifier - Post open pull request status summaries to a chat channel.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file. Command-line values override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Organization whose pull requests are scanned.
    #[arg(long, env = "GITHUB_ORGANIZATION")]
    organization: Option<String>,

    /// Chat channel messages are addressed to.
    #[arg(long, env = "CHAT_CHANNEL")]
    channel: Option<String>,

    /// Incoming webhook URL messages are posted to.
    #[arg(long, env = "CHAT_WEBHOOK_URL", hide_env_values = true)]
    webhook_url: Option<String>,

    /// Tracker base URL; ticket ids are appended to it.
    #[arg(long, env = "TRACKER_URL")]
    tracker_url: Option<String>,

    /// Cron expression (UTC) for recurring runs. Runs once when absent.
    #[arg(long, env = "SCHEDULE")]
    schedule: Option<String>,

    /// GitHub API base URL, for GitHub Enterprise.
    #[arg(long, env = "GITHUB_API_URL")]
    github_api_url: Option<String>,

    /// Print messages instead of posting them.
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    fn overrides(&self) -> NotifierConfig {
        NotifierConfig {
            organization: self.organization.clone(),
            channel: self.channel.clone(),
            webhook_url: self.webhook_url.clone(),
            tracker_url: self.tracker_url.clone(),
            schedule: self.schedule.clone(),
            github_api_url: self.github_api_url.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // octocrab and reqwest may pull in different rustls backends; pick one.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Log level defaults to "info" and can be changed through `RUST_LOG`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<(), RunnerError> {
    let file_config = match &args.config {
        Some(path) => load_config(path)?,
        None => NotifierConfig::default(),
    };
    let settings = file_config.merge(args.overrides()).validate()?;

    let provider = GitHubProvider::new(
        args.token,
        settings.organization.clone(),
        settings.github_api_url.as_ref().map(|url| url.as_str()),
    )?;
    let config = RunnerConfig::new(
        settings.channel.clone(),
        settings.tracker_url.clone(),
        args.dry_run,
    );

    if args.dry_run {
        execute(Runner::new(config, provider, DryRunSink), &settings).await
    } else {
        let sink = WebhookSink::new(settings.webhook_url.clone())?;
        execute(Runner::new(config, provider, sink), &settings).await
    }
}

/// Runs once, or forever on the configured schedule.
async fn execute<S>(runner: Runner<GitHubProvider, S>, settings: &Settings) -> Result<(), RunnerError>
where
    S: NotificationSink + Sync,
{
    info!(organization = %settings.organization, channel = %settings.channel, "Starting");

    match &settings.schedule {
        Some(schedule) => {
            run_on_schedule(&runner, schedule, print_summary).await;
            Ok(())
        }
        None => {
            let summary = runner.run_once().await?;
            print_summary(&summary);
            Ok(())
        }
    }
}

/// Prints the summary of one run.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Pull requests listed: {}", summary.pull_requests_listed);
    println!("  Drafts skipped: {}", summary.drafts_skipped);
    println!("  Notifications sent: {}", summary.notifications_sent);
    println!("    Approved: {}", summary.approved);
    println!("    Past deadline: {}", summary.past_deadline);
    println!("    Invalid: {}", summary.invalid);
}
