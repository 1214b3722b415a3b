//! Orchestrates a full scan of open pull requests.
//!
//! A run lists open pull requests and handles them one at a time: resolve
//! the author, fetch the detail, skip drafts, then classify, format and
//! send. Any failure aborts the remaining pull requests of the run.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::classify::classify;
use crate::enrichment::EnrichmentFetcher;
use crate::notification::{format_message, NotificationSink};
use crate::provider::PullRequestProvider;
use crate::records::PullRequestSummary;
use crate::summary::{ProcessingResult, RunSummary};
use crate::tickets::extract_ticket_link;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, info_span, Instrument};

/// Marks the runner as busy until dropped.
struct RunGuard<'a>(&'a AtomicBool);

impl<'a> RunGuard<'a> {
    fn acquire(running: &'a AtomicBool) -> Result<Self, RunnerError> {
        running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| RunnerError::AlreadyRunning)?;
        Ok(Self(running))
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Scans open pull requests and posts one status message per pull request.
pub struct Runner<P, S> {
    config: RunnerConfig,
    fetcher: EnrichmentFetcher<P>,
    sink: S,
    running: AtomicBool,
}

impl<P, S> Runner<P, S>
where
    P: PullRequestProvider + Sync,
    S: NotificationSink + Sync,
{
    /// Builds a runner from its collaborators.
    pub fn new(config: RunnerConfig, provider: P, sink: S) -> Self {
        Self {
            config,
            fetcher: EnrichmentFetcher::new(provider),
            sink,
            running: AtomicBool::new(false),
        }
    }

    /// Returns the enrichment fetcher, including its profile cache.
    pub fn fetcher(&self) -> &EnrichmentFetcher<P> {
        &self.fetcher
    }

    /// Returns the notification sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns true while a run is in progress.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Executes one run against the current time.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::AlreadyRunning`] if a run is in progress, or the
    /// first error raised while processing a pull request.
    pub async fn run_once(&self) -> Result<RunSummary, RunnerError> {
        self.run_once_at(Utc::now()).await
    }

    /// Executes one run, judging staleness against `now`.
    ///
    /// # Errors
    ///
    /// See [`Runner::run_once`].
    pub async fn run_once_at(&self, now: DateTime<Utc>) -> Result<RunSummary, RunnerError> {
        let _guard = RunGuard::acquire(&self.running)?;
        let mut summary = RunSummary::new(self.config.dry_run());

        info!("Listing open pull requests");
        let pull_requests = self
            .fetcher
            .list_open()
            .instrument(info_span!("list_open"))
            .await?;

        info!(count = pull_requests.len(), "Found open pull requests");
        summary.pull_requests_listed = pull_requests.len();

        for pull_request in &pull_requests {
            let span = info_span!(
                "pull_request",
                repo = %pull_request.repository,
                number = pull_request.id
            );
            let result = self
                .process_pull_request(pull_request, now)
                .instrument(span)
                .await?;
            summary.record_result(&result);
        }

        Ok(summary)
    }

    async fn process_pull_request(
        &self,
        pull_request: &PullRequestSummary,
        now: DateTime<Utc>,
    ) -> Result<ProcessingResult, RunnerError> {
        let author = self.fetcher.get_or_fetch_user(&pull_request.author).await?;
        let detail = self.fetcher.fetch_detail(pull_request).await?;

        if detail.draft {
            info!("Skipping draft pull request");
            return Ok(ProcessingResult::SkippedDraft {
                repository: pull_request.repository.clone(),
                number: pull_request.id,
            });
        }

        let approver = match self.fetcher.fetch_approved_review(&detail).await? {
            Some(review) => Some(self.fetcher.get_or_fetch_user(&review.reviewer).await?),
            None => None,
        };

        let fetcher = &self.fetcher;
        let detail_ref = &detail;
        let ticket = extract_ticket_link(&detail, self.config.tracker_url(), move || {
            fetcher.fetch_comments(detail_ref)
        })
        .await?;

        let classification = classify(&detail, approver.as_ref(), ticket.as_ref(), now);
        debug!(
            status = classification.color.as_str(),
            warnings = classification.warnings.len(),
            "Classified pull request"
        );

        let message = format_message(self.config.channel(), &detail, &author, &classification);
        self.sink.send(&message).await?;
        info!(status = classification.color.as_str(), "Notification sent");

        Ok(ProcessingResult::Notified {
            repository: pull_request.repository.clone(),
            number: pull_request.id,
            status: classification.color,
        })
    }
}
