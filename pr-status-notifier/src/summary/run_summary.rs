//! Run summary types.

use super::result::ProcessingResult;
use crate::classify::StatusColor;

/// Summary of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of open pull requests listed.
    pub pull_requests_listed: usize,

    /// Number of messages delivered.
    pub notifications_sent: usize,

    /// Number of drafts skipped.
    pub drafts_skipped: usize,

    /// Delivered messages with the approved status.
    pub approved: usize,

    /// Delivered messages with the past-deadline status.
    pub past_deadline: usize,

    /// Delivered messages with the invalid status.
    pub invalid: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: &ProcessingResult) {
        match result {
            ProcessingResult::Notified { status, .. } => {
                self.notifications_sent += 1;
                match status {
                    StatusColor::Approved => self.approved += 1,
                    StatusColor::PastDeadline => self.past_deadline += 1,
                    StatusColor::Invalid => self.invalid += 1,
                    StatusColor::Open => {}
                }
            }
            ProcessingResult::SkippedDraft { .. } => self.drafts_skipped += 1,
        }
    }
}
