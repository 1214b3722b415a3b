//! Pull request classification.
//!
//! [`classify`] is a pure function of the enriched record, the approving
//! reviewer, the ticket link and the current time.

mod rules;
mod status;

pub use status::StatusColor;

use crate::records::{PullRequestDetail, UserProfile};
use crate::tickets::TicketLink;
use chrono::{DateTime, Duration, Utc};
use rules::{RuleInput, RULES};

/// Days without an update after which a pull request is stale.
pub const STALE_AFTER_DAYS: i64 = 2;

/// Warning and info lines plus the resulting status color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    pub color: StatusColor,
}

impl Classification {
    /// Composes the message body: warnings, then the summary line, then
    /// info lines, skipping blank lines.
    #[must_use]
    pub fn compose_text(&self, summary_line: &str) -> String {
        self.warnings
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(summary_line))
            .chain(self.infos.iter().map(String::as_str))
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Classifies an enriched pull request.
///
/// `approver` is the profile of the approving reviewer, if any.
#[must_use]
pub fn classify(
    detail: &PullRequestDetail,
    approver: Option<&UserProfile>,
    ticket: Option<&TicketLink>,
    now: DateTime<Utc>,
) -> Classification {
    let input = RuleInput {
        detail,
        approver,
        ticket,
        deadline: now - Duration::days(STALE_AFTER_DAYS),
    };

    let mut classification = Classification::default();
    for rule in RULES {
        rule(&input, &mut classification);
    }
    classification
}
