//! Processing result types.

use crate::classify::StatusColor;

/// Result of processing a single pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingResult {
    /// A status message was delivered.
    Notified {
        /// Repository name.
        repository: String,
        /// Pull request number.
        number: u64,
        /// Classified status.
        status: StatusColor,
    },

    /// The pull request is a draft and was not announced.
    SkippedDraft {
        /// Repository name.
        repository: String,
        /// Pull request number.
        number: u64,
    },
}
