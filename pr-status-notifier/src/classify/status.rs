//! Status colors.

/// Overall status of a pull request, rendered as the attachment color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusColor {
    /// Nothing noteworthy.
    #[default]
    Open,

    /// No update within the staleness window.
    PastDeadline,

    /// Missing description or ticket link.
    Invalid,

    /// Approved by a reviewer.
    Approved,
}

impl StatusColor {
    /// Returns the chat attachment color.
    #[must_use]
    pub fn as_color(&self) -> &'static str {
        match self {
            Self::Open => "#439FE0",
            Self::PastDeadline => "warning",
            Self::Invalid => "danger",
            Self::Approved => "good",
        }
    }

    /// Returns the status as a string for logging.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::PastDeadline => "past_deadline",
            Self::Invalid => "invalid",
            Self::Approved => "approved",
        }
    }
}
