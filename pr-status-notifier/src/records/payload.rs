//! Raw provider payloads.
//!
//! Field names follow the GitHub REST API. Only the fields the pipeline
//! consumes are modelled; everything else in the response is ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Mergeable state reported for pull requests marked as drafts.
pub const DRAFT_MERGEABLE_STATE: &str = "draft";

/// Review state reported for approving reviews.
pub const APPROVED_REVIEW_STATE: &str = "APPROVED";

/// Login substituted for deleted accounts.
pub const GHOST_LOGIN: &str = "ghost";

/// Account reference embedded in other payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAccount {
    pub login: String,
}

/// A pull request as returned by the issue search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIssue {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub user: RawAccount,
    #[serde(default)]
    pub comments: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Head reference of a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct RawHead {
    #[serde(rename = "ref")]
    pub ref_name: String,
}

/// Extended pull request detail from the pulls endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPullRequest {
    pub number: u64,
    #[serde(default)]
    pub changed_files: u64,
    pub head: RawHead,
    #[serde(default)]
    pub mergeable_state: Option<String>,
}

/// A pull request review.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReview {
    #[serde(default)]
    pub user: Option<RawAccount>,
    pub state: String,
}

/// An issue comment on a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct RawComment {
    #[serde(default)]
    pub user: Option<RawAccount>,
    #[serde(default)]
    pub body: Option<String>,
}

/// A user profile.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
}
