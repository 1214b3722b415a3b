//! Pull request summary and detail records.

use super::error::ParseError;
use super::payload::{RawIssue, RawPullRequest, DRAFT_MERGEABLE_STATE};
use chrono::{DateTime, Utc};

/// Path segment of the HTML URL holding the repository name
/// (`https:` / `` / host / owner / repository / ...).
const REPOSITORY_SEGMENT: usize = 4;

/// An open pull request as listed by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSummary {
    /// Pull request number within its repository.
    pub id: u64,

    /// Repository name, without the owner.
    pub repository: String,

    /// Pull request title.
    pub title: String,

    /// Login of the author.
    pub author: String,

    /// HTML URL of the pull request.
    pub url: String,

    /// Number of conversation comments.
    pub comment_count: u64,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Description, empty when the provider returned none.
    pub body: String,

    /// First line of the trimmed description, or empty.
    pub summary_line: String,
}

/// A pull request merged with its extended detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestDetail {
    /// The listing record this detail was fetched for.
    pub summary: PullRequestSummary,

    /// Number of files changed.
    pub files_changed: u64,

    /// Source branch name.
    pub branch: String,

    /// Whether the pull request is a draft.
    pub draft: bool,
}

/// Normalizes a search result into a [`PullRequestSummary`].
///
/// # Errors
///
/// Returns [`ParseError::MissingRepository`] if the HTML URL has no
/// repository segment.
pub fn parse_summary(raw: RawIssue) -> Result<PullRequestSummary, ParseError> {
    let repository = repository_from_url(&raw.html_url)?;
    let body = raw.body.unwrap_or_default();
    let summary_line = summary_line(&body);

    Ok(PullRequestSummary {
        id: raw.number,
        repository,
        title: raw.title,
        author: raw.user.login,
        url: raw.html_url,
        comment_count: raw.comments,
        created_at: raw.created_at,
        updated_at: raw.updated_at,
        body,
        summary_line,
    })
}

/// Merges extended provider fields into the listing record.
#[must_use]
pub fn parse_detail(summary: PullRequestSummary, raw: RawPullRequest) -> PullRequestDetail {
    let draft = raw.mergeable_state.as_deref() == Some(DRAFT_MERGEABLE_STATE);
    PullRequestDetail {
        summary,
        files_changed: raw.changed_files,
        branch: raw.head.ref_name,
        draft,
    }
}

fn repository_from_url(url: &str) -> Result<String, ParseError> {
    url.split('/')
        .nth(REPOSITORY_SEGMENT)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ParseError::MissingRepository {
            url: url.to_string(),
        })
}

fn summary_line(body: &str) -> String {
    body.trim()
        .lines()
        .next()
        .map(|line| line.trim().to_string())
        .unwrap_or_default()
}
