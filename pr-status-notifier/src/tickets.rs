//! Ticket reference extraction.
//!
//! A pull request is linked to a tracker card when its branch name contains
//! `ch<digits>`, or its description or one of its comments contains
//! `[ch<digits>]`. Sources are checked in that order and the first match
//! wins; comments are only fetched when neither the branch nor the body
//! carries a reference.

use crate::records::{Comment, PullRequestDetail};
use regex::Regex;
use std::future::Future;
use std::sync::LazyLock;
use tracing::debug;

static BRANCH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ch(\d+)").expect("branch ticket pattern is valid"));

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[ch(\d+)\]").expect("bracketed ticket pattern is valid"));

/// A reference to a card in the external tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketLink {
    /// Numeric card identifier.
    pub id: String,

    /// Tracker base URL followed by the identifier.
    pub url: String,
}

impl TicketLink {
    fn new(tracker_url: &str, id: &str) -> Self {
        Self {
            id: id.to_string(),
            url: format!("{tracker_url}{id}"),
        }
    }
}

/// Finds the ticket a pull request refers to.
///
/// `fetch_comments` is invoked at most once, and only when neither the
/// branch name nor the description contains a reference.
///
/// # Errors
///
/// Propagates the error returned by `fetch_comments`.
pub async fn extract_ticket_link<F, Fut, E>(
    detail: &PullRequestDetail,
    tracker_url: &str,
    fetch_comments: F,
) -> Result<Option<TicketLink>, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<Comment>, E>>,
{
    if let Some(id) = capture(&BRANCH_PATTERN, &detail.branch) {
        debug!(ticket = id, "Ticket found in branch name");
        return Ok(Some(TicketLink::new(tracker_url, id)));
    }

    if let Some(id) = capture(&TAG_PATTERN, &detail.summary.body) {
        debug!(ticket = id, "Ticket found in description");
        return Ok(Some(TicketLink::new(tracker_url, id)));
    }

    let comments = fetch_comments().await?;
    let link = comments
        .iter()
        .find_map(|comment| capture(&TAG_PATTERN, &comment.body))
        .map(|id| TicketLink::new(tracker_url, id));

    if let Some(link) = &link {
        debug!(ticket = %link.id, "Ticket found in comments");
    }
    Ok(link)
}

fn capture<'a>(pattern: &Regex, haystack: &'a str) -> Option<&'a str> {
    pattern
        .captures(haystack)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::PullRequestSummary;
    use chrono::{TimeZone, Utc};
    use std::convert::Infallible;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TRACKER: &str = "https://app.clubhouse.io/acme/story/";

    fn detail(branch: &str, body: &str) -> PullRequestDetail {
        let timestamp = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        PullRequestDetail {
            summary: PullRequestSummary {
                id: 7,
                repository: "api".to_string(),
                title: "Tidy handlers".to_string(),
                author: "octocat".to_string(),
                url: "https://github.com/acme/api/pull/7".to_string(),
                comment_count: 1,
                created_at: timestamp,
                updated_at: timestamp,
                body: body.to_string(),
                summary_line: body.lines().next().unwrap_or_default().to_string(),
            },
            files_changed: 2,
            branch: branch.to_string(),
            draft: false,
        }
    }

    fn comment(body: &str) -> Comment {
        Comment {
            author: "reviewer".to_string(),
            body: body.to_string(),
        }
    }

    async fn extract_counting(
        detail: &PullRequestDetail,
        comments: Vec<Comment>,
        calls: &AtomicUsize,
    ) -> Option<TicketLink> {
        extract_ticket_link(detail, TRACKER, move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, Infallible>(comments)
        })
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn branch_name_wins_without_fetching_comments() {
        let calls = AtomicUsize::new(0);
        let link = extract_counting(&detail("feature/ch123-foo", "no tag here"), vec![], &calls)
            .await
            .unwrap();

        assert_eq!(link.id, "123");
        assert_eq!(link.url, "https://app.clubhouse.io/acme/story/123");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn branch_takes_priority_over_body() {
        let calls = AtomicUsize::new(0);
        let link = extract_counting(&detail("ch1-fix", "see [ch2]"), vec![], &calls)
            .await
            .unwrap();
        assert_eq!(link.id, "1");
    }

    #[tokio::test]
    async fn bracketed_body_tag_without_fetching_comments() {
        let calls = AtomicUsize::new(0);
        let link = extract_counting(
            &detail("feature/foo", "see [ch456] for details"),
            vec![comment("[ch999]")],
            &calls,
        )
        .await
        .unwrap();

        assert_eq!(link.id, "456");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unbracketed_body_mention_is_ignored() {
        let calls = AtomicUsize::new(0);
        let link = extract_counting(&detail("feature/foo", "relates to ch456"), vec![], &calls).await;
        assert_eq!(link, None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn comments_scanned_in_order_after_one_fetch() {
        let calls = AtomicUsize::new(0);
        let link = extract_counting(
            &detail("feature/foo", "nothing"),
            vec![comment("lgtm"), comment("fixed in [ch789]"), comment("[ch790]")],
            &calls,
        )
        .await
        .unwrap();

        assert_eq!(link.id, "789");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn no_reference_anywhere() {
        let calls = AtomicUsize::new(0);
        let link = extract_counting(&detail("feature/foo", ""), vec![comment("nice")], &calls).await;
        assert_eq!(link, None);
    }

    #[tokio::test]
    async fn comment_fetch_errors_propagate() {
        let result = extract_ticket_link(&detail("feature/foo", ""), TRACKER, || async {
            Err::<Vec<Comment>, _>("offline")
        })
        .await;
        assert_eq!(result, Err("offline"));
    }
}
