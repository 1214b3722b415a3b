//! Channel message payload and formatting.

use crate::classify::Classification;
use crate::records::{PullRequestDetail, UserProfile};
use serde::Serialize;

/// A message for one channel carrying a single attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelMessage {
    pub channel: String,
    pub attachments: Vec<Attachment>,
}

/// Chat attachment describing one pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// Last update, seconds since the epoch.
    pub ts: i64,
    pub fallback: String,
    pub color: String,
    pub author_name: String,
    pub author_link: String,
    pub author_icon: String,
    pub title: String,
    pub title_link: String,
    pub text: String,
    pub footer: String,
    pub mrkdwn_in: Vec<&'static str>,
}

/// Renders a classified pull request into a channel message.
#[must_use]
pub fn format_message(
    channel: &str,
    detail: &PullRequestDetail,
    author: &UserProfile,
    classification: &Classification,
) -> ChannelMessage {
    let summary = &detail.summary;
    let attachment = Attachment {
        ts: summary.updated_at.timestamp(),
        fallback: summary.title.clone(),
        color: classification.color.as_color().to_string(),
        author_name: author.name.clone(),
        author_link: author.profile_url.clone(),
        author_icon: author.avatar_url.clone(),
        title: summary.title.clone(),
        title_link: summary.url.clone(),
        text: classification.compose_text(&summary.summary_line),
        footer: format_footer(summary.comment_count, detail.files_changed),
        mrkdwn_in: vec!["text"],
    };

    ChannelMessage {
        channel: channel.to_string(),
        attachments: vec![attachment],
    }
}

/// Formats the footer, e.g. `"1 comment. 2 files changed."`.
#[must_use]
pub fn format_footer(comments: u64, files_changed: u64) -> String {
    format!(
        "{comments} {}. {files_changed} {} changed.",
        pluralize(comments, "comment", "comments"),
        pluralize(files_changed, "file", "files"),
    )
}

fn pluralize<'a>(count: u64, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}
