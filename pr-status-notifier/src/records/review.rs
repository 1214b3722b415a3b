//! Review and comment records.

use super::payload::{RawComment, RawReview, APPROVED_REVIEW_STATE, GHOST_LOGIN};

/// A review submitted on a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Login of the reviewer.
    pub reviewer: String,

    /// Provider review state (e.g. `APPROVED`).
    pub state: String,
}

impl Review {
    /// Returns true if this review approves the pull request.
    #[must_use]
    pub fn is_approval(&self) -> bool {
        self.state == APPROVED_REVIEW_STATE
    }
}

/// A conversation comment; only scanned for ticket references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub author: String,
    pub body: String,
}

#[must_use]
pub fn parse_review(raw: RawReview) -> Review {
    Review {
        reviewer: raw.user.map_or_else(|| GHOST_LOGIN.to_string(), |user| user.login),
        state: raw.state,
    }
}

#[must_use]
pub fn parse_comment(raw: RawComment) -> Comment {
    Comment {
        author: raw.user.map_or_else(|| GHOST_LOGIN.to_string(), |user| user.login),
        body: raw.body.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn approval_is_detected_by_state() {
        let raw: RawReview =
            serde_json::from_value(json!({ "user": { "login": "reviewer" }, "state": "APPROVED" }))
                .unwrap();
        let review = parse_review(raw);
        assert_eq!(review.reviewer, "reviewer");
        assert!(review.is_approval());

        let raw: RawReview = serde_json::from_value(
            json!({ "user": { "login": "reviewer" }, "state": "CHANGES_REQUESTED" }),
        )
        .unwrap();
        assert!(!parse_review(raw).is_approval());
    }

    #[test]
    fn deleted_accounts_become_ghost() {
        let raw: RawComment =
            serde_json::from_value(json!({ "user": null, "body": "see [ch9]" })).unwrap();
        let comment = parse_comment(raw);
        assert_eq!(comment.author, "ghost");
        assert_eq!(comment.body, "see [ch9]");
    }
}
