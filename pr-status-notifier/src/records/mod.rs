//! Pipeline records and the parsers that build them from provider payloads.
//!
//! Every record is constructed once from a raw payload (or from a previous
//! record) and never mutated afterwards.

mod error;
pub mod payload;
mod pull_request;
mod review;
mod user;

pub use error::ParseError;
pub use pull_request::{parse_detail, parse_summary, PullRequestDetail, PullRequestSummary};
pub use review::{parse_comment, parse_review, Comment, Review};
pub use user::{parse_user, UserProfile};
