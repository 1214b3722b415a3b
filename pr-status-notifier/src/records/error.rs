//! Record parsing error types.

use thiserror::Error;

/// Errors raised while normalizing provider payloads into records.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The pull request HTML URL has no repository path segment.
    #[error("Cannot derive repository name from pull request URL '{url}'")]
    MissingRepository { url: String },
}
