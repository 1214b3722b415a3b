//! Provider error types.

use crate::records::ParseError;
use thiserror::Error;

/// Errors that can occur while talking to the pull request provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The provider returned a payload that could not be normalized.
    #[error("Malformed provider payload: {0}")]
    Parse(#[from] ParseError),
}
