//! Pull request provider seam.
//!
//! The pipeline only depends on [`PullRequestProvider`]; the GitHub
//! implementation lives in [`github`].

mod error;
pub mod github;

pub use error::ProviderError;
pub use github::GitHubProvider;

use crate::records::payload::{RawComment, RawIssue, RawPullRequest, RawReview, RawUser};
use std::future::Future;

/// Remote source of pull request data for a single organization.
///
/// Implementations return raw payloads; normalization happens in
/// [`crate::records`].
pub trait PullRequestProvider {
    /// Lists every open pull request in the organization, oldest update first.
    fn search_open_pull_requests(
        &self,
    ) -> impl Future<Output = Result<Vec<RawIssue>, ProviderError>> + Send;

    /// Fetches the extended detail of one pull request.
    fn get_pull_request(
        &self,
        repository: &str,
        number: u64,
    ) -> impl Future<Output = Result<RawPullRequest, ProviderError>> + Send;

    /// Lists all reviews of a pull request in provider order.
    fn list_reviews(
        &self,
        repository: &str,
        number: u64,
    ) -> impl Future<Output = Result<Vec<RawReview>, ProviderError>> + Send;

    /// Lists all conversation comments of a pull request in creation order.
    fn list_comments(
        &self,
        repository: &str,
        number: u64,
    ) -> impl Future<Output = Result<Vec<RawComment>, ProviderError>> + Send;

    /// Fetches a user profile by login.
    fn get_user(&self, handle: &str) -> impl Future<Output = Result<RawUser, ProviderError>> + Send;
}
