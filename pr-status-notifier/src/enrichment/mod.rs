//! Retrieval of everything needed to classify a pull request.
//!
//! The fetcher wraps a [`PullRequestProvider`], normalizes its payloads
//! into records and memoizes user profiles for the lifetime of the fetcher.

mod cache;

pub use cache::ProfileCache;

use crate::provider::{ProviderError, PullRequestProvider};
use crate::records::{
    parse_comment, parse_detail, parse_review, parse_summary, parse_user, Comment,
    PullRequestDetail, PullRequestSummary, Review, UserProfile,
};
use tracing::debug;

/// Fetches and normalizes pull request data from a provider.
#[derive(Debug)]
pub struct EnrichmentFetcher<P> {
    provider: P,
    profiles: ProfileCache,
}

impl<P: PullRequestProvider> EnrichmentFetcher<P> {
    /// Creates a fetcher with an empty profile cache.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            profiles: ProfileCache::new(),
        }
    }

    /// Returns the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns the profile cache.
    pub fn profiles(&self) -> &ProfileCache {
        &self.profiles
    }

    /// Lists open pull requests, sorted by last update (oldest first).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the search fails or a result is malformed.
    pub async fn list_open(&self) -> Result<Vec<PullRequestSummary>, ProviderError> {
        let mut summaries = self
            .provider
            .search_open_pull_requests()
            .await?
            .into_iter()
            .map(parse_summary)
            .collect::<Result<Vec<_>, _>>()?;

        summaries.sort_by_key(|summary| summary.updated_at);
        Ok(summaries)
    }

    /// Fetches the extended detail of a pull request and merges it with `summary`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the remote call fails.
    pub async fn fetch_detail(
        &self,
        summary: &PullRequestSummary,
    ) -> Result<PullRequestDetail, ProviderError> {
        let raw = self
            .provider
            .get_pull_request(&summary.repository, summary.id)
            .await?;
        Ok(parse_detail(summary.clone(), raw))
    }

    /// Returns the first approving review in provider order, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the remote call fails.
    pub async fn fetch_approved_review(
        &self,
        detail: &PullRequestDetail,
    ) -> Result<Option<Review>, ProviderError> {
        let reviews = self
            .provider
            .list_reviews(&detail.summary.repository, detail.summary.id)
            .await?;

        debug!(count = reviews.len(), "Fetched reviews");
        Ok(reviews
            .into_iter()
            .map(parse_review)
            .find(Review::is_approval))
    }

    /// Returns all comments of a pull request in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the remote call fails.
    pub async fn fetch_comments(
        &self,
        detail: &PullRequestDetail,
    ) -> Result<Vec<Comment>, ProviderError> {
        let comments = self
            .provider
            .list_comments(&detail.summary.repository, detail.summary.id)
            .await?;

        debug!(count = comments.len(), "Fetched comments");
        Ok(comments.into_iter().map(parse_comment).collect())
    }

    /// Returns the profile for `handle`, fetching it on a cache miss.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the remote call fails.
    pub async fn get_or_fetch_user(&self, handle: &str) -> Result<UserProfile, ProviderError> {
        self.profiles
            .get_or_fetch(handle, move || async move {
                Ok(parse_user(self.provider.get_user(handle).await?))
            })
            .await
    }
}
