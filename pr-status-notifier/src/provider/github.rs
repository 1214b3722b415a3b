//! GitHub REST implementation of [`PullRequestProvider`].

use super::{ProviderError, PullRequestProvider};
use crate::records::payload::{RawComment, RawIssue, RawPullRequest, RawReview, RawUser};
use octocrab::{Octocrab, Page};
use serde::Serialize;
use tracing::debug;

/// Results per page for paginated endpoints.
const RESULTS_PER_PAGE: u8 = 100;

#[derive(Serialize)]
struct SearchParams<'a> {
    q: &'a str,
    sort: &'static str,
    order: &'static str,
    per_page: u8,
}

#[derive(Serialize)]
struct PageParams {
    per_page: u8,
}

/// Pull request provider backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubProvider {
    octocrab: Octocrab,
    organization: String,
}

impl GitHubProvider {
    /// Builds an authenticated provider for an organization.
    ///
    /// `api_url` overrides the API base URL (e.g. for GitHub Enterprise).
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the client cannot be built.
    pub fn new(
        token: String,
        organization: impl Into<String>,
        api_url: Option<&str>,
    ) -> Result<Self, octocrab::Error> {
        let builder = Octocrab::builder().personal_token(token);
        let builder = match api_url {
            Some(url) => builder.base_uri(url)?,
            None => builder,
        };
        Ok(Self::from_octocrab(builder.build()?, organization))
    }

    /// Wraps an already configured client.
    pub fn from_octocrab(octocrab: Octocrab, organization: impl Into<String>) -> Self {
        Self {
            octocrab,
            organization: organization.into(),
        }
    }
}

/// Route of a single pull request.
fn pull_route(organization: &str, repository: &str, number: u64) -> String {
    format!("/repos/{organization}/{repository}/pulls/{number}")
}

/// Builds the issue search query for open pull requests in an organization.
fn build_search_query(organization: &str) -> String {
    format!("org:{organization} is:pr is:open")
}

/// Search parameters returning the least recently updated results first.
fn search_params(query: &str) -> SearchParams<'_> {
    SearchParams {
        q: query,
        sort: "updated",
        order: "asc",
        per_page: RESULTS_PER_PAGE,
    }
}

impl PullRequestProvider for GitHubProvider {
    async fn search_open_pull_requests(&self) -> Result<Vec<RawIssue>, ProviderError> {
        let query = build_search_query(&self.organization);
        debug!(query = %query, "Searching open pull requests");

        let params = search_params(&query);
        let page: Page<RawIssue> = self.octocrab.get("/search/issues", Some(&params)).await?;
        Ok(self.octocrab.all_pages(page).await?)
    }

    async fn get_pull_request(
        &self,
        repository: &str,
        number: u64,
    ) -> Result<RawPullRequest, ProviderError> {
        let route = pull_route(&self.organization, repository, number);
        Ok(self.octocrab.get(route, None::<&()>).await?)
    }

    async fn list_reviews(
        &self,
        repository: &str,
        number: u64,
    ) -> Result<Vec<RawReview>, ProviderError> {
        let route = format!("{}/reviews", pull_route(&self.organization, repository, number));
        let params = PageParams {
            per_page: RESULTS_PER_PAGE,
        };
        let page: Page<RawReview> = self.octocrab.get(route, Some(&params)).await?;
        Ok(self.octocrab.all_pages(page).await?)
    }

    async fn list_comments(
        &self,
        repository: &str,
        number: u64,
    ) -> Result<Vec<RawComment>, ProviderError> {
        let route = format!(
            "/repos/{}/{}/issues/{}/comments",
            self.organization, repository, number
        );
        let params = PageParams {
            per_page: RESULTS_PER_PAGE,
        };
        let page: Page<RawComment> = self.octocrab.get(route, Some(&params)).await?;
        Ok(self.octocrab.all_pages(page).await?)
    }

    async fn get_user(&self, handle: &str) -> Result<RawUser, ProviderError> {
        Ok(self.octocrab.get(format!("/users/{handle}"), None::<&()>).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_search_query() {
        assert_eq!(build_search_query("acme"), "org:acme is:pr is:open");
    }

    #[test]
    fn test_search_params_sort_oldest_update_first() {
        let params = serde_json::to_value(search_params("org:acme is:pr is:open")).unwrap();
        assert_eq!(
            params,
            json!({
                "q": "org:acme is:pr is:open",
                "sort": "updated",
                "order": "asc",
                "per_page": 100
            })
        );
    }

    #[test]
    fn test_pull_route() {
        assert_eq!(pull_route("acme", "api", 12), "/repos/acme/api/pulls/12");
    }
}
