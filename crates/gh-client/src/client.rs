//! GitHub client trait definition
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy.

use crate::types::{PullRequest, Review};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the interface for the two reads the notifier performs.
/// Implementations can be direct (hitting the API) or stubs for tests.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{GitHubClient, PullRequest};
///
/// async fn list_prs(client: &dyn GitHubClient) -> anyhow::Result<Vec<PullRequest>> {
///     client.fetch_open_pull_requests("rust-lang", "rust").await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch open pull requests for a repository
    ///
    /// Results are sorted by creation time, newest first. Only a single
    /// page is requested; repositories with more open PRs than one page
    /// holds are truncated.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    ///
    /// # Returns
    ///
    /// A list of open pull requests, or an error if the API call fails.
    /// Callers decide whether a failure is fatal; the notifier treats it
    /// as an empty result.
    async fn fetch_open_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> anyhow::Result<Vec<PullRequest>>;

    /// Fetch the reviews of a single pull request
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    ///
    /// # Returns
    ///
    /// All reviews on the PR, or an error if the API call fails. A failure
    /// means the review state is unknown, not that there are no reviews.
    async fn fetch_reviews(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<Vec<Review>>;
}
