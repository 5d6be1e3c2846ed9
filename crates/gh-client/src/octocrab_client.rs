//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab
//! library. This client makes real API calls; every call carries the
//! personal token the octocrab instance was built with.

use crate::client::GitHubClient;
use crate::types::{PullRequest, Review, ReviewState};
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use std::sync::Arc;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

/// Review record as returned by the reviews sub-resource
#[derive(Debug, serde::Deserialize)]
struct ReviewRecord {
    state: ReviewState,
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_open_pull_requests(
        &self,
        owner: &str,
        repo: &str,
    ) -> anyhow::Result<Vec<PullRequest>> {
        debug!("Fetching open PRs for {}/{}", owner, repo);

        const PER_PAGE: u8 = 50;

        let page = self
            .octocrab
            .pulls(owner, repo)
            .list()
            .state(octocrab::params::State::Open)
            .sort(octocrab::params::pulls::Sort::Created)
            .direction(octocrab::params::Direction::Descending)
            .per_page(PER_PAGE)
            .send()
            .await?;

        let prs: Vec<PullRequest> = page.items.iter().map(convert_pull_request).collect();

        debug!("Fetched {} open PRs for {}/{}", prs.len(), owner, repo);
        Ok(prs)
    }

    async fn fetch_reviews(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<Vec<Review>> {
        debug!("Fetching reviews for {}/{}#{}", owner, repo, pr_number);

        // Raw GET keeps the review state strings exactly as the API sends them
        let route = format!("/repos/{}/{}/pulls/{}/reviews", owner, repo, pr_number);
        let records: Vec<ReviewRecord> = self.octocrab.get(route, None::<&()>).await?;

        Ok(records
            .into_iter()
            .map(|record| Review {
                state: record.state,
            })
            .collect())
    }
}

/// Convert octocrab PullRequest to our PullRequest type
fn convert_pull_request(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        title: pr.title.clone().unwrap_or_default(),
        author: pr
            .user
            .as_ref()
            .map(|u| u.login.clone())
            .unwrap_or_else(|| "unknown".to_string()),
        html_url: pr
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default(),
        created_at: pr.created_at.unwrap_or_else(chrono::Utc::now),
        draft: pr.draft.unwrap_or(false),
        requested_reviewers: pr
            .requested_reviewers
            .as_ref()
            .map(|users| users.iter().map(|u| u.login.clone()).collect())
            .unwrap_or_default(),
        requested_teams: pr
            .requested_teams
            .as_ref()
            .map(|teams| teams.iter().map(|t| t.name.clone()).collect())
            .unwrap_or_default(),
        labels: pr
            .labels
            .as_ref()
            .map(|labels| labels.iter().map(|l| l.name.clone()).collect())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_record_deserialization() {
        let json = r#"[
            {"id": 1, "state": "APPROVED", "user": {"login": "alice"}},
            {"id": 2, "state": "CHANGES_REQUESTED", "user": {"login": "bob"}},
            {"id": 3, "state": "DISMISSED"}
        ]"#;

        let records: Vec<ReviewRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].state, ReviewState::Approved);
        assert_eq!(records[1].state, ReviewState::ChangesRequested);
        assert_eq!(records[2].state, ReviewState::Dismissed);
    }

    #[test]
    fn test_review_record_tolerates_unknown_state() {
        let json = r#"[{"state": "SOME_FUTURE_STATE"}]"#;

        let records: Vec<ReviewRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records[0].state, ReviewState::Other);
    }
}
