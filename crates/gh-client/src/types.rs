//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API.
//! They are intentionally separate from octocrab's models to keep
//! the rest of the workspace independent of the API library.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pull request from the GitHub API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number (e.g., 123)
    pub number: u64,

    /// PR title
    pub title: String,

    /// Author's GitHub username
    pub author: String,

    /// PR URL for linking in notifications
    pub html_url: String,

    /// When the PR was created
    pub created_at: DateTime<Utc>,

    /// Whether the PR is a draft
    pub draft: bool,

    /// Usernames with an outstanding review request
    pub requested_reviewers: Vec<String>,

    /// Team names with an outstanding review request
    pub requested_teams: Vec<String>,

    /// Label names on the PR
    pub labels: Vec<String>,
}

impl PullRequest {
    /// Whether any user or team still has an open review request
    pub fn has_requested_reviewers(&self) -> bool {
        !self.requested_reviewers.is_empty() || !self.requested_teams.is_empty()
    }
}

/// A single review on a pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Review state as reported by GitHub
    pub state: ReviewState,
}

impl Review {
    /// Whether this review is an approval
    pub fn is_approval(&self) -> bool {
        matches!(self.state, ReviewState::Approved)
    }
}

/// Review state as reported by the GitHub REST API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    /// Reviewer approved the changes
    Approved,
    /// Reviewer requested changes
    ChangesRequested,
    /// Reviewer left comments without a verdict
    Commented,
    /// Review was dismissed
    Dismissed,
    /// Review is pending submission
    Pending,
    /// Any state this crate does not model
    #[serde(other)]
    Other,
}
