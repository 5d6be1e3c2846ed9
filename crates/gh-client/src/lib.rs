//! GitHub API client for pull request and review data
//!
//! This crate provides a trait-based GitHub API client scoped to the two
//! reads the review notifier needs: the open pull requests of a repository
//! and the reviews of a single pull request.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - fetch_open_pull_requests()                    │
//! │  - fetch_reviews()                               │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let octocrab = octocrab::Octocrab::builder()
//!     .personal_token("token".to_string())
//!     .build()?;
//!
//! let client = OctocrabClient::new(Arc::new(octocrab));
//! let prs = client.fetch_open_pull_requests("owner", "repo").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;
pub mod types;

pub use client::GitHubClient;
pub use octocrab_client::OctocrabClient;
pub use types::{PullRequest, Review, ReviewState};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
