//! Run orchestration
//!
//! One run: fetch open PRs, filter to those needing review, render the
//! Slack message, deliver it. Each run is independent; nothing is kept
//! between invocations.

use gh_client::GitHubClient;
use log::{info, warn};
use slack_notify::{build_message, WebhookClient};

use crate::config::RepoId;
use crate::filter;

/// What a single run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Whether the webhook accepted the message
    pub delivered: bool,
    /// Whether the PR list fetch failed and was treated as empty
    pub fetch_failed: bool,
    /// Number of PRs included in the posted message
    pub posted: usize,
}

/// Execute one notification run
///
/// A failed PR fetch is reported as an empty queue rather than aborting,
/// so the channel still gets a message; the failure is surfaced through
/// `RunOutcome::fetch_failed` for callers that care about the difference.
pub async fn run(
    client: &dyn GitHubClient,
    webhook: &WebhookClient,
    repo: &RepoId,
    apply_filter: bool,
) -> RunOutcome {
    info!("🔍 Fetching open PRs from {}...", repo);

    let (prs, fetch_failed) = match client.fetch_open_pull_requests(&repo.owner, &repo.name).await {
        Ok(prs) => (prs, false),
        Err(err) => {
            warn!("Error fetching PRs from GitHub: {:#}", err);
            (Vec::new(), true)
        }
    };

    if prs.is_empty() {
        info!("No open PRs found.");
        let message = build_message(&[], &repo.to_string(), chrono::Utc::now());
        let delivered = webhook.deliver(&message).await;
        return RunOutcome {
            delivered,
            fetch_failed,
            posted: 0,
        };
    }

    info!("Found {} open PR(s)", prs.len());

    let prs = if apply_filter {
        info!("🔎 Filtering PRs that need review...");
        let needing = filter::filter_needing_review(client, repo, &prs).await;
        info!("Found {} PR(s) needing review", needing.len());
        needing
    } else {
        prs
    };

    info!("📝 Formatting message for Slack...");
    let message = build_message(&prs, &repo.to_string(), chrono::Utc::now());

    info!("📤 Posting to Slack...");
    let delivered = webhook.deliver(&message).await;

    RunOutcome {
        delivered,
        fetch_failed,
        posted: prs.len(),
    }
}
