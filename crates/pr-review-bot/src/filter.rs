//! Review-need filtering
//!
//! A PR is considered handled only when it is not a draft, has nobody left
//! on the review-request list, and already carries an approval. Everything
//! else is surfaced. Note the asymmetry: a PR with outstanding review
//! requests stays in the list even when it is already approved, because an
//! open request signals an in-flight review cycle.

use gh_client::{GitHubClient, PullRequest, Review};
use log::warn;

use crate::config::RepoId;

/// Pure review-need predicate
///
/// `reviews` is `None` when the review fetch failed; the PR is then
/// included unconditionally rather than silently dropped.
pub fn needs_review(pr: &PullRequest, reviews: Option<&[Review]>) -> bool {
    if pr.draft {
        return false;
    }

    let Some(reviews) = reviews else {
        return true;
    };

    let approved = reviews.iter().any(Review::is_approval);
    pr.has_requested_reviewers() || !approved
}

/// Keep the PRs that still need review
///
/// Fetches each PR's reviews serially. Input order (creation time,
/// newest first) is preserved; the input is never mutated.
pub async fn filter_needing_review(
    client: &dyn GitHubClient,
    repo: &RepoId,
    prs: &[PullRequest],
) -> Vec<PullRequest> {
    let mut needing = Vec::new();

    for pr in prs {
        // Drafts never need review; skip the review fetch entirely
        if pr.draft {
            continue;
        }

        let reviews = match client.fetch_reviews(&repo.owner, &repo.name, pr.number).await {
            Ok(reviews) => Some(reviews),
            Err(err) => {
                warn!("Error fetching reviews for PR #{}: {:#}", pr.number, err);
                None
            }
        };

        if needs_review(pr, reviews.as_deref()) {
            needing.push(pr.clone());
        }
    }

    needing
}
