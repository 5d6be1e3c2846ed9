//! Message rendering
//!
//! Pure translation of a pull request list into a Slack message.
//! The current time is passed in so rendering stays deterministic
//! under test.

use chrono::{DateTime, Utc};
use gh_client::PullRequest;

use crate::block::{Block, Message, Text};

const EMPTY_SUMMARY: &str = "No PRs available for review! 🎉";
const EMPTY_SECTION: &str = "✅ *No PRs available for review!*\n\nAll caught up! 🎉";
const NO_REVIEWERS_PLACEHOLDER: &str = "_No reviewers assigned_";

/// Build the Slack message for a list of pull requests
///
/// An empty list produces the fixed "all caught up" payload. A non-empty
/// list produces a header with the count, a repository line, and one
/// section per PR followed by a timestamp footer.
pub fn build_message(prs: &[PullRequest], repo: &str, now: DateTime<Utc>) -> Message {
    if prs.is_empty() {
        return Message {
            text: EMPTY_SUMMARY.to_string(),
            blocks: vec![Block::Section {
                text: Text::mrkdwn(EMPTY_SECTION),
            }],
        };
    }

    let mut blocks = vec![
        Block::Header {
            text: Text::plain(format!("📋 Pull Requests Awaiting Review ({})", prs.len())),
        },
        Block::Section {
            text: Text::mrkdwn(format!("*Repository:* `{}`", repo)),
        },
        Block::Divider,
    ];

    for pr in prs {
        blocks.push(Block::Section {
            text: Text::mrkdwn(render_pull_request(pr, now)),
        });
        blocks.push(Block::Divider);
    }

    blocks.push(footer(now));

    Message {
        text: format!("{} PR(s) available for review", prs.len()),
        blocks,
    }
}

/// Whole days since creation, truncated
fn age_in_days(pr: &PullRequest, now: DateTime<Utc>) -> i64 {
    (now - pr.created_at).num_days()
}

/// Urgency marker: strictly older than 7 days is red, than 3 days yellow
fn priority_marker(days_old: i64) -> &'static str {
    if days_old > 7 {
        "🔴"
    } else if days_old > 3 {
        "🟡"
    } else {
        "🟢"
    }
}

fn age_line(days_old: i64) -> String {
    let suffix = if days_old == 1 { "" } else { "s" };
    format!("{} day{} old", days_old, suffix)
}

fn reviewer_line(pr: &PullRequest) -> String {
    let handles: Vec<String> = pr
        .requested_reviewers
        .iter()
        .chain(pr.requested_teams.iter())
        .map(|handle| format!("@{}", handle))
        .collect();

    if handles.is_empty() {
        NO_REVIEWERS_PLACEHOLDER.to_string()
    } else {
        handles.join(", ")
    }
}

fn render_pull_request(pr: &PullRequest, now: DateTime<Utc>) -> String {
    let days_old = age_in_days(pr, now);

    let mut text = format!(
        "{} *<{}|#{}: {}>*\n",
        priority_marker(days_old),
        pr.html_url,
        pr.number,
        pr.title
    );
    text.push_str(&format!("👤 *Author:* {}\n", pr.author));
    text.push_str(&format!("👥 *Reviewers:* {}\n", reviewer_line(pr)));
    text.push_str(&format!("📅 *Created:* {}\n", age_line(days_old)));

    if !pr.labels.is_empty() {
        let labels = pr
            .labels
            .iter()
            .map(|label| format!("`{}`", label))
            .collect::<Vec<_>>()
            .join(", ");
        text.push_str(&format!("🏷️ *Labels:* {}\n", labels));
    }

    text
}

/// Footer with Slack's date token plus a UTC fallback
fn footer(now: DateTime<Utc>) -> Block {
    let fallback = now.format("%Y-%m-%d %H:%M:%S UTC");
    Block::Context {
        elements: vec![Text::mrkdwn(format!(
            "Last updated: <!date^{}^{{date_num}} {{time_secs}}|{}>",
            now.timestamp(),
            fallback
        ))],
    }
}
