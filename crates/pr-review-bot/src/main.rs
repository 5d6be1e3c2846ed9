//! pr-review-bot entrypoint
//!
//! Runs once and exits: fetch open PRs, filter to those needing review,
//! post the summary to Slack. Periodic execution is the scheduler's job.
//!
//! Exit codes: 0 on successful delivery, 1 on configuration errors,
//! 2 when the webhook delivery fails (so schedulers can alert on it).

mod config;
mod filter;
mod run;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use gh_client::OctocrabClient;
use octocrab::Octocrab;
use slack_notify::WebhookClient;

/// Posts open GitHub PRs that still need review to a Slack channel
#[derive(Debug, Parser)]
#[command(name = "pr-review-bot", version, about)]
struct Cli {
    /// Post all open PRs without applying the review-need filter
    #[arg(long)]
    no_filter: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = config::Config::from_env()?;

    let octocrab = Octocrab::builder()
        .personal_token(config.github_token.clone())
        .build()
        .context("Failed to build GitHub client")?;
    let client = OctocrabClient::new(Arc::new(octocrab));

    let webhook = WebhookClient::new(config.webhook_url.clone(), config.http_timeout)?;

    let outcome = run::run(&client, &webhook, &config.repo, !cli.no_filter).await;

    if outcome.delivered {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(2))
    }
}
