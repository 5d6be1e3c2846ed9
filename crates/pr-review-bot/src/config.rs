//! Configuration loaded from the environment
//!
//! Three values are required: the GitHub token, the Slack webhook URL and
//! the repository identifier. Missing any of them aborts the run before
//! any network activity.

use std::env;
use std::fmt;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A repository identified as `owner/repo`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    /// Parse an `owner/repo` string
    pub fn parse(value: &str) -> Result<Self> {
        match value.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => bail!("GITHUB_REPO must be in 'owner/repo' format, got '{}'", value),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Immutable run configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub personal access token
    pub github_token: String,
    /// Slack incoming-webhook URL
    pub webhook_url: String,
    /// Repository to watch
    pub repo: RepoId,
    /// Timeout applied to outbound webhook requests
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Required: `GITHUB_TOKEN`, `SLACK_WEBHOOK_URL`, `GITHUB_REPO`.
    /// Optional: `HTTP_TIMEOUT_SECS` (defaults to 30).
    pub fn from_env() -> Result<Self> {
        let github_token = require("GITHUB_TOKEN")?;
        let webhook_url = require("SLACK_WEBHOOK_URL")?;
        let repo = RepoId::parse(&require("GITHUB_REPO")?)?;

        let http_timeout = match env::var("HTTP_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().with_context(|| {
                    format!("HTTP_TIMEOUT_SECS must be a whole number of seconds, got '{}'", raw)
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            github_token,
            webhook_url,
            repo,
            http_timeout,
        })
    }
}

/// Read a required environment variable, rejecting empty values
fn require(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(anyhow!("{} environment variable is required", key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_id_parse_valid() {
        let repo = RepoId::parse("rust-lang/rust").unwrap();
        assert_eq!(repo.owner, "rust-lang");
        assert_eq!(repo.name, "rust");
        assert_eq!(repo.to_string(), "rust-lang/rust");
    }

    #[test]
    fn test_repo_id_parse_rejects_missing_slash() {
        assert!(RepoId::parse("rust").is_err());
    }

    #[test]
    fn test_repo_id_parse_rejects_empty_halves() {
        assert!(RepoId::parse("/repo").is_err());
        assert!(RepoId::parse("owner/").is_err());
        assert!(RepoId::parse("/").is_err());
    }

    #[test]
    fn test_repo_id_parse_rejects_extra_segments() {
        assert!(RepoId::parse("owner/repo/extra").is_err());
    }
}
