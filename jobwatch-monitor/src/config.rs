//! Monitor configuration
//!
//! Connection settings for the jobs API, the poll cadence and where rendered
//! tables are written. The `jobwatch` binary fills this in from flags and
//! environment variables.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use jobwatch_client::JobsClient;

use crate::scheduler::DEFAULT_POLL_INTERVAL;

/// Monitor configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the jobs API (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Delay between poll cycles
    pub poll_interval: Duration,

    /// Upper bound on a single request, including reading the body
    pub request_timeout: Duration,

    /// Directory receiving one file per table; `None` prints to the terminal
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: Duration::from_secs(10),
            output_dir: None,
        }
    }

    /// Sets the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("base_url cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }

    /// Builds the jobs client, applying the request timeout
    pub fn jobs_client(&self) -> anyhow::Result<JobsClient> {
        let http_client = reqwest::Client::builder()
            .timeout(self.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(JobsClient::with_client(self.base_url.clone(), http_client))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("http://localhost:5000".to_string())
    }
}
