//! Jobwatch
//!
//! Keeps job status tables current by polling the jobs API.
//!
//! `jobwatch jobs` maintains the active and completed job tables;
//! `jobwatch job <ID>` follows a single job and its sub-jobs until it
//! disappears. Tables go to the terminal, or to one file per table with
//! `--output-dir`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use jobwatch_core::domain::job::JobId;
use jobwatch_monitor::config::Config;
use jobwatch_monitor::page::{DirectoryPage, Page, TerminalPage};
use jobwatch_monitor::scheduler::{PollHandle, PollOutcome, StatusPoller};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jobwatch")]
#[command(about = "Live job status tables", long_about = None)]
struct Cli {
    /// Base URL of the jobs API
    #[arg(long, env = "JOBWATCH_URL", default_value = "http://localhost:5000")]
    url: String,

    /// Delay between polls, in milliseconds
    #[arg(long, env = "POLL_INTERVAL_MS", default_value_t = 2000)]
    interval_ms: u64,

    /// Request timeout, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Write each table to <DIR>/<table>.html instead of the terminal
    #[arg(long, env = "JOBWATCH_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Follow the active and completed job lists
    Jobs,
    /// Follow a single job and its sub-jobs
    Job {
        /// Job ID
        id: String,

        /// Table receiving the job summary row
        #[arg(long, default_value = "#id_job")]
        job_container: String,

        /// Table receiving the sub-job rows
        #[arg(long, default_value = "#id_subjobs")]
        subjob_container: String,
    },
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            base_url: self.url.clone(),
            poll_interval: Duration::from_millis(self.interval_ms),
            request_timeout: Duration::from_secs(self.timeout_secs),
            output_dir: self.output_dir.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobwatch_monitor=info,jobwatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = cli.config();
    config.validate()?;
    info!(
        "Loaded configuration: base_url={}, poll_interval={:?}",
        config.base_url, config.poll_interval
    );

    let client = Arc::new(config.jobs_client()?);

    let page: Arc<dyn Page> = match &config.output_dir {
        Some(dir) => {
            info!("Writing tables to {}", dir.display());
            Arc::new(DirectoryPage::create(dir)?)
        }
        None => Arc::new(TerminalPage::new()),
    };

    let poller = StatusPoller::new(client, page, config.poll_interval);

    let handle = match cli.command {
        Commands::Jobs => poller.start_period_update_jobs(),
        Commands::Job {
            id,
            job_container,
            subjob_container,
        } => poller.start_period_update_job(JobId::from(id), job_container, subjob_container),
    };

    match run_until_interrupted(handle).await? {
        PollOutcome::Stopped => info!("Stopped"),
        PollOutcome::Navigated(location) => info!("Job is gone, moved to {}", location),
    }

    Ok(())
}

/// Waits for the poll loop to end on its own or stops it on Ctrl-C
async fn run_until_interrupted(mut handle: PollHandle) -> Result<PollOutcome> {
    let finished = tokio::select! {
        outcome = handle.join() => Some(outcome),
        _ = tokio::signal::ctrl_c() => None,
    };

    match finished {
        Some(outcome) => outcome,
        None => {
            info!("Interrupted, stopping poller");
            handle.stop();
            handle.join().await
        }
    }
}
