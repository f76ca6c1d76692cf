//! Job sources
//!
//! The poller fetches through this trait rather than the HTTP client
//! directly, so cycles can be driven by any implementation.

use async_trait::async_trait;
use jobwatch_client::JobsClient;
use jobwatch_core::domain::job::{Job, JobFilter, JobId};

/// Something that can answer the two status queries
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Job summaries for a subset, in server order
    async fn list_jobs(&self, filter: JobFilter) -> jobwatch_client::Result<Vec<Job>>;

    /// A job with its sub-jobs, `None` once it no longer exists
    async fn get_job(&self, job_id: &JobId) -> jobwatch_client::Result<Option<Job>>;
}

#[async_trait]
impl JobSource for JobsClient {
    async fn list_jobs(&self, filter: JobFilter) -> jobwatch_client::Result<Vec<Job>> {
        JobsClient::list_jobs(self, filter).await
    }

    async fn get_job(&self, job_id: &JobId) -> jobwatch_client::Result<Option<Job>> {
        JobsClient::get_job(self, job_id).await
    }
}
