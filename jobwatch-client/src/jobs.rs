//! Job status endpoints

use jobwatch_core::domain::job::{Job, JobFilter, JobId};
use jobwatch_core::dto::job::{JobDetailResponse, JobListResponse};
use tracing::debug;

use crate::JobsClient;
use crate::error::Result;

impl JobsClient {
    /// List job summaries
    ///
    /// `JobFilter::Active` requests `/api/jobs`, `JobFilter::Completed`
    /// requests `/api/jobs?inactive=1`. Jobs are returned in server order.
    pub async fn list_jobs(&self, filter: JobFilter) -> Result<Vec<Job>> {
        let url = format!("{}/api/jobs{}", self.base_url, filter.query_suffix());
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let body: JobListResponse = self.handle_response(response).await?;
        Ok(body.jobs)
    }

    /// Get a job with its sub-jobs
    ///
    /// # Returns
    /// `None` when the server reports the job as gone (`{"job": {}}`)
    pub async fn get_job(&self, job_id: &JobId) -> Result<Option<Job>> {
        let url = format!("{}/api/jobs/{}", self.base_url, job_id);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let body: JobDetailResponse = self.handle_response(response).await?;
        Ok(body.job)
    }
}
