//! Status poller
//!
//! Periodically fetches job status and re-renders the job tables.
//!
//! List mode issues two independent fetches per cycle (active and completed
//! jobs), each rendering as soon as its own response arrives, and starts the
//! next cycle one interval after the previous one issued its fetches. Detail
//! mode is sequential: fetch, render, wait one interval, repeat, until the job
//! disappears and the page is navigated back to the job list.
//!
//! Failed cycles are logged and leave the previous render in place.

use std::sync::Arc;

use anyhow::{Context, Result};
use jobwatch_client::ClientError;
use jobwatch_core::domain::job::{JobFilter, JobId};
use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, Duration};
use tracing::{debug, error, info, warn};

use super::source::JobSource;
use crate::page::Page;
use crate::render::{render_job_rows, render_job_summary, render_subjob_rows};

/// Table listing jobs that are still queued or running
pub const ACTIVE_JOBS_CONTAINER: &str = "#id_jobs_active";

/// Table listing finished jobs
pub const COMPLETED_JOBS_CONTAINER: &str = "#id_jobs_completed";

/// Where detail mode sends the page once its job is gone
pub const JOB_LIST_LOCATION: &str = "/jobs/status";

/// Delay between poll cycles
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

const LIST_TARGETS: [(&str, JobFilter); 2] = [
    (ACTIVE_JOBS_CONTAINER, JobFilter::Active),
    (COMPLETED_JOBS_CONTAINER, JobFilter::Completed),
];

/// How a poll loop ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Stopped through its handle
    Stopped,
    /// The polled job disappeared and the page moved to this location
    Navigated(String),
}

/// Result of one successful detail cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailCycle {
    /// Summary and sub-job rows were rendered
    Rendered { subjobs: usize },
    /// The job no longer exists; the page was navigated away
    NotFound,
}

/// Fetches one job subset and replaces the body of `container` with it
///
/// # Returns
/// The number of rows rendered
pub async fn update_jobs(
    source: &dyn JobSource,
    page: &dyn Page,
    container: &str,
    filter: JobFilter,
) -> Result<usize> {
    let jobs = source
        .list_jobs(filter)
        .await
        .with_context(|| format!("Failed to fetch jobs for {}", container))?;

    page.replace_body(container, &render_job_rows(&jobs))
        .with_context(|| format!("Failed to render {}", container))?;

    Ok(jobs.len())
}

/// Fetches one job and renders its summary and sub-jobs
///
/// When the job no longer exists nothing is rendered and the page is
/// navigated to [`JOB_LIST_LOCATION`].
pub async fn update_job(
    source: &dyn JobSource,
    page: &dyn Page,
    job_id: &JobId,
    job_container: &str,
    subjob_container: &str,
) -> Result<DetailCycle> {
    let job = source
        .get_job(job_id)
        .await
        .with_context(|| format!("Failed to fetch job {}", job_id))?;

    let Some(job) = job else {
        page.navigate(JOB_LIST_LOCATION)
            .with_context(|| format!("Failed to navigate to {}", JOB_LIST_LOCATION))?;
        return Ok(DetailCycle::NotFound);
    };

    page.replace_body(job_container, &render_job_summary(&job))
        .with_context(|| format!("Failed to render {}", job_container))?;
    page.replace_body(subjob_container, &render_subjob_rows(&job.subjob))
        .with_context(|| format!("Failed to render {}", subjob_container))?;

    Ok(DetailCycle::Rendered {
        subjobs: job.subjob.len(),
    })
}

/// Logs a failed cycle according to what went wrong
fn log_cycle_failure(target: &str, err: &anyhow::Error) {
    match err.downcast_ref::<ClientError>() {
        Some(client_err) if client_err.is_malformed() => {
            error!("Malformed response for {}, keeping previous render: {:#}", target, err)
        }
        Some(_) => warn!("Request for {} failed, keeping previous render: {:#}", target, err),
        None => error!("Failed to update {}: {:#}", target, err),
    }
}

/// Handle to a running poll loop
///
/// Dropping the handle stops the loop as well.
pub struct PollHandle {
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<PollOutcome>,
}

impl PollHandle {
    fn spawn<F, Fut>(run: F) -> Self
    where
        F: FnOnce(watch::Receiver<bool>) -> Fut,
        Fut: std::future::Future<Output = PollOutcome> + Send + 'static,
    {
        let (stop_tx, stop_rx) = watch::channel(false);
        let task = tokio::spawn(run(stop_rx));
        Self { stop_tx, task }
    }

    /// Asks the loop to stop; in-flight requests are abandoned
    pub fn stop(&self) {
        self.stop_tx.send_replace(true);
    }

    /// Whether the loop has ended
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the loop to end
    ///
    /// Must not be called again after it has returned.
    pub async fn join(&mut self) -> Result<PollOutcome> {
        (&mut self.task).await.context("Poll task failed")
    }
}

/// Resolves once a stop was requested or the handle was dropped
async fn stopped(stop: &mut watch::Receiver<bool>) {
    let _ = stop.wait_for(|stop| *stop).await;
}

/// Polls the jobs API and keeps the job tables of a page up to date
#[derive(Clone)]
pub struct StatusPoller {
    source: Arc<dyn JobSource>,
    page: Arc<dyn Page>,
    interval: Duration,
}

impl StatusPoller {
    /// Creates a new status poller
    ///
    /// # Arguments
    /// * `source` - Where job status is fetched from
    /// * `page` - Where rendered tables are written
    /// * `interval` - Delay between cycles
    pub fn new(source: Arc<dyn JobSource>, page: Arc<dyn Page>, interval: Duration) -> Self {
        Self {
            source,
            page,
            interval,
        }
    }

    /// Starts list mode on [`ACTIVE_JOBS_CONTAINER`] and [`COMPLETED_JOBS_CONTAINER`]
    ///
    /// Runs until stopped.
    pub fn start_period_update_jobs(&self) -> PollHandle {
        info!("Starting job list polling (interval: {:?})", self.interval);

        let source = Arc::clone(&self.source);
        let page = Arc::clone(&self.page);
        let interval = self.interval;

        PollHandle::spawn(move |stop| Self::run_list(source, page, interval, stop))
    }

    /// Starts detail mode for one job
    ///
    /// Runs until stopped or until the job disappears.
    pub fn start_period_update_job(
        &self,
        job_id: JobId,
        job_container: impl Into<String>,
        subjob_container: impl Into<String>,
    ) -> PollHandle {
        info!(
            "Starting polling of job {} (interval: {:?})",
            job_id, self.interval
        );

        let source = Arc::clone(&self.source);
        let page = Arc::clone(&self.page);
        let interval = self.interval;
        let job_container = job_container.into();
        let subjob_container = subjob_container.into();

        PollHandle::spawn(move |stop| {
            Self::run_detail(
                source,
                page,
                interval,
                job_id,
                job_container,
                subjob_container,
                stop,
            )
        })
    }

    async fn run_list(
        source: Arc<dyn JobSource>,
        page: Arc<dyn Page>,
        interval: Duration,
        mut stop: watch::Receiver<bool>,
    ) -> PollOutcome {
        let mut inflight = JoinSet::new();

        loop {
            while let Some(finished) = inflight.try_join_next() {
                if let Err(e) = finished {
                    warn!("List update task panicked: {}", e);
                }
            }

            debug!("Polling job lists");

            for (container, filter) in LIST_TARGETS {
                let source = Arc::clone(&source);
                let page = Arc::clone(&page);

                inflight.spawn(async move {
                    match update_jobs(source.as_ref(), page.as_ref(), container, filter).await {
                        Ok(rows) => debug!("Rendered {} row(s) into {}", rows, container),
                        Err(e) => log_cycle_failure(container, &e),
                    }
                });
            }

            tokio::select! {
                _ = time::sleep(interval) => {}
                _ = stopped(&mut stop) => {
                    inflight.abort_all();
                    info!("Job list polling stopped");
                    return PollOutcome::Stopped;
                }
            }
        }
    }

    async fn run_detail(
        source: Arc<dyn JobSource>,
        page: Arc<dyn Page>,
        interval: Duration,
        job_id: JobId,
        job_container: String,
        subjob_container: String,
        mut stop: watch::Receiver<bool>,
    ) -> PollOutcome {
        loop {
            debug!("Polling job {}", job_id);

            let cycle = tokio::select! {
                cycle = update_job(
                    source.as_ref(),
                    page.as_ref(),
                    &job_id,
                    &job_container,
                    &subjob_container,
                ) => cycle,
                _ = stopped(&mut stop) => {
                    info!("Polling of job {} stopped", job_id);
                    return PollOutcome::Stopped;
                }
            };

            match cycle {
                Ok(DetailCycle::Rendered { subjobs }) => {
                    debug!("Rendered job {} with {} sub-job(s)", job_id, subjobs)
                }
                Ok(DetailCycle::NotFound) => {
                    info!(
                        "Job {} no longer exists, navigated to {}",
                        job_id, JOB_LIST_LOCATION
                    );
                    return PollOutcome::Navigated(JOB_LIST_LOCATION.to_string());
                }
                Err(e) => log_cycle_failure(&format!("job {}", job_id), &e),
            }

            tokio::select! {
                _ = time::sleep(interval) => {}
                _ = stopped(&mut stop) => {
                    info!("Polling of job {} stopped", job_id);
                    return PollOutcome::Stopped;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use jobwatch_core::domain::job::Job;
    use serde_json::json;
    use tokio::time::Instant;

    use super::*;
    use crate::page::MemoryPage;

    /// Job source answering from a script, recording when it was asked
    struct ScriptedSource {
        latency: Duration,
        jobs: Vec<Job>,
        failing_lists: bool,
        details: Mutex<VecDeque<jobwatch_client::Result<Option<Job>>>>,
        calls: Mutex<Vec<(Instant, String)>>,
    }

    impl ScriptedSource {
        fn new(latency: Duration) -> Self {
            Self {
                latency,
                jobs: vec![sample_job()],
                failing_lists: false,
                details: Mutex::new(VecDeque::new()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn with_details(self, details: Vec<jobwatch_client::Result<Option<Job>>>) -> Self {
            *self.details.lock().unwrap() = details.into();
            self
        }

        fn with_failing_lists(mut self) -> Self {
            self.failing_lists = true;
            self
        }

        fn calls(&self) -> Vec<(Instant, String)> {
            self.calls.lock().unwrap().clone()
        }

        async fn record(&self, call: String) {
            self.calls.lock().unwrap().push((Instant::now(), call));
            time::sleep(self.latency).await;
        }
    }

    #[async_trait]
    impl JobSource for ScriptedSource {
        async fn list_jobs(&self, filter: JobFilter) -> jobwatch_client::Result<Vec<Job>> {
            self.record(format!("list{}", filter.query_suffix())).await;
            if self.failing_lists {
                return Err(ClientError::api_error(503, "unavailable"));
            }
            Ok(self.jobs.clone())
        }

        async fn get_job(&self, job_id: &JobId) -> jobwatch_client::Result<Option<Job>> {
            self.record(format!("get {}", job_id)).await;
            self.details
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Some(sample_job())))
        }
    }

    /// Page rejecting body writes and a number of navigations
    #[derive(Default)]
    struct FlakyPage {
        inner: MemoryPage,
        reject_bodies: bool,
        navigations_to_reject: Mutex<usize>,
        attempted_navigations: Mutex<usize>,
    }

    impl FlakyPage {
        fn rejecting_bodies() -> Self {
            Self {
                reject_bodies: true,
                ..Self::default()
            }
        }

        fn rejecting_navigations(count: usize) -> Self {
            Self {
                navigations_to_reject: Mutex::new(count),
                ..Self::default()
            }
        }

        fn attempted_navigations(&self) -> usize {
            *self.attempted_navigations.lock().unwrap()
        }
    }

    impl Page for FlakyPage {
        fn replace_body(&self, container: &str, fragment: &str) -> Result<()> {
            if self.reject_bodies {
                anyhow::bail!("container {} is gone", container);
            }
            self.inner.replace_body(container, fragment)
        }

        fn navigate(&self, location: &str) -> Result<()> {
            *self.attempted_navigations.lock().unwrap() += 1;
            let mut remaining = self.navigations_to_reject.lock().unwrap();
            if *remaining > 0 {
                *remaining -= 1;
                anyhow::bail!("navigation to {} was blocked", location);
            }
            self.inner.navigate(location)
        }
    }

    fn sample_job() -> Job {
        serde_json::from_value(json!({
            "id": 1,
            "description": "d",
            "status": "s",
            "statusinfo": "i",
            "created": "c",
            "subjob": [
                {"id": 1, "action": "copy", "args": {"file": "a.bin"}},
                {"id": 2, "action": "reload", "args": null}
            ]
        }))
        .unwrap()
    }

    fn poller(source: Arc<ScriptedSource>, page: Arc<MemoryPage>) -> StatusPoller {
        StatusPoller::new(source, page, DEFAULT_POLL_INTERVAL)
    }

    fn offsets(calls: &[(Instant, String)]) -> Vec<u128> {
        let start = calls[0].0;
        calls.iter().map(|(at, _)| (*at - start).as_millis()).collect()
    }

    #[tokio::test]
    async fn test_update_jobs_renders_list() {
        let source = ScriptedSource::new(Duration::ZERO);
        let page = MemoryPage::new();

        let rows = update_jobs(&source, &page, ACTIVE_JOBS_CONTAINER, JobFilter::Active)
            .await
            .unwrap();

        assert_eq!(rows, 1);
        let body = page.body(ACTIVE_JOBS_CONTAINER).unwrap();
        assert!(body.starts_with("<tr><td><a href='/jobs/status/1'>1</a></td>"));
    }

    #[tokio::test]
    async fn test_update_job_renders_summary_and_subjobs() {
        let source = ScriptedSource::new(Duration::ZERO);
        let page = MemoryPage::new();

        let cycle = update_job(&source, &page, &JobId::new("1"), "#job", "#subjobs")
            .await
            .unwrap();

        assert_eq!(cycle, DetailCycle::Rendered { subjobs: 2 });
        assert_eq!(page.body("#job").unwrap().matches("<tr>").count(), 1);
        let subjobs = page.body("#subjobs").unwrap();
        assert!(subjobs.find("copy").unwrap() < subjobs.find("reload").unwrap());
        assert!(page.locations().is_empty());
    }

    #[tokio::test]
    async fn test_update_job_navigates_when_job_is_gone() {
        let source = ScriptedSource::new(Duration::ZERO).with_details(vec![Ok(None)]);
        let page = MemoryPage::new();

        let cycle = update_job(&source, &page, &JobId::new("1"), "#job", "#subjobs")
            .await
            .unwrap();

        assert_eq!(cycle, DetailCycle::NotFound);
        assert_eq!(page.locations(), vec![JOB_LIST_LOCATION.to_string()]);
        assert!(page.body("#job").is_none());
        assert!(page.body("#subjobs").is_none());
    }

    #[tokio::test]
    async fn test_update_job_error_keeps_previous_render() {
        let source = ScriptedSource::new(Duration::ZERO).with_details(vec![
            Ok(Some(sample_job())),
            Err(ClientError::api_error(502, "bad gateway")),
        ]);
        let page = MemoryPage::new();
        let id = JobId::new("1");

        update_job(&source, &page, &id, "#job", "#subjobs").await.unwrap();
        let err = update_job(&source, &page, &id, "#job", "#subjobs")
            .await
            .unwrap_err();

        assert!(err.downcast_ref::<ClientError>().unwrap().is_transient());
        assert_eq!(page.history("#job").len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_list_mode_polls_both_subsets_every_interval() {
        let source = Arc::new(ScriptedSource::new(Duration::ZERO));
        let page = Arc::new(MemoryPage::new());
        let mut handle = poller(Arc::clone(&source), Arc::clone(&page)).start_period_update_jobs();

        time::sleep(Duration::from_millis(4100)).await;
        handle.stop();
        assert_eq!(handle.join().await.unwrap(), PollOutcome::Stopped);

        let calls = source.calls();
        let active: Vec<_> = calls.iter().filter(|(_, c)| c == "list").cloned().collect();
        let completed: Vec<_> = calls
            .iter()
            .filter(|(_, c)| c == "list?inactive=1")
            .cloned()
            .collect();
        assert_eq!(offsets(&active), vec![0, 2000, 4000]);
        assert_eq!(offsets(&completed), vec![0, 2000, 4000]);

        assert_eq!(page.history(ACTIVE_JOBS_CONTAINER).len(), 3);
        assert_eq!(page.history(COMPLETED_JOBS_CONTAINER).len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_identical_responses_render_identically() {
        let source = Arc::new(ScriptedSource::new(Duration::ZERO));
        let page = Arc::new(MemoryPage::new());
        let mut handle = poller(source, Arc::clone(&page)).start_period_update_jobs();

        time::sleep(Duration::from_millis(2100)).await;
        handle.stop();
        handle.join().await.unwrap();

        let history = page.history(ACTIVE_JOBS_CONTAINER);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], history[1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_detail_mode_waits_interval_after_each_cycle() {
        let source = Arc::new(ScriptedSource::new(Duration::from_millis(500)));
        let page = Arc::new(MemoryPage::new());
        let mut handle = poller(Arc::clone(&source), Arc::clone(&page)).start_period_update_job(
            JobId::new("1"),
            "#job",
            "#subjobs",
        );

        time::sleep(Duration::from_millis(5100)).await;
        handle.stop();
        assert_eq!(handle.join().await.unwrap(), PollOutcome::Stopped);

        // 500 ms request, then 2000 ms wait before the next one
        assert_eq!(offsets(&source.calls()), vec![0, 2500, 5000]);
        assert_eq!(page.history("#job").len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_detail_mode_keeps_polling_after_failures() {
        let source = Arc::new(ScriptedSource::new(Duration::ZERO).with_details(vec![
            Err(ClientError::api_error(503, "unavailable")),
            Err(ClientError::ParseError("expected value".to_string())),
        ]));
        let page = Arc::new(MemoryPage::new());
        let mut handle = poller(Arc::clone(&source), Arc::clone(&page)).start_period_update_job(
            JobId::new("1"),
            "#job",
            "#subjobs",
        );

        time::sleep(Duration::from_millis(4100)).await;
        handle.stop();
        handle.join().await.unwrap();

        assert_eq!(offsets(&source.calls()), vec![0, 2000, 4000]);
        assert_eq!(page.history("#job").len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_detail_mode_ends_when_job_disappears() {
        let source = Arc::new(
            ScriptedSource::new(Duration::ZERO).with_details(vec![Ok(Some(sample_job())), Ok(None)]),
        );
        let page = Arc::new(MemoryPage::new());
        let mut handle = poller(Arc::clone(&source), Arc::clone(&page)).start_period_update_job(
            JobId::new("1"),
            "#job",
            "#subjobs",
        );

        let outcome = handle.join().await.unwrap();

        assert_eq!(outcome, PollOutcome::Navigated(JOB_LIST_LOCATION.to_string()));
        assert!(handle.is_finished());
        assert_eq!(source.calls().len(), 2);
        assert_eq!(page.locations(), vec![JOB_LIST_LOCATION.to_string()]);
        assert_eq!(page.history("#job").len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_interrupts_in_flight_request() {
        let source = Arc::new(ScriptedSource::new(Duration::from_secs(60)));
        let page = Arc::new(MemoryPage::new());
        let mut handle = poller(Arc::clone(&source), Arc::clone(&page)).start_period_update_job(
            JobId::new("1"),
            "#job",
            "#subjobs",
        );

        time::sleep(Duration::from_millis(100)).await;
        let stopped_at = Instant::now();
        handle.stop();
        assert_eq!(handle.join().await.unwrap(), PollOutcome::Stopped);

        assert!(Instant::now() - stopped_at < Duration::from_secs(1));
        assert!(page.body("#job").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_polling() {
        let source = Arc::new(ScriptedSource::new(Duration::ZERO));
        let page = Arc::new(MemoryPage::new());
        let handle = poller(Arc::clone(&source), page).start_period_update_jobs();

        time::sleep(Duration::from_millis(100)).await;
        drop(handle);
        time::sleep(Duration::from_millis(10_000)).await;

        assert_eq!(source.calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_detail_mode_keeps_polling_after_render_failures() {
        let source = Arc::new(ScriptedSource::new(Duration::ZERO));
        let page = Arc::new(FlakyPage::rejecting_bodies());
        let mut handle = StatusPoller::new(
            Arc::clone(&source) as Arc<dyn JobSource>,
            Arc::clone(&page) as Arc<dyn Page>,
            DEFAULT_POLL_INTERVAL,
        )
        .start_period_update_job(JobId::new("1"), "#job", "#subjobs");

        time::sleep(Duration::from_millis(4100)).await;
        handle.stop();
        assert_eq!(handle.join().await.unwrap(), PollOutcome::Stopped);

        assert_eq!(offsets(&source.calls()), vec![0, 2000, 4000]);
        assert!(page.inner.body("#job").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_navigation_is_retried_next_cycle() {
        let source = Arc::new(
            ScriptedSource::new(Duration::ZERO).with_details(vec![Ok(None), Ok(None)]),
        );
        let page = Arc::new(FlakyPage::rejecting_navigations(1));
        let mut handle = StatusPoller::new(
            Arc::clone(&source) as Arc<dyn JobSource>,
            Arc::clone(&page) as Arc<dyn Page>,
            DEFAULT_POLL_INTERVAL,
        )
        .start_period_update_job(JobId::new("1"), "#job", "#subjobs");

        let outcome = handle.join().await.unwrap();

        assert_eq!(outcome, PollOutcome::Navigated(JOB_LIST_LOCATION.to_string()));
        assert_eq!(offsets(&source.calls()), vec![0, 2000]);
        assert_eq!(page.attempted_navigations(), 2);
        assert_eq!(page.inner.locations(), vec![JOB_LIST_LOCATION.to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_list_mode_keeps_polling_after_failures() {
        let source = Arc::new(ScriptedSource::new(Duration::ZERO).with_failing_lists());
        let page = Arc::new(MemoryPage::new());
        let mut handle = poller(Arc::clone(&source), Arc::clone(&page)).start_period_update_jobs();

        time::sleep(Duration::from_millis(4100)).await;
        handle.stop();
        assert_eq!(handle.join().await.unwrap(), PollOutcome::Stopped);

        let calls = source.calls();
        let active: Vec<_> = calls.iter().filter(|(_, c)| c == "list").cloned().collect();
        assert_eq!(offsets(&active), vec![0, 2000, 4000]);
        assert_eq!(calls.len(), 6);
        assert!(page.body(ACTIVE_JOBS_CONTAINER).is_none());
        assert!(page.body(COMPLETED_JOBS_CONTAINER).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_list_requests_overlap_one_pair_per_cycle() {
        // Each request takes longer than the interval
        let source = Arc::new(ScriptedSource::new(Duration::from_millis(3000)));
        let page = Arc::new(MemoryPage::new());
        let mut handle = poller(Arc::clone(&source), Arc::clone(&page)).start_period_update_jobs();

        time::sleep(Duration::from_millis(4100)).await;
        handle.stop();
        assert_eq!(handle.join().await.unwrap(), PollOutcome::Stopped);

        let calls = source.calls();
        let active: Vec<_> = calls.iter().filter(|(_, c)| c == "list").cloned().collect();
        let completed: Vec<_> = calls
            .iter()
            .filter(|(_, c)| c == "list?inactive=1")
            .cloned()
            .collect();
        assert_eq!(offsets(&active), vec![0, 2000, 4000]);
        assert_eq!(offsets(&completed), vec![0, 2000, 4000]);

        // Only the request issued at 0 ms had answered (at 3000 ms) before the stop
        assert_eq!(page.history(ACTIVE_JOBS_CONTAINER).len(), 1);
        assert_eq!(page.history(COMPLETED_JOBS_CONTAINER).len(), 1);
    }
}
