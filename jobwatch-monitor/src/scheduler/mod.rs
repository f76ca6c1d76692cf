//! Scheduler layer
//!
//! Drives the poll cycles: fetch from a job source, render, hand the
//! fragments to a page, wait, repeat. List mode polls both job subsets
//! forever; detail mode polls one job until it disappears.

pub mod poller;
pub mod source;

pub use poller::{
    ACTIVE_JOBS_CONTAINER, COMPLETED_JOBS_CONTAINER, DEFAULT_POLL_INTERVAL, DetailCycle,
    JOB_LIST_LOCATION, PollHandle, PollOutcome, StatusPoller, update_job, update_jobs,
};
pub use source::JobSource;
