//! Jobwatch Monitor
//!
//! Keeps job status tables up to date by polling the jobs API.
//!
//! Architecture:
//! - Render: Pure functions turning jobs into HTML table rows
//! - Page: Where rendered fragments go (memory, a directory, the terminal)
//! - Scheduler: The status poller driving list and detail mode
//! - Configuration: Connection and cadence settings
//!
//! Every poll cycle fully replaces the previous render; nothing is diffed and
//! nothing is cached between cycles.

pub mod config;
pub mod page;
pub mod render;
pub mod scheduler;
