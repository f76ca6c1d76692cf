//! Jobwatch Core
//!
//! Core types shared by the jobwatch client and monitor.
//!
//! This crate contains:
//! - Domain types: Job, SubJob and the filters used to query them
//! - DTOs: Response envelopes returned by the jobs API

pub mod domain;
pub mod dto;
