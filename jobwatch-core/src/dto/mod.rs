//! Data Transfer Objects for the jobs API
//!
//! Envelopes wrapping the domain types exactly as they appear on the wire.

pub mod job;
