//! Core domain types
//!
//! This module contains the structures the jobs API reports. The server owns
//! them; the monitor only holds a transient copy for the duration of one poll
//! cycle before rendering it.

pub mod job;
pub mod text;
