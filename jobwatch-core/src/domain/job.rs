//! Job domain types

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::text::opaque;

/// Identifier of a job as reported by the server
///
/// The server may send ids as numbers or strings; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for JobId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        opaque(deserializer).map(JobId)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A unit of server-side work
///
/// List responses carry summaries only, so `subjob` is empty there. The
/// optional fields (`current`, `submitter`, `result`) are empty strings when
/// the server omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    #[serde(default, deserialize_with = "opaque")]
    pub description: String,
    #[serde(default, deserialize_with = "opaque")]
    pub status: String,
    #[serde(default, deserialize_with = "opaque")]
    pub statusinfo: String,
    #[serde(default, deserialize_with = "opaque")]
    pub created: String,
    #[serde(default, deserialize_with = "opaque")]
    pub current: String,
    #[serde(default, deserialize_with = "opaque")]
    pub submitter: String,
    #[serde(default, deserialize_with = "opaque")]
    pub result: String,
    #[serde(default)]
    pub subjob: Vec<SubJob>,
}

/// A step of a job, kept in server order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubJob {
    #[serde(default, deserialize_with = "opaque")]
    pub id: String,
    #[serde(default, deserialize_with = "opaque")]
    pub action: String,
    #[serde(default, deserialize_with = "opaque")]
    pub status: String,
    #[serde(default, deserialize_with = "opaque")]
    pub statusinfo: String,
    #[serde(default, deserialize_with = "opaque")]
    pub result: String,
    /// Arbitrary action arguments, shown as JSON
    #[serde(default)]
    pub args: serde_json::Value,
}

/// Which subset of jobs a list request asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobFilter {
    /// Jobs still queued or running
    Active,
    /// Jobs that have finished
    Completed,
}

impl JobFilter {
    /// Query string appended to the list endpoint
    pub fn query_suffix(&self) -> &'static str {
        match self {
            JobFilter::Active => "",
            JobFilter::Completed => "?inactive=1",
        }
    }
}
