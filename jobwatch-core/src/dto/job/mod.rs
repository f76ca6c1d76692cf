//! Job response envelopes

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::job::Job;

/// Body of `GET /api/jobs[?inactive=1]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
}

/// Body of `GET /api/jobs/{id}`
///
/// The server answers `{"job": {}}` once a job no longer exists. That, a
/// `null` job and a missing `job` key all decode to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetailResponse {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub job: Option<Job>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<Job>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Object(map) if map.is_empty() => Ok(None),
        other => serde_json::from_value(other).map(Some).map_err(D::Error::custom),
    }
}
