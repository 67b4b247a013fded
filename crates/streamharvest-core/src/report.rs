//! Run report serialization
//!
//! The JSON document consumed by the web player alongside the playlists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::StreamRecord;

/// Schema version stamped into every report
pub const REPORT_VERSION: &str = "3.0";

/// Outcome of a run as reported to consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Success,
    Error,
}

/// JSON document describing one aggregation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamReport {
    pub version: String,
    pub last_updated: DateTime<Utc>,
    pub sources: Vec<StreamRecord>,
    pub total_sources: usize,
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl StreamReport {
    /// Builds the report for a finished run
    ///
    /// The run is `success` as soon as any records exist, fallbacks
    /// included; an empty collection is the only error shape.
    pub fn new(streams: Vec<StreamRecord>) -> Self {
        let (status, error_message) = if streams.is_empty() {
            (
                ReportStatus::Error,
                Some("no streams discovered from any source".to_string()),
            )
        } else {
            (ReportStatus::Success, None)
        };

        Self {
            version: REPORT_VERSION.to_string(),
            last_updated: Utc::now(),
            total_sources: streams.len(),
            sources: streams,
            status,
            error_message,
        }
    }
}
