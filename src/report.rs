/*!
 * Structured output records.
 *
 * One invocation produces exactly one record on stdout: either a full
 * success record with summary, tags and metrics, or an error record with a
 * single message. Records are pretty-printed UTF-8 JSON; non-ASCII
 * characters are preserved literally.
 */

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::metrics::Metrics;

/// Successful summarization result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    /// The assembled extractive summary
    pub summary: String,

    /// Ranked topical tags, highest frequency first
    pub tags: Vec<String>,

    /// Size metrics for the run
    pub metrics: Metrics,
}

/// Error record emitted on usage or read failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Human-readable error message
    pub error: String,
}

impl SummaryReport {
    /// Render the record as pretty-printed JSON
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize summary report")
    }
}

impl ErrorReport {
    /// Create an error record from any displayable error
    pub fn new(error: impl std::fmt::Display) -> Self {
        Self {
            error: error.to_string(),
        }
    }

    /// Render the record as pretty-printed JSON
    pub fn to_pretty_json(&self) -> String {
        // A record this small cannot fail to serialize
        serde_json::to_string_pretty(self).unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", self.error))
    }
}
