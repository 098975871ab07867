//! Timestamp formatting
//!
//! Records carry a single timestamp format: ISO 8601 with millisecond
//! precision and a trailing `Z` UTC designator, widely supported by log
//! aggregation systems (Elasticsearch, Splunk, Loki, etc.).

use chrono::{DateTime, Utc};

/// Format an instant as `2018-01-02T03:04:05.678Z`.
#[must_use]
pub fn iso8601_millis(datetime: &DateTime<Utc>) -> String {
    datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
