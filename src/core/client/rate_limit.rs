use chrono::{DateTime, TimeZone, Utc};
use reqwest::header::HeaderMap;

use super::constants::{
    RATE_LIMIT_LIMIT_HEADER, RATE_LIMIT_REMAINING_HEADER, RATE_LIMIT_RESET_HEADER,
};

/// Rate-limit values reported by the most recent response.
///
/// All fields are empty strings when the response carried no rate-limit headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed in the current window.
    pub limit: String,
    /// Requests left in the current window.
    pub remaining: String,
    /// When the window resets, as reported by the server (Unix seconds).
    pub reset: String,
}

impl RateLimit {
    /// Reads the snapshot from response headers.
    ///
    /// Presence is keyed on the limit header: without it, every field is reset to empty.
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        if !headers.contains_key(RATE_LIMIT_LIMIT_HEADER) {
            return Self::default();
        }
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string()
        };
        Self {
            limit: read(RATE_LIMIT_LIMIT_HEADER),
            remaining: read(RATE_LIMIT_REMAINING_HEADER),
            reset: read(RATE_LIMIT_RESET_HEADER),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.limit.is_empty() && self.remaining.is_empty() && self.reset.is_empty()
    }

    /// The reset instant, when `reset` holds Unix seconds.
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        let secs = self.reset.trim().parse::<i64>().ok()?;
        Utc.timestamp_opt(secs, 0).single()
    }
}
