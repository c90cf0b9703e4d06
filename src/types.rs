//! Core types for merge-nag

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Timestamp layout used wherever a merge request is shown to the user
/// (RFC 822 style, e.g. `02 Jan 24 10:00 UTC`).
pub const TIMESTAMP_FORMAT: &str = "%d %b %y %H:%M %Z";

/// A merge request summary as returned by the GitLab list endpoint
///
/// Unknown fields in the API response are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MergeRequest {
    /// MR title
    pub title: String,
    /// Web URL for the MR
    pub web_url: String,
    /// When the MR was last updated
    pub updated_at: DateTime<Utc>,
}

impl MergeRequest {
    /// Human-readable `updated_at`
    pub fn updated_display(&self) -> String {
        format_timestamp(&self.updated_at)
    }

    /// Single-line label used by the picker
    ///
    /// Control characters in the title become spaces.
    pub fn picker_label(&self) -> String {
        let title: String = self
            .title
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        format!("{title} (Updated: {})", self.updated_display())
    }
}

/// Format a timestamp the way the picker and confirmation show it
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// One configured GitLab API endpoint and its credential
#[derive(Clone, PartialEq, Eq)]
pub struct Upstream {
    /// API base, e.g. `https://gitlab.example.com/api/v4`
    pub api: Url,
    /// Personal access token sent as `PRIVATE-TOKEN`
    pub token: String,
}

impl Upstream {
    /// Host name for logging (never the token)
    pub fn host(&self) -> &str {
        self.api.host_str().unwrap_or("<unknown>")
    }
}

impl std::fmt::Debug for Upstream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Upstream")
            .field("api", &self.api.as_str())
            .field("token", &"<redacted>")
            .finish()
    }
}

/// JSON body posted to the chat webhook
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatPayload {
    /// Formatted notification text
    pub content: String,
}
