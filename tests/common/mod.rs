//! Shared fixtures for merge-nag tests

#![allow(dead_code)]

mod mock_notify;
mod mock_platform;

pub use mock_notify::MockNotifier;
pub use mock_platform::{CallLog, MockSource};

use chrono::{DateTime, Utc};
use merge_nag::prompt::Picker;
use merge_nag::types::{MergeRequest, Upstream};
use std::sync::Mutex;
use url::Url;

/// Build an MR from an RFC 3339 timestamp
pub fn mr(title: &str, web_url: &str, updated_at: &str) -> MergeRequest {
    MergeRequest {
        title: title.to_string(),
        web_url: web_url.to_string(),
        updated_at: DateTime::parse_from_rfc3339(updated_at)
            .expect("valid RFC 3339 timestamp")
            .with_timezone(&Utc),
    }
}

/// Upstream pointing at a fake host
pub fn upstream(host: &str) -> Upstream {
    Upstream {
        api: Url::parse(&format!("https://{host}/api/v4")).expect("valid URL"),
        token: format!("token-for-{host}"),
    }
}

/// Picker returning a fixed answer and recording what it was shown
pub struct ScriptedPicker {
    choice: Option<usize>,
    shown: Mutex<Vec<Vec<MergeRequest>>>,
}

impl ScriptedPicker {
    /// Always choose `index`
    pub fn choosing(index: usize) -> Self {
        Self {
            choice: Some(index),
            shown: Mutex::new(Vec::new()),
        }
    }

    /// Always cancel
    pub fn cancelling() -> Self {
        Self {
            choice: None,
            shown: Mutex::new(Vec::new()),
        }
    }

    /// Candidate lists passed to `pick`, in call order
    pub fn shown(&self) -> Vec<Vec<MergeRequest>> {
        self.shown.lock().unwrap().clone()
    }

    /// Titles of the last candidate list shown
    pub fn last_titles(&self) -> Vec<String> {
        self.shown
            .lock()
            .unwrap()
            .last()
            .map(|list| list.iter().map(|m| m.title.clone()).collect())
            .unwrap_or_default()
    }
}

impl Picker for ScriptedPicker {
    fn pick(&self, candidates: &[MergeRequest]) -> Option<usize> {
        self.shown.lock().unwrap().push(candidates.to_vec());
        self.choice
    }
}
