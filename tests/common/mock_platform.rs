//! Mock merge request source for testing

use async_trait::async_trait;
use merge_nag::error::{Error, Result};
use merge_nag::platform::MergeRequestSource;
use merge_nag::types::{MergeRequest, Upstream};
use std::sync::{Arc, Mutex};

/// Shared record of `fetch_recent` hard limits
pub type CallLog = Arc<Mutex<Vec<usize>>>;

/// Mock source with a canned answer
///
/// Features:
/// - Fixed list or injected error for `fetch_recent`
/// - Call tracking (the `hard_limit` of each call)
pub struct MockSource {
    upstream: Upstream,
    mrs: Vec<MergeRequest>,
    error: Option<String>,
    fetch_calls: CallLog,
}

impl MockSource {
    /// Source answering with `mrs`
    pub fn returning(upstream: Upstream, mrs: Vec<MergeRequest>) -> Self {
        Self {
            upstream,
            mrs,
            error: None,
            fetch_calls: Arc::default(),
        }
    }

    /// Source failing every request with `msg`
    pub fn failing(upstream: Upstream, msg: &str) -> Self {
        Self {
            upstream,
            mrs: Vec::new(),
            error: Some(msg.to_string()),
            fetch_calls: Arc::default(),
        }
    }

    /// Boxed, ready for a source slice
    pub fn boxed(self) -> Box<dyn MergeRequestSource> {
        Box::new(self)
    }

    /// Handle to the call record that survives boxing
    pub fn call_log(&self) -> CallLog {
        Arc::clone(&self.fetch_calls)
    }
}

#[async_trait]
impl MergeRequestSource for MockSource {
    async fn fetch_recent(&self, hard_limit: usize) -> Result<Vec<MergeRequest>> {
        self.fetch_calls.lock().unwrap().push(hard_limit);
        match &self.error {
            Some(msg) => Err(Error::GitLabApi(msg.clone())),
            None => Ok(self.mrs.clone()),
        }
    }

    async fn fetch_latest(&self) -> Result<MergeRequest> {
        match &self.error {
            Some(msg) => Err(Error::GitLabApi(msg.clone())),
            None => self
                .mrs
                .first()
                .cloned()
                .ok_or_else(|| Error::GitLabApi("no merge requests found".to_string())),
        }
    }

    fn upstream(&self) -> &Upstream {
        &self.upstream
    }
}
