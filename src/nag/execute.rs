//! Fetch execution - effectful fan-out across upstreams
//!
//! Every configured source is queried concurrently. A failing upstream is
//! logged once and contributes nothing; it never aborts the run.

use crate::platform::MergeRequestSource;
use crate::types::MergeRequest;
use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, warn};

/// Progress hooks for the fetch phase
#[async_trait]
pub trait FetchProgress: Send + Sync {
    /// Called before any request is sent
    async fn on_fetch_start(&self, upstreams: usize);

    /// Called once every upstream has answered (or failed), before any
    /// per-upstream failure is logged
    async fn on_fetch_done(&self, fetched: usize, failed: usize);
}

/// Progress sink that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

#[async_trait]
impl FetchProgress for NoProgress {
    async fn on_fetch_start(&self, _upstreams: usize) {}

    async fn on_fetch_done(&self, _fetched: usize, _failed: usize) {}
}

/// Number of items to ask each upstream for, given the picker size
///
/// Wide enough that draft filtering rarely starves the picker. The GitLab
/// page cap still bounds each upstream to 100 items.
pub const fn fetch_limit(picker_limit: usize) -> usize {
    let scaled = picker_limit.saturating_mul(4);
    if scaled > 20 { scaled } else { 20 }
}

/// Query every source and collect results in source order
///
/// The returned vector has exactly one entry per source; failed sources
/// yield an empty entry.
pub async fn fetch_all(
    sources: &[Box<dyn MergeRequestSource>],
    hard_limit: usize,
    progress: &dyn FetchProgress,
) -> Vec<Vec<MergeRequest>> {
    progress.on_fetch_start(sources.len()).await;

    let results = join_all(sources.iter().map(|s| s.fetch_recent(hard_limit))).await;

    let mut failures = Vec::new();
    let per_upstream: Vec<Vec<MergeRequest>> = sources
        .iter()
        .zip(results)
        .map(|(source, result)| match result {
            Ok(mrs) => {
                debug!(host = source.upstream().host(), count = mrs.len(), "upstream answered");
                mrs
            }
            Err(e) => {
                failures.push((source.upstream().host(), e));
                Vec::new()
            }
        })
        .collect();

    let fetched = per_upstream.iter().map(Vec::len).sum();
    progress.on_fetch_done(fetched, failures.len()).await;

    // Progress output is finished by now, so warnings land on a clean line.
    for (host, e) in failures {
        warn!(host, error = %e, "failed to fetch merge requests");
    }
    per_upstream
}
