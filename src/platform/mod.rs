//! Merge request sources
//!
//! Provides a common interface for listing the current user's merge requests
//! on a forge instance.

mod gitlab;

pub use gitlab::{GitLabClient, MAX_PER_PAGE};

use crate::error::Result;
use crate::types::{MergeRequest, Upstream};
use async_trait::async_trait;

/// Source of merge requests authored by the authenticated user
///
/// One implementation talks to a single upstream. The pipeline fans out
/// over a slice of these and never shares mutable state between them.
#[async_trait]
pub trait MergeRequestSource: Send + Sync {
    /// List open MRs, most recently updated first
    ///
    /// `hard_limit` bounds how many items the caller wants to keep; sources
    /// may request more to leave headroom for draft filtering.
    async fn fetch_recent(&self, hard_limit: usize) -> Result<Vec<MergeRequest>>;

    /// The single most recently updated MR, in any state
    async fn fetch_latest(&self) -> Result<MergeRequest>;

    /// The upstream this source queries
    fn upstream(&self) -> &Upstream;
}
