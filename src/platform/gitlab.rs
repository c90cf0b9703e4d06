//! GitLab merge request source

use crate::error::{Error, Result};
use crate::platform::MergeRequestSource;
use crate::types::{MergeRequest, Upstream};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Largest `per_page` GitLab accepts
pub const MAX_PER_PAGE: usize = 100;

/// GitLab client for one upstream, using reqwest
pub struct GitLabClient {
    client: Client,
    upstream: Upstream,
}

impl GitLabClient {
    /// Create a new GitLab client
    pub fn new(upstream: Upstream) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::GitLabApi(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, upstream })
    }

    fn merge_requests_url(&self) -> String {
        format!(
            "{}/merge_requests",
            self.upstream.api.as_str().trim_end_matches('/')
        )
    }

    async fn list(&self, query: &[(&str, String)]) -> Result<Vec<MergeRequest>> {
        let mrs: Vec<MergeRequest> = self
            .client
            .get(self.merge_requests_url())
            .header("PRIVATE-TOKEN", &self.upstream.token)
            .query(query)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::GitLabApi(e.to_string()))?
            .json()
            .await?;
        Ok(mrs)
    }
}

/// Page size requested for a given hard limit: double it for draft
/// headroom, capped at GitLab's maximum.
///
/// Only one page is read, so an upstream contributes at most
/// [`MAX_PER_PAGE`] merge requests.
pub(crate) fn page_size(hard_limit: usize) -> usize {
    hard_limit.saturating_mul(2).clamp(1, MAX_PER_PAGE)
}

#[async_trait]
impl MergeRequestSource for GitLabClient {
    async fn fetch_recent(&self, hard_limit: usize) -> Result<Vec<MergeRequest>> {
        let per_page = page_size(hard_limit);
        debug!(host = self.upstream.host(), per_page, "listing open MRs");

        let mrs = self
            .list(&[
                ("scope", "created_by_me".to_string()),
                ("state", "opened".to_string()),
                ("order_by", "updated_at".to_string()),
                ("sort", "desc".to_string()),
                ("per_page", per_page.to_string()),
            ])
            .await?;

        debug!(host = self.upstream.host(), count = mrs.len(), "listed open MRs");
        Ok(mrs)
    }

    async fn fetch_latest(&self) -> Result<MergeRequest> {
        debug!(host = self.upstream.host(), "fetching latest MR");

        // No state filter: the latest MR may already be merged or closed.
        let mrs = self
            .list(&[
                ("scope", "created_by_me".to_string()),
                ("order_by", "updated_at".to_string()),
                ("sort", "desc".to_string()),
                ("per_page", "1".to_string()),
            ])
            .await?;

        mrs.into_iter()
            .next()
            .ok_or_else(|| Error::GitLabApi("no merge requests found".to_string()))
    }

    fn upstream(&self) -> &Upstream {
        &self.upstream
    }
}
