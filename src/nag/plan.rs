//! Candidate planning - pure functions over fetched merge requests
//!
//! No I/O happens here: per-upstream results go in, the ranked list the
//! picker shows comes out.

use crate::types::MergeRequest;
use std::collections::HashSet;

/// Title prefixes (lowercase) that mark a merge request as a draft
pub const DRAFT_PREFIXES: [&str; 4] = ["draft:", "draft ", "wip:", "wip "];

/// Check whether a title marks its MR as a draft
///
/// Case-insensitive, ignoring leading whitespace.
pub fn is_draft_title(title: &str) -> bool {
    let title = title.trim_start().to_lowercase();
    DRAFT_PREFIXES.iter().any(|prefix| title.starts_with(prefix))
}

/// Merge per-upstream results into the list offered to the user
///
/// 1. Concatenate in upstream order
/// 2. Drop drafts
/// 3. Stable sort by `updated_at`, newest first
/// 4. Drop repeated `web_url`s, keeping the first (newest) occurrence
/// 5. Keep at most `picker_limit` entries
pub fn aggregate(per_upstream: Vec<Vec<MergeRequest>>, picker_limit: usize) -> Vec<MergeRequest> {
    let mut candidates: Vec<MergeRequest> = per_upstream
        .into_iter()
        .flatten()
        .filter(|mr| !is_draft_title(&mr.title))
        .collect();

    // sort_by is stable, so equal timestamps keep input order
    candidates.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    let mut seen = HashSet::new();
    candidates.retain(|mr| seen.insert(mr.web_url.clone()));

    candidates.truncate(picker_limit);
    candidates
}
