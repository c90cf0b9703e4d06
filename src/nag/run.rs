//! One pick-and-post run
//!
//! `FetchAll → Aggregate → Pick → Confirm → Dispatch`. Config loading
//! happens before this, in the binary.

use crate::error::{Error, Result};
use crate::nag::execute::{FetchProgress, fetch_all, fetch_limit};
use crate::nag::plan::aggregate;
use crate::notify::{NagFormatter, Notifier};
use crate::platform::MergeRequestSource;
use crate::prompt::{Picker, confirm};
use std::io::{BufRead, Write};
use tracing::debug;

/// How a run ended without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The notification was delivered
    Sent,
    /// The user cancelled at the picker or declined to confirm
    Aborted,
}

impl Outcome {
    /// Message shown to the user
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Sent => "Sent to Slack!",
            Self::Aborted => "Aborted.",
        }
    }
}

/// Collaborators for a run
pub struct NagRun<'a> {
    /// One source per configured upstream, in config order
    pub sources: &'a [Box<dyn MergeRequestSource>],
    /// Chooses the MR to nag about
    pub picker: &'a dyn Picker,
    /// Delivers the notification
    pub notifier: &'a dyn Notifier,
    /// Fetch-phase progress display
    pub progress: &'a dyn FetchProgress,
    /// Configured nag phrases
    pub phrases: &'a [String],
    /// Maximum candidates offered, at least 1
    pub picker_limit: usize,
}

/// Run the pipeline once
///
/// `input` feeds the confirmation prompt and `output` receives the
/// confirmation summary.
///
/// # Errors
/// - [`Error::NoCandidates`] when no upstream yields a non-draft MR
/// - [`Error::Webhook`] when delivery fails
/// - [`Error::Io`] when the prompt cannot be read or written
#[allow(clippy::future_not_send)]
pub async fn run_nag(
    run: &NagRun<'_>,
    formatter: &mut NagFormatter,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<Outcome> {
    let picker_limit = run.picker_limit.max(1);

    let per_upstream = fetch_all(run.sources, fetch_limit(picker_limit), run.progress).await;
    let candidates = aggregate(per_upstream, picker_limit);
    debug!(count = candidates.len(), "aggregated candidates");

    if candidates.is_empty() {
        return Err(Error::NoCandidates);
    }

    let Some(index) = run.picker.pick(&candidates) else {
        return Ok(Outcome::Aborted);
    };
    let picked = candidates
        .get(index)
        .ok_or_else(|| Error::Internal(format!("picker returned out-of-range index {index}")))?;

    if !confirm(picked, input, output)? {
        return Ok(Outcome::Aborted);
    }

    let payload = formatter.format(picked, run.phrases);
    run.notifier.send(&payload).await?;
    Ok(Outcome::Sent)
}
