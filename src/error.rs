//! Error types for merge-nag

use std::path::PathBuf;
use thiserror::Error;

/// Message shown when no upstream produced a usable merge request.
pub const NO_CANDIDATES_MESSAGE: &str =
    "No merge requests found on any GitLab instance. Check your config.yaml and network access.";

/// Errors produced while picking and posting a merge request
#[derive(Debug, Error)]
pub enum Error {
    /// Config file missing, unreadable, malformed or incomplete
    #[error("Failed to load config at {}: {reason}", .path.display())]
    Config {
        /// Path that was read
        path: PathBuf,
        /// What went wrong
        reason: String,
    },

    /// GitLab API returned an error or unexpected data
    #[error("GitLab API error: {0}")]
    GitLabApi(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Nothing left to pick after aggregation
    #[error("{}", NO_CANDIDATES_MESSAGE)]
    NoCandidates,

    /// Chat webhook rejected the message or was unreachable
    #[error("Failed to send to Slack: {0}")]
    Webhook(String),

    /// Reading stdin or writing stdout failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal invariant violated
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Process exit code for this error
    ///
    /// - `1`: configuration problems (and anything unexpected)
    /// - `2`: no merge requests to pick from
    /// - `3`: the webhook could not be notified
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NoCandidates => 2,
            Self::Webhook(_) => 3,
            _ => 1,
        }
    }
}

/// Result type alias for merge-nag
pub type Result<T> = std::result::Result<T, Error>;
