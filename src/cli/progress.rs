//! Spinner shown while upstreams are queried

use async_trait::async_trait;
use indicatif::ProgressBar;
use merge_nag::nag::FetchProgress;
use merge_nag::style::{Stylize, check, spinner_style};
use std::time::Duration;

/// Fetch progress rendered as an indicatif spinner on stderr
pub struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    /// Create a hidden spinner; it appears once fetching starts
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        Self { spinner }
    }
}

#[async_trait]
impl FetchProgress for CliProgress {
    async fn on_fetch_start(&self, upstreams: usize) {
        self.spinner.set_message(format!(
            "Fetching merge requests from {} GitLab instance(s)...",
            upstreams.accent()
        ));
        self.spinner.enable_steady_tick(Duration::from_millis(80));
    }

    async fn on_fetch_done(&self, fetched: usize, failed: usize) {
        let summary = if failed == 0 {
            format!("{} Fetched {} merge request(s)", check(), fetched.accent())
        } else {
            format!(
                "{} Fetched {} merge request(s), {} instance(s) failed",
                check(),
                fetched.accent(),
                failed.warn()
            )
        };
        self.spinner.finish_with_message(summary);
    }
}
