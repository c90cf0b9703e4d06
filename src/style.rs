//! Terminal styling helpers

use indicatif::ProgressStyle;
use owo_colors::OwoColorize;
use supports_hyperlinks::Stream;
use terminal_link::Link;

/// Check mark used in completion messages
pub const CHECK: &str = "✓";

/// Semantic styles for CLI output
pub trait Stylize {
    /// De-emphasized text
    fn muted(&self) -> String;
    /// Bold text
    fn emphasis(&self) -> String;
    /// Highlighted values (titles, hosts)
    fn accent(&self) -> String;
    /// Positive outcome
    fn success(&self) -> String;
    /// Something went wrong but we carried on
    fn warn(&self) -> String;
    /// Hard failure
    fn error(&self) -> String;
}

impl<T: std::fmt::Display> Stylize for T {
    fn muted(&self) -> String {
        self.dimmed().to_string()
    }

    fn emphasis(&self) -> String {
        self.bold().to_string()
    }

    fn accent(&self) -> String {
        self.cyan().to_string()
    }

    fn success(&self) -> String {
        self.green().to_string()
    }

    fn warn(&self) -> String {
        self.yellow().to_string()
    }

    fn error(&self) -> String {
        self.red().to_string()
    }
}

/// Green check mark
pub fn check() -> String {
    CHECK.success()
}

/// Spinner style for the fetch phase
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
}

/// Render a URL as a clickable link when stdout supports OSC 8
pub fn url_display(url: &str) -> String {
    if supports_hyperlinks::on(Stream::Stdout) {
        Link::new(url, url).to_string()
    } else {
        url.to_string()
    }
}
