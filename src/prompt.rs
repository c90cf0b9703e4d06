//! Interactive selection and confirmation

use crate::error::Result;
use crate::style::{Stylize, url_display};
use crate::types::MergeRequest;
use dialoguer::Select;
use std::io::{BufRead, Write};
use tracing::debug;

/// Chooses one merge request from a candidate list
pub trait Picker {
    /// Return the index of the chosen candidate, or `None` if the user
    /// cancelled. Must not reorder or modify `candidates`.
    fn pick(&self, candidates: &[MergeRequest]) -> Option<usize>;
}

/// Prompt label shown above the candidate list
const PICKER_PROMPT: &str = "Select a Merge Request";

/// Arrow-key picker on the controlling terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPicker;

impl Picker for TerminalPicker {
    fn pick(&self, candidates: &[MergeRequest]) -> Option<usize> {
        let items: Vec<String> = candidates.iter().map(MergeRequest::picker_label).collect();

        // Esc/q yields Ok(None); a closed or missing terminal yields Err.
        match Select::new()
            .with_prompt(PICKER_PROMPT)
            .items(&items)
            .default(0)
            .interact_opt()
        {
            Ok(choice) => choice,
            Err(e) => {
                debug!(error = %e, "picker cancelled");
                None
            }
        }
    }
}

/// Interpret a confirmation answer: only `y` (any case, surrounding
/// whitespace ignored) means yes.
pub fn parse_confirmation(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Print a summary of `mr` and read one line of confirmation from `input`
///
/// End of input and undecodable bytes both count as "no".
pub fn confirm(mr: &MergeRequest, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<bool> {
    writeln!(output, "{} {}", "Latest MR:".emphasis(), mr.title)?;
    writeln!(output, "{} {}", "URL:".emphasis(), url_display(&mr.web_url))?;
    writeln!(output, "{} {}", "Updated:".emphasis(), mr.updated_display())?;
    write!(output, "Confirm send to Slack? (y/n): ")?;
    output.flush()?;

    let mut answer = Vec::new();
    input.read_until(b'\n', &mut answer)?;
    Ok(parse_confirmation(&String::from_utf8_lossy(&answer)))
}
