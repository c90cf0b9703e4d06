//! CLI wiring: real collaborators for one run

mod progress;

use anstream::{eprintln, println};
use merge_nag::config::{config_path, load_config};
use merge_nag::error::Result;
use merge_nag::nag::{NagRun, Outcome, run_nag};
use merge_nag::notify::{NagFormatter, WebhookNotifier};
use merge_nag::platform::{GitLabClient, MergeRequestSource};
use merge_nag::prompt::TerminalPicker;
use merge_nag::style::Stylize;
use progress::CliProgress;
use std::io::BufReader;
use std::process::ExitCode;

/// Run once and map the result to the process exit code
#[allow(clippy::future_not_send)]
pub async fn run() -> ExitCode {
    match run_with_config().await {
        Ok(outcome) => {
            match outcome {
                Outcome::Sent => println!("{}", outcome.message().success()),
                Outcome::Aborted => println!("{}", outcome.message().muted()),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.to_string().error());
            ExitCode::from(e.exit_code())
        }
    }
}

#[allow(clippy::future_not_send)]
async fn run_with_config() -> Result<Outcome> {
    let path = config_path()?;
    let config = load_config(&path)?;

    let sources = config
        .upstreams
        .iter()
        .cloned()
        .map(|upstream| {
            GitLabClient::new(upstream).map(|c| Box::new(c) as Box<dyn MergeRequestSource>)
        })
        .collect::<Result<Vec<_>>>()?;
    let notifier = WebhookNotifier::new(config.webhook_url.clone())?;
    let progress = CliProgress::new();

    let run = NagRun {
        sources: &sources,
        picker: &TerminalPicker,
        notifier: &notifier,
        progress: &progress,
        phrases: &config.phrases,
        picker_limit: config.picker_limit,
    };

    let mut formatter = NagFormatter::from_clock();
    let mut input = BufReader::new(std::io::stdin());
    let mut output = anstream::stdout();
    run_nag(&run, &mut formatter, &mut input, &mut output).await
}
