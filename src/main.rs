//! merge - nag your team about one of your open merge requests

mod cli;

use clap::Parser;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "merge", version)]
#[command(about = "Pick one of your open GitLab merge requests and post a nag about it to Slack")]
#[command(
    long_about = "Pick one of your open GitLab merge requests and post a nag about it to Slack.\n\n\
                  Reads configuration from ~/.merge/config.yaml."
)]
struct Cli {}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let _cli = Cli::parse();
    cli::run().await
}
