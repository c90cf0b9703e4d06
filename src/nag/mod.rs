//! Pick-and-post engine
//!
//! Three-phase pattern:
//! 1. Gather - fetch MRs from every upstream (effectful, fan-out)
//! 2. Plan - filter drafts, rank and truncate (pure, testable)
//! 3. Execute - pick, confirm, notify (interactive, effectful)

mod execute;
mod plan;
mod run;

pub use execute::{FetchProgress, NoProgress, fetch_all, fetch_limit};
pub use plan::{DRAFT_PREFIXES, aggregate, is_draft_title};
pub use run::{NagRun, Outcome, run_nag};
