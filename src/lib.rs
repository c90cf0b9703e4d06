//! merge-nag: pick one of your open merge requests and nag a chat channel
//! about it.
//!
//! The library holds the whole pipeline so it can be driven with mock
//! collaborators; the `merge` binary only wires real ones together.

pub mod config;
pub mod error;
pub mod nag;
pub mod notify;
pub mod platform;
pub mod prompt;
pub mod style;
pub mod types;
