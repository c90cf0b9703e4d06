//! Chat notifications
//!
//! [`NagFormatter`] turns a merge request into a [`ChatPayload`];
//! a [`Notifier`] delivers it.

mod message;
mod webhook;

pub use message::{FALLBACK_PHRASE, NagFormatter, choose_phrase, format_content};
pub use webhook::{WebhookNotifier, classify_status};

use crate::error::Result;
use crate::types::ChatPayload;
use async_trait::async_trait;

/// Delivers a chat payload
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send the payload once; no retries
    async fn send(&self, payload: &ChatPayload) -> Result<()>;
}
