//! Mock notifier for testing

use async_trait::async_trait;
use merge_nag::error::{Error, Result};
use merge_nag::notify::Notifier;
use merge_nag::types::ChatPayload;
use std::sync::Mutex;

/// Notifier that records payloads instead of sending them
#[derive(Default)]
pub struct MockNotifier {
    sent: Mutex<Vec<ChatPayload>>,
    error: Mutex<Option<String>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `send` fail with a `Webhook` error
    pub fn fail_send(&self, msg: &str) {
        *self.error.lock().unwrap() = Some(msg.to_string());
    }

    /// Payloads passed to `send`, including failed attempts
    pub fn sent(&self) -> Vec<ChatPayload> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send(&self, payload: &ChatPayload) -> Result<()> {
        self.sent.lock().unwrap().push(payload.clone());
        match self.error.lock().unwrap().clone() {
            Some(msg) => Err(Error::Webhook(msg)),
            None => Ok(()),
        }
    }
}
