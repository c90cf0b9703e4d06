//! Notification text

use crate::types::{ChatPayload, MergeRequest};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::time::{SystemTime, UNIX_EPOCH};

/// Phrase used when no nag phrases are configured
pub const FALLBACK_PHRASE: &str = "Merge please!";

/// Chat emoji shortcode leading every message
const EMOJI: &str = ":gitlab:";

/// Builds chat payloads, picking a random nag phrase for each
pub struct NagFormatter {
    rng: StdRng,
}

impl NagFormatter {
    /// Seed from the wall clock; runs are not reproducible
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        // Fold the 128-bit nanosecond count into a 64-bit seed.
        #[allow(clippy::cast_possible_truncation)]
        let seed = (nanos as u64) ^ ((nanos >> 64) as u64);
        Self::with_seed(seed)
    }

    /// Deterministic formatter for tests
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build the payload announcing `mr`
    pub fn format(&mut self, mr: &MergeRequest, phrases: &[String]) -> ChatPayload {
        let phrase = choose_phrase(phrases, &mut self.rng);
        ChatPayload {
            content: format_content(&phrase, mr),
        }
    }
}

/// Pick one phrase uniformly at random, trimmed; fall back when empty
pub fn choose_phrase<R: rand::Rng + ?Sized>(phrases: &[String], rng: &mut R) -> String {
    phrases
        .choose(rng)
        .map_or_else(|| FALLBACK_PHRASE.to_string(), |p| p.trim().to_string())
}

/// Three-line message body: emoji and phrase, title, URL
pub fn format_content(phrase: &str, mr: &MergeRequest) -> String {
    format!("{EMOJI} {phrase}\n{}\n{}", mr.title, mr.web_url)
}
