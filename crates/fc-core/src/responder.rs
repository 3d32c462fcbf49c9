//! Mock reply generators.
//!
//! Call sites depend on the [`Responder`] and [`Transcriber`] traits, not on
//! the canned implementations, so a real generator can be dropped in later.
//! Neither trait knows about timing: the caller decides when a reply is
//! delivered (see [`Responder::latency`]).

use std::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::constants::{CHAT_REPLY_DELAY_MS, TRANSCRIPTION_DELAY_MS};
use crate::entry::DreamDraft;

/// The five canned digital-twin replies.
pub const CANNED_REPLIES: [&str; 5] = [
    "Based on your past conversations, I'd likely respond with a thoughtful question to learn more about this topic.",
    "Looking at your writing style, I'd probably respond with a mix of empathy and analytical insight here.",
    "I notice you typically approach topics like this with curiosity. I'd probably ask follow-up questions to understand the context better.",
    "Based on your data, I'd likely acknowledge your point and then offer a slightly different perspective to consider.",
    "Your communication style shows you value concise responses on technical topics like this, so I'd keep it brief but informative.",
];

pub const TRANSCRIBED_TITLE: &str = "Dream About Water";
pub const TRANSCRIBED_CONTENT: &str = "I was swimming in a clear blue ocean, and could see coral reefs below. There were colorful fish swimming around me, and I could breathe underwater. I felt peaceful and free.";

/// Produces the digital twin's reply to a chat message. Never fails.
pub trait Responder: Send {
    fn reply(&mut self, message: &str) -> String;

    /// How long the reply should appear to take.
    fn latency(&self) -> Duration {
        Duration::from_millis(CHAT_REPLY_DELAY_MS)
    }
}

/// Turns a voice recording into a filled-in dream form. Never fails.
pub trait Transcriber: Send {
    fn transcribe(&mut self) -> DreamDraft;

    fn latency(&self) -> Duration {
        Duration::from_millis(TRANSCRIPTION_DELAY_MS)
    }
}

/// Picks uniformly from [`CANNED_REPLIES`], ignoring the message.
pub struct CannedResponder<R> {
    rng: R,
    latency: Duration,
}

impl<R: Rng + Send> CannedResponder<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            latency: Duration::from_millis(CHAT_REPLY_DELAY_MS),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl<R: Rng + Send> Responder for CannedResponder<R> {
    fn reply(&mut self, _message: &str) -> String {
        CANNED_REPLIES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(CANNED_REPLIES[0])
            .to_string()
    }

    fn latency(&self) -> Duration {
        self.latency
    }
}

/// Always "hears" the same dream about water.
pub struct FixedTranscriber {
    latency: Duration,
}

impl FixedTranscriber {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(TRANSCRIPTION_DELAY_MS),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for FixedTranscriber {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcriber for FixedTranscriber {
    fn transcribe(&mut self) -> DreamDraft {
        DreamDraft::new(TRANSCRIBED_TITLE, TRANSCRIBED_CONTENT)
    }

    fn latency(&self) -> Duration {
        self.latency
    }
}
