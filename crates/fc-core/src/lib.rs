//! DreamChain and PersonaForge domain logic.
//!
//! DreamChain is a dream journal with tag statistics and a canned analysis
//! view. PersonaForge builds a mock "digital twin" from simulated uploads and
//! chats with canned replies. Each page is an explicit tab state machine.
//!
//! Zero I/O: timing, persistence and presentation live in other crates.

pub mod aggregate;
pub mod chat;
pub mod constants;
pub mod dream_chain;
pub mod entry;
pub mod filter;
pub mod persona_forge;
pub mod responder;
pub mod route;
pub mod settings;
pub mod time;
pub mod upload;
pub mod validation;
pub mod workflow;

pub use aggregate::{Insights, PatternReport, TagCount, TagField, tag_counts, top_tags};
pub use chat::{ChatLog, ChatMessage, GREETING, Role};
pub use constants::{CHAT_REPLY_DELAY_MS, TOP_TAGS, TRANSCRIPTION_DELAY_MS};
pub use dream_chain::DreamChain;
pub use entry::{DreamDraft, DreamEntry, Journal};
pub use filter::{empty_listing_hint, filter_entries};
pub use persona_forge::{PERSONA_TRAITS, PersonaForge};
pub use responder::{CannedResponder, FixedTranscriber, Responder, Transcriber};
pub use route::Route;
pub use settings::{FeatureFlags, SettingsForm, Theme};
pub use time::{display_date, today_iso_date};
pub use upload::{FileKind, UploadedFile};
pub use validation::{FieldError, ValidationErrors, validate_dream, validate_settings};
pub use workflow::{DreamTab, Guard, PersonaTab, Transition, Workflow};
