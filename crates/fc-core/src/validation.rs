//! Form validation for the new-dream form and the settings form.
//!
//! Lengths are counted in UTF-16 code units, the way a browser text field
//! measures them, so a single emoji counts as two. Input is not trimmed: a
//! title of two spaces passes.

use std::fmt;

use crate::constants::{CONTENT_MIN_CHARS, TITLE_MIN_CHARS};
use crate::entry::DreamDraft;
use crate::settings::SettingsForm;

/// A single rejected field with the message shown inline beneath it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field error found in one submission. Never empty when returned as `Err`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Message for a given field, if that field failed.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

fn finish(errors: Vec<FieldError>) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors })
    }
}

/// Length as a browser text field measures it.
fn form_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Check a dream draft: title at least 2 characters, content at least 10.
pub fn validate_dream(draft: &DreamDraft) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    if form_len(&draft.title) < TITLE_MIN_CHARS {
        errors.push(FieldError {
            field: "title",
            message: format!("Dream title must be at least {TITLE_MIN_CHARS} characters."),
        });
    }
    if form_len(&draft.content) < CONTENT_MIN_CHARS {
        errors.push(FieldError {
            field: "content",
            message: format!(
                "Dream description must be at least {CONTENT_MIN_CHARS} characters."
            ),
        });
    }
    finish(errors)
}

/// Check the settings form: the OpenAI key is required, the others are optional.
pub fn validate_settings(form: &SettingsForm) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    if form.openai_api_key.is_empty() {
        errors.push(FieldError {
            field: "openaiApiKey",
            message: "API Key is required".to_string(),
        });
    }
    finish(errors)
}
