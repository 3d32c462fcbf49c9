use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::MAX_UPLOAD_MB;

/// Kind of personal data the digital twin can learn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Email,
    Chat,
    Writing,
    Voice,
}

impl FileKind {
    pub const ALL: [FileKind; 4] = [Self::Email, Self::Chat, Self::Writing, Self::Voice];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Chat => "chat",
            Self::Writing => "writing",
            Self::Voice => "voice",
        }
    }

    /// Names a simulated upload of this kind picks from.
    pub fn sample_names(&self) -> &'static [&'static str] {
        match self {
            Self::Email => &["gmail_export.mbox", "outlook_archive.pst"],
            Self::Chat => &["whatsapp_history.txt", "slack_export.json"],
            Self::Writing => &["blog_posts.txt", "essays.pdf"],
            Self::Voice => &["voice_sample_1.mp3", "voice_sample_2.wav"],
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown file kind '{s}' (expected email, chat, writing or voice)"))
    }
}

/// Metadata for a simulated upload. No file bytes are ever read or kept.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    /// Display size, e.g. `"4 MB"`.
    pub size: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
}

impl UploadedFile {
    /// Fabricate a plausible upload of `kind`: random sample name, 1..=10 MB.
    pub fn simulate(kind: FileKind, rng: &mut impl Rng) -> Self {
        let name = kind
            .sample_names()
            .choose(rng)
            .copied()
            .unwrap_or("upload.bin");
        let mb = rng.random_range(1..=MAX_UPLOAD_MB);
        Self {
            id: format!("file-{}", Uuid::new_v4().simple()),
            name: name.to_string(),
            size: format!("{mb} MB"),
            kind,
        }
    }
}
