use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{PENDING_ANALYSIS, PENDING_TAGS, PREVIEW_SYMBOLS};

const FLYING_INTERPRETATION: &str = "Flying dreams often represent a sense of freedom, transcending limitations, or rising above challenges in your waking life.";
const MAZE_INTERPRETATION: &str = "Maze dreams typically symbolize confusion, complex decisions, or feeling trapped in a situation without a clear path forward.";
const GENERIC_INTERPRETATION: &str = "The symbols in this dream suggest unconscious processing of recent events or emotions. Consider how these elements relate to your current life circumstances.";

/// One dream-journal record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DreamEntry {
    pub id: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub title: String,
    pub content: String,
    pub symbols: Vec<String>,
    pub emotions: Vec<String>,
    pub analysis: String,
}

impl DreamEntry {
    /// Build an entry from a submitted draft. Symbols, emotions and analysis
    /// carry the pending placeholders.
    pub fn from_draft(draft: &DreamDraft, date: &str) -> Self {
        let pending: Vec<String> = PENDING_TAGS.iter().map(|t| t.to_string()).collect();
        Self {
            id: format!("dream-{}", Uuid::new_v4().simple()),
            date: date.to_string(),
            title: draft.title.clone(),
            content: draft.content.clone(),
            symbols: pending.clone(),
            emotions: pending,
            analysis: PENDING_ANALYSIS.to_string(),
        }
    }

    /// First few symbols, as shown beside the title in the journal list.
    pub fn preview_symbols(&self) -> &[String] {
        &self.symbols[..self.symbols.len().min(PREVIEW_SYMBOLS)]
    }

    /// Keyword-selected symbol interpretation (matches on the title, case-sensitive).
    pub fn interpretation(&self) -> &'static str {
        if self.title.contains("Flying") {
            FLYING_INTERPRETATION
        } else if self.title.contains("Maze") {
            MAZE_INTERPRETATION
        } else {
            GENERIC_INTERPRETATION
        }
    }
}

/// The new-dream form's fields, before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DreamDraft {
    pub title: String,
    pub content: String,
}

impl DreamDraft {
    pub fn new(title: &str, content: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
        }
    }
}

/// Most-recent-first collection of dream entries.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<DreamEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two sample dreams a fresh journal page starts with.
    pub fn seeded() -> Self {
        Self {
            entries: seed_entries(),
        }
    }

    pub fn entries(&self) -> &[DreamEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&DreamEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Insert at the front. Returns `false` (and leaves the journal untouched)
    /// if an entry with the same id already exists.
    pub fn prepend(&mut self, entry: DreamEntry) -> bool {
        if self.get(&entry.id).is_some() {
            return false;
        }
        self.entries.insert(0, entry);
        true
    }
}

fn seed_entries() -> Vec<DreamEntry> {
    fn tags(t: &[&str]) -> Vec<String> {
        t.iter().map(|s| s.to_string()).collect()
    }

    vec![
        DreamEntry {
            id: "1".to_string(),
            date: "2025-05-04".to_string(),
            title: "Flying Over Mountains".to_string(),
            content: "I was flying over beautiful mountains with snow-capped peaks. I felt free and powerful, soaring through clouds and looking down at forests and lakes below.".to_string(),
            symbols: tags(&["flying", "mountains", "clouds", "freedom"]),
            emotions: tags(&["joy", "freedom", "wonder"]),
            analysis: "This dream represents a desire for freedom and overcoming obstacles. The mountains symbolize challenges you've been facing, while flying represents your aspiration to rise above them.".to_string(),
        },
        DreamEntry {
            id: "2".to_string(),
            date: "2025-05-02".to_string(),
            title: "Lost in a Maze".to_string(),
            content: "I was trapped in an endless maze with high walls. Every time I thought I found the exit, it led to another section of the maze. I felt increasingly anxious as time passed.".to_string(),
            symbols: tags(&["maze", "being lost", "walls", "searching"]),
            emotions: tags(&["anxiety", "confusion", "frustration"]),
            analysis: "This dream suggests you're feeling stuck in a complex situation. The maze represents confusion about a decision or path forward in your life.".to_string(),
        },
    ]
}
