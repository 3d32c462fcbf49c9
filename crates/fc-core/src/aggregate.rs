//! Tag frequency tables and the pattern report behind the stats view.
//!
//! Counting walks entries in journal order and tags in entry order, so the
//! first-encounter order of every tag is deterministic. The top-N pass uses a
//! stable sort, which keeps that order among equal counts.

use std::collections::HashMap;

use serde::Serialize;

use crate::constants::TOP_TAGS;
use crate::entry::DreamEntry;

/// Which tag list of an entry to aggregate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagField {
    Symbols,
    Emotions,
}

impl TagField {
    fn tags(self, entry: &DreamEntry) -> &[String] {
        match self {
            Self::Symbols => &entry.symbols,
            Self::Emotions => &entry.emotions,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Count every tag of `field`, in first-encountered order.
pub fn tag_counts(entries: &[DreamEntry], field: TagField) -> Vec<TagCount> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<TagCount> = Vec::new();

    for tag in entries.iter().flat_map(|e| field.tags(e)) {
        match slots.get(tag.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                slots.insert(tag.as_str(), counts.len());
                counts.push(TagCount {
                    tag: tag.clone(),
                    count: 1,
                });
            }
        }
    }

    counts
}

/// The `n` most frequent tags, highest count first; ties keep first-encountered order.
pub fn top_tags(entries: &[DreamEntry], field: TagField, n: usize) -> Vec<TagCount> {
    let mut counts = tag_counts(entries, field);
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

const THEMES_FOUND: &str = "Your dreams frequently feature themes of movement and exploration, which often correlate with periods of change in your life.";
const THEMES_EMPTY: &str = "Add more dreams to your journal to analyze recurring themes.";
const EMOTION_ANXIETY: &str = "Anxiety appears consistently in your dreams, suggesting unresolved concerns that may benefit from conscious attention.";
const EMOTION_BALANCED: &str =
    "Your dreams show a balance of emotions, with positive feelings slightly predominating.";
const EMOTION_EMPTY: &str = "Record more dreams to analyze emotional patterns.";
const TIMING_FOUND: &str = "Your most vivid dreams tend to occur near the end of your dream cycles. Consider keeping your journal by your bed to record details immediately upon waking.";
const TIMING_EMPTY: &str = "Add more dated entries to analyze timing patterns in your dreams.";

/// The three insight paragraphs of the stats view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub recurring_themes: &'static str,
    pub emotional_patterns: &'static str,
    pub timing_correlations: &'static str,
}

impl Insights {
    pub fn from_entries(entries: &[DreamEntry]) -> Self {
        let any = !entries.is_empty();
        let anxious = entries
            .iter()
            .any(|e| e.emotions.iter().any(|t| t == "anxiety"));

        Self {
            recurring_themes: if any { THEMES_FOUND } else { THEMES_EMPTY },
            emotional_patterns: match (any, anxious) {
                (false, _) => EMOTION_EMPTY,
                (true, true) => EMOTION_ANXIETY,
                (true, false) => EMOTION_BALANCED,
            },
            timing_correlations: if entries.len() > 1 {
                TIMING_FOUND
            } else {
                TIMING_EMPTY
            },
        }
    }
}

/// Everything the stats view renders, computed in one pass over the journal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PatternReport {
    pub top_symbols: Vec<TagCount>,
    pub top_emotions: Vec<TagCount>,
    pub insights: Insights,
}

impl PatternReport {
    pub fn from_entries(entries: &[DreamEntry]) -> Self {
        Self {
            top_symbols: top_tags(entries, TagField::Symbols, TOP_TAGS),
            top_emotions: top_tags(entries, TagField::Emotions, TOP_TAGS),
            insights: Insights::from_entries(entries),
        }
    }

    /// True when there is nothing to chart ("not enough data").
    pub fn is_empty(&self) -> bool {
        self.top_symbols.is_empty() && self.top_emotions.is_empty()
    }
}
