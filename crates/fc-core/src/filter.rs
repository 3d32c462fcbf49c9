use crate::entry::DreamEntry;

/// Entries whose title, content, or any symbol contains `query`,
/// case-insensitively. An empty query keeps everything. Order is preserved.
pub fn filter_entries<'a>(entries: &'a [DreamEntry], query: &str) -> Vec<&'a DreamEntry> {
    if query.is_empty() {
        return entries.iter().collect();
    }
    let needle = query.to_lowercase();
    entries.iter().filter(|e| matches(e, &needle)).collect()
}

fn matches(entry: &DreamEntry, needle: &str) -> bool {
    entry.title.to_lowercase().contains(needle)
        || entry.content.to_lowercase().contains(needle)
        || entry
            .symbols
            .iter()
            .any(|s| s.to_lowercase().contains(needle))
}

/// Hint shown when a filtered listing comes back empty.
pub fn empty_listing_hint(query: &str) -> &'static str {
    if query.is_empty() {
        "Record your first dream to get started"
    } else {
        "Try a different search term"
    }
}
