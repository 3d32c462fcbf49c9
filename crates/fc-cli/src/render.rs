//! Plain-text views of each page. Pure functions from state to lines.

use fc_core::{
    ChatMessage, DreamEntry, FeatureFlags, PERSONA_TRAITS, PatternReport, PersonaForge, Role,
    Route, TagCount, Theme, UploadedFile, Workflow, display_date, empty_listing_hint,
};

pub fn navbar(active: &Route, theme: Theme) -> String {
    let mark = |r: Route| {
        if *active == r {
            format!("[{}]", r.title())
        } else {
            r.title().to_string()
        }
    };
    format!(
        "AI-Project | {} | {} | {} | theme: {theme}",
        mark(Route::PersonaForge),
        mark(Route::DreamChain),
        mark(Route::Settings),
    )
}

pub fn home() -> Vec<String> {
    vec![
        "PersonaForge + DreamChain".to_string(),
        "Create your digital twin based on your real data and explore your subconscious through AI-powered dream analysis".to_string(),
        String::new(),
        "PersonaForge (/persona-forge)".to_string(),
        "  Upload your data to create a digital twin that behaves like you and simulates responses as you would.".to_string(),
        String::new(),
        "DreamChain (/dream-chain)".to_string(),
        "  Record and analyze your dreams to uncover subconscious patterns, symbols, and emotions.".to_string(),
    ]
}

pub fn not_found(path: &str) -> Vec<String> {
    let mut lines = vec![
        "404".to_string(),
        "Page Not Found".to_string(),
        format!("The page you're looking for ({path}) doesn't exist or has been moved."),
    ];
    for link in Route::recovery_links() {
        lines.push(format!("  -> {} ({})", link.title(), link.path()));
    }
    lines
}

/// Tab strip: the active tab in brackets, locked tabs marked.
pub fn tabs<W>(page: &W, label: impl Fn(W::State) -> &'static str) -> String
where
    W: Workflow,
{
    page.tabs()
        .into_iter()
        .map(|(state, enabled)| {
            let name = label(state);
            if state == page.state() {
                format!("[{name}]")
            } else if enabled {
                name.to_string()
            } else {
                format!("{name} (locked)")
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn journal(entries: &[&DreamEntry], query: &str, selected: Option<&str>) -> Vec<String> {
    if entries.is_empty() {
        return vec![empty_listing_hint(query).to_string()];
    }
    entries
        .iter()
        .map(|e| {
            let marker = if selected == Some(e.id.as_str()) { "*" } else { " " };
            format!(
                "{marker} {:<8} {:<13} {}  [{}]",
                e.id,
                display_date(&e.date),
                e.title,
                e.preview_symbols().join(", ")
            )
        })
        .collect()
}

pub fn analysis(entry: &DreamEntry) -> Vec<String> {
    vec![
        entry.title.clone(),
        display_date(&entry.date),
        String::new(),
        entry.content.clone(),
        String::new(),
        format!("Symbols:  {}", entry.symbols.join(", ")),
        format!("Emotions: {}", entry.emotions.join(", ")),
        String::new(),
        "Analysis".to_string(),
        format!("  {}", entry.analysis),
        String::new(),
        "Symbol Interpretation".to_string(),
        format!("  {}", entry.interpretation()),
    ]
}

fn chart(title: &str, tags: &[TagCount]) -> Vec<String> {
    let mut lines = vec![title.to_string()];
    if tags.is_empty() {
        lines.push("  Not enough data yet".to_string());
        return lines;
    }
    let width = tags.iter().map(|t| t.tag.chars().count()).max().unwrap_or(0);
    for t in tags {
        lines.push(format!(
            "  {:<width$} {} {}",
            t.tag,
            "#".repeat(t.count),
            t.count
        ));
    }
    lines
}

pub fn report(report: &PatternReport) -> Vec<String> {
    let mut lines = chart("Common Symbols", &report.top_symbols);
    lines.push(String::new());
    lines.extend(chart("Emotional Themes", &report.top_emotions));
    lines.push(String::new());
    lines.push("Dream Patterns".to_string());
    lines.push(format!("  Recurring Themes: {}", report.insights.recurring_themes));
    lines.push(format!("  Emotional Patterns: {}", report.insights.emotional_patterns));
    lines.push(format!("  Timing Correlations: {}", report.insights.timing_correlations));
    lines
}

pub fn upload(file: &UploadedFile) -> String {
    format!("{:<12} {:<8} {:<22} {}", file.id, file.kind, file.name, file.size)
}

pub fn message(msg: &ChatMessage) -> String {
    match msg.role {
        Role::User => format!("you> {}", msg.content),
        Role::Assistant => format!("twin> {}", msg.content),
    }
}

pub fn persona_settings(page: &PersonaForge) -> Vec<String> {
    let mut lines = vec![
        "Persona Settings".to_string(),
        "Configure how your digital twin behaves".to_string(),
    ];
    for (title, description) in PERSONA_TRAITS {
        lines.push(format!("  {title}: {description}"));
    }
    let state = if page.can_update_settings() {
        "enabled"
    } else {
        "disabled until your digital twin exists"
    };
    lines.push(format!("  [Update Persona Settings] ({state})"));
    lines
}

pub fn settings(theme: Theme, saved: bool, flags: FeatureFlags) -> Vec<String> {
    let origin = if saved { "saved" } else { "system default" };
    let on_off = |b: bool| if b { "on" } else { "off" };
    vec![
        format!("theme:           {theme} ({origin})"),
        format!("voice cloning:   {}", on_off(flags.use_voice_cloning)),
        format!("dream images:    {}", on_off(flags.use_dream_images)),
        "api keys:        never stored".to_string(),
    ]
}
