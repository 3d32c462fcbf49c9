//! Interactive DreamChain session.
//!
//! One page for the whole session, so entries added with `/submit` can be
//! selected, searched and charted before the process exits. A voice
//! recording waits in a [`PendingQueue`] until its transcription is due.

use fc_core::{
    DreamChain, DreamDraft, DreamEntry, DreamTab, Guard, Transcriber, Transition, Workflow,
};

use crate::pending::PendingQueue;
use crate::render;
use crate::session::{Outcome, Session, split_command};

const HELP: &[&str] = &[
    "commands:",
    "  /tab <journal|new|analysis|stats>   switch tab",
    "  /select <id|#n>                     analyse an entry (#n is its row in the listing)",
    "  /new                                open the new-entry form",
    "  /title <text>                       set the dream title",
    "  /content <text>                     set the dream description",
    "  /submit                             add the form to the journal",
    "  /record                             simulate a voice recording",
    "  /search [query]                     filter the journal (empty clears)",
    "  /stats                              symbol and emotion patterns",
    "  /help                               this list",
    "  /quit                               leave",
];

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Tab(String),
    Select(String),
    New,
    Title(String),
    Content(String),
    Submit,
    Record,
    Search(String),
    Stats,
    Help,
    Quit,
    Unknown(String),
    Text,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let Some((name, arg)) = split_command(line) else {
            return Self::Text;
        };
        match name {
            "tab" => Self::Tab(arg),
            "select" | "show" => Self::Select(arg),
            "new" => Self::New,
            "title" => Self::Title(arg),
            "content" => Self::Content(arg),
            "submit" => Self::Submit,
            "record" => Self::Record,
            "search" => Self::Search(arg),
            "stats" => Self::Stats,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

pub struct DreamSession<T> {
    page: DreamChain,
    transcriber: T,
    pending: PendingQueue<DreamDraft>,
    query: String,
    today: String,
}

impl<T: Transcriber> DreamSession<T> {
    /// `today` is the ISO date stamped on submitted entries.
    pub fn new(transcriber: T, today: String) -> Self {
        Self {
            page: DreamChain::new(),
            transcriber,
            pending: PendingQueue::new(),
            query: String::new(),
            today,
        }
    }

    pub fn page(&self) -> &DreamChain {
        &self.page
    }

    /// Entries as the journal tab currently lists them.
    fn listing(&self) -> Vec<&DreamEntry> {
        self.page.search(&self.query)
    }

    /// Resolve `#n` against the listing; anything else is taken as an id.
    fn resolve_id(&self, arg: &str) -> Option<String> {
        match arg.strip_prefix('#') {
            Some(row) => {
                let row: usize = row.parse().ok()?;
                let listing = self.listing();
                listing.get(row.checked_sub(1)?).map(|e| e.id.clone())
            }
            None => Some(arg.to_string()),
        }
    }

    fn select(&mut self, arg: &str) -> Vec<String> {
        if arg.is_empty() {
            return vec!["usage: /select <id|#n>".to_string()];
        }
        let Some(id) = self.resolve_id(arg) else {
            return vec![format!("no dream at row '{arg}'")];
        };
        match self.page.select_entry(&id) {
            Transition::Rejected(_) => vec![format!("no dream with id '{id}'")],
            Transition::Entered | Transition::Unchanged => self.view(),
        }
    }

    fn switch_tab(&mut self, name: &str) -> Vec<String> {
        let tab = match name.parse::<DreamTab>() {
            Ok(tab) => tab,
            Err(e) => return vec![e],
        };
        match self.page.enter(tab) {
            Transition::Entered | Transition::Unchanged => self.view(),
            Transition::Rejected(Guard::NeedsSelection) => vec![format!(
                "{} is locked: select a dream first (/select <id>).",
                tab.label()
            )],
            Transition::Rejected(_) => vec![format!("{} is locked.", tab.label())],
        }
    }

    /// Edit one form field and show the form.
    fn edit(&mut self, edit: impl FnOnce(&mut DreamDraft)) -> Vec<String> {
        let mut draft = self.page.draft().clone();
        edit(&mut draft);
        self.page.set_draft(draft);
        self.page.enter(DreamTab::New);
        self.view()
    }

    fn submit(&mut self) -> Vec<String> {
        let id = match self.page.submit_draft(&self.today) {
            Ok(entry) => entry.id.clone(),
            Err(errors) => {
                let mut lines = vec!["dream entry rejected:".to_string()];
                lines.extend(
                    errors
                        .errors
                        .iter()
                        .map(|e| format!("  {}: {}", e.field, e.message)),
                );
                return lines;
            }
        };
        tracing::info!(%id, "dream recorded");
        let mut lines = vec![format!("Dream recorded: {id}")];
        lines.extend(self.view());
        lines
    }

    fn record(&mut self) -> Vec<String> {
        self.page.enter(DreamTab::New);
        if !self.page.start_recording() {
            return vec!["already recording".to_string()];
        }
        let transcript = self.transcriber.transcribe();
        self.pending.schedule(self.transcriber.latency(), transcript);
        tracing::debug!(latency = ?self.transcriber.latency(), "transcription scheduled");
        vec!["Recording... speak now".to_string()]
    }

    fn search(&mut self, query: String) -> Vec<String> {
        self.query = query;
        self.page.enter(DreamTab::Journal);
        self.view()
    }

    fn form(&self) -> Vec<String> {
        let draft = self.page.draft();
        let mut lines = vec![
            format!("Dream Title: {}", draft.title),
            format!("Dream Description: {}", draft.content),
        ];
        if self.page.is_recording() {
            lines.push("Recording... speak now".to_string());
        }
        lines
    }

    /// Tab strip plus the body of the current tab.
    fn view(&self) -> Vec<String> {
        let mut lines = vec![render::tabs(&self.page, |t: DreamTab| t.label())];
        match self.page.state() {
            DreamTab::Journal => {
                if !self.query.is_empty() {
                    lines.push(format!("search: {}", self.query));
                }
                let selected = self.page.selected().map(|e| e.id.as_str());
                lines.extend(render::journal(&self.listing(), &self.query, selected));
            }
            DreamTab::New => lines.extend(self.form()),
            DreamTab::Analysis => {
                if let Some(entry) = self.page.selected() {
                    lines.extend(render::analysis(entry));
                }
            }
            DreamTab::Stats => lines.extend(render::report(&self.page.report())),
        }
        lines
    }
}

impl<T: Transcriber> Session for DreamSession<T> {
    type Item = DreamDraft;

    fn intro(&self) -> Vec<String> {
        let mut lines = vec![
            "DreamChain".to_string(),
            "Record, analyze, and discover patterns in your dreams".to_string(),
        ];
        lines.extend(self.view());
        lines.push("type /help for commands".to_string());
        lines
    }

    fn handle(&mut self, line: &str) -> (Vec<String>, Outcome) {
        let out = match Command::parse(line) {
            Command::Tab(name) => self.switch_tab(&name),
            Command::Select(arg) => self.select(&arg),
            Command::New => self.switch_tab(DreamTab::New.as_str()),
            Command::Title(title) => self.edit(|d| d.title = title),
            Command::Content(content) => self.edit(|d| d.content = content),
            Command::Submit => self.submit(),
            Command::Record => self.record(),
            Command::Search(query) => self.search(query),
            Command::Stats => self.switch_tab(DreamTab::Stats.as_str()),
            Command::Help => HELP.iter().map(|s| s.to_string()).collect(),
            Command::Quit => return (Vec::new(), Outcome::Quit),
            Command::Unknown(name) => vec![format!("unknown command '/{name}' (try /help)")],
            Command::Text if line.trim().is_empty() => Vec::new(),
            Command::Text => vec!["Use /title and /content to fill in a dream (try /help).".to_string()],
        };
        (out, Outcome::Continue)
    }

    fn pending(&self) -> &PendingQueue<DreamDraft> {
        &self.pending
    }

    fn pending_mut(&mut self) -> &mut PendingQueue<DreamDraft> {
        &mut self.pending
    }

    /// Fill the form with a finished transcript.
    fn deliver(&mut self, transcript: DreamDraft) -> Vec<String> {
        self.page.finish_recording(transcript);
        tracing::debug!("transcription complete");
        let mut lines = vec!["Transcription complete".to_string()];
        lines.extend(self.form());
        lines
    }
}
