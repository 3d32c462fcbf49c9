//! DreamChain page: journal, new entry, analysis and pattern tabs.

use crate::aggregate::PatternReport;
use crate::entry::{DreamDraft, DreamEntry, Journal};
use crate::filter::filter_entries;
use crate::validation::{ValidationErrors, validate_dream};
use crate::workflow::{DreamTab, Guard, Transition, Workflow, step};

/// State owned by one DreamChain page session.
///
/// Invariant: the tab is only ever `Analysis` while `selected` names an
/// entry in the journal.
#[derive(Clone, Debug)]
pub struct DreamChain {
    tab: DreamTab,
    journal: Journal,
    selected: Option<String>,
    draft: DreamDraft,
    recording: bool,
}

impl Default for DreamChain {
    fn default() -> Self {
        Self::new()
    }
}

impl DreamChain {
    /// A fresh page with the sample journal.
    pub fn new() -> Self {
        Self::with_journal(Journal::seeded())
    }

    pub fn with_journal(journal: Journal) -> Self {
        Self {
            tab: DreamTab::Journal,
            journal,
            selected: None,
            draft: DreamDraft::default(),
            recording: false,
        }
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn selected(&self) -> Option<&DreamEntry> {
        self.selected.as_deref().and_then(|id| self.journal.get(id))
    }

    /// Select a journal entry and open its analysis.
    /// An unknown id leaves both selection and tab untouched.
    pub fn select_entry(&mut self, id: &str) -> Transition {
        if self.journal.get(id).is_none() {
            return Transition::Rejected(Guard::NeedsSelection);
        }
        self.selected = Some(id.to_string());
        self.enter(DreamTab::Analysis)
    }

    /// The new-entry form as currently filled in.
    pub fn draft(&self) -> &DreamDraft {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: DreamDraft) {
        self.draft = draft;
    }

    /// Validate the form, prepend the new dream and return to the journal.
    /// On failure nothing changes and the form keeps its values.
    pub fn submit_draft(&mut self, date: &str) -> Result<&DreamEntry, ValidationErrors> {
        validate_dream(&self.draft)?;
        // fresh uuid ids, so the prepend always lands at the front
        self.journal.prepend(DreamEntry::from_draft(&self.draft, date));
        self.draft = DreamDraft::default();
        self.tab = DreamTab::Journal;
        Ok(&self.journal.entries()[0])
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Begin a simulated voice recording. Returns `false` if one is already running.
    pub fn start_recording(&mut self) -> bool {
        if self.recording {
            return false;
        }
        self.recording = true;
        true
    }

    /// Finish the recording by filling the form with the transcript.
    pub fn finish_recording(&mut self, transcript: DreamDraft) {
        self.recording = false;
        self.draft = transcript;
    }

    /// Journal entries matching the search box.
    pub fn search(&self, query: &str) -> Vec<&DreamEntry> {
        filter_entries(self.journal.entries(), query)
    }

    /// Stats-tab contents, recomputed from the current journal.
    pub fn report(&self) -> PatternReport {
        PatternReport::from_entries(self.journal.entries())
    }
}

impl Workflow for DreamChain {
    type State = DreamTab;

    const STATES: &'static [DreamTab] = &[
        DreamTab::Journal,
        DreamTab::New,
        DreamTab::Analysis,
        DreamTab::Stats,
    ];

    fn state(&self) -> DreamTab {
        self.tab
    }

    fn guard(&self, to: DreamTab) -> Guard {
        match to {
            DreamTab::Analysis if self.selected().is_none() => Guard::NeedsSelection,
            _ => Guard::Open,
        }
    }

    fn enter(&mut self, to: DreamTab) -> Transition {
        let guard = self.guard(to);
        step(&mut self.tab, to, guard)
    }
}
