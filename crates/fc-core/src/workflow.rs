//! Tab state machines shared by both feature pages.
//!
//! Each page is an explicit enumerated state plus a guard table. Entering a
//! guarded state is a no-op that reports why it was refused; it is never an
//! error.

use std::fmt;
use std::str::FromStr;

/// Why a state is currently out of reach.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    Open,
    /// The analysis view needs a selected dream.
    NeedsSelection,
    /// The view needs a created digital twin.
    NeedsPersona,
}

impl Guard {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Result of asking a workflow to change state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Entered,
    /// Already in the requested state.
    Unchanged,
    Rejected(Guard),
}

impl Transition {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

pub trait Workflow {
    type State: Copy + Eq + fmt::Debug + 'static;

    /// Every state, in tab order.
    const STATES: &'static [Self::State];

    fn state(&self) -> Self::State;

    /// Guard-table lookup for entering `to` from the current state.
    fn guard(&self, to: Self::State) -> Guard;

    fn enter(&mut self, to: Self::State) -> Transition;

    fn can_enter(&self, to: Self::State) -> bool {
        self.guard(to).is_open()
    }

    /// Each state with whether it can currently be entered (the enabled tabs).
    fn tabs(&self) -> Vec<(Self::State, bool)> {
        Self::STATES
            .iter()
            .map(|&s| (s, s == self.state() || self.can_enter(s)))
            .collect()
    }
}

/// Apply a guarded move to `current`.
pub(crate) fn step<S: Copy + Eq>(current: &mut S, to: S, guard: Guard) -> Transition {
    if *current == to {
        return Transition::Unchanged;
    }
    if !guard.is_open() {
        return Transition::Rejected(guard);
    }
    *current = to;
    Transition::Entered
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DreamTab {
    Journal,
    New,
    Analysis,
    Stats,
}

impl DreamTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Journal => "journal",
            Self::New => "new",
            Self::Analysis => "analysis",
            Self::Stats => "stats",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Journal => "Dream Journal",
            Self::New => "New Entry",
            Self::Analysis => "Analysis",
            Self::Stats => "Patterns",
        }
    }
}

impl FromStr for DreamTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Journal, Self::New, Self::Analysis, Self::Stats]
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown tab '{s}'"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PersonaTab {
    Upload,
    Chat,
    Settings,
}

impl PersonaTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Chat => "chat",
            Self::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Upload => "Data Upload",
            Self::Chat => "Chat",
            Self::Settings => "Persona Settings",
        }
    }
}

impl FromStr for PersonaTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Upload, Self::Chat, Self::Settings]
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown tab '{s}'"))
    }
}
