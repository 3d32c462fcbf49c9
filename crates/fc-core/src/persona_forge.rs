//! PersonaForge page: data upload, digital-twin chat and persona settings.

use rand::Rng;

use crate::chat::{ChatLog, ChatMessage, GREETING};
use crate::upload::{FileKind, UploadedFile};
use crate::workflow::{Guard, PersonaTab, Transition, Workflow, step};

/// Behaviours listed on the persona settings tab, as (title, description).
pub const PERSONA_TRAITS: [(&str, &str); 4] = [
    (
        "Writing Style",
        "Your twin will mimic your writing style, formal level, and sentence structure.",
    ),
    (
        "Response Length",
        "Your twin will try to match your typical response length in conversations.",
    ),
    (
        "Email Style",
        "Email responses will follow your formatting, greeting and closing styles.",
    ),
    (
        "Voice Clone",
        "Optional: Add voice samples to enable audio responses in your voice.",
    ),
];

/// State owned by one PersonaForge page session.
#[derive(Clone, Debug)]
pub struct PersonaForge {
    tab: PersonaTab,
    persona_created: bool,
    uploads: Vec<UploadedFile>,
    chat: ChatLog,
    pending_replies: usize,
}

impl Default for PersonaForge {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonaForge {
    pub fn new() -> Self {
        Self {
            tab: PersonaTab::Upload,
            persona_created: false,
            uploads: Vec::new(),
            chat: ChatLog::new(),
            pending_replies: 0,
        }
    }

    pub fn persona_created(&self) -> bool {
        self.persona_created
    }

    pub fn uploads(&self) -> &[UploadedFile] {
        &self.uploads
    }

    pub fn chat(&self) -> &ChatLog {
        &self.chat
    }

    /// Simulate uploading a file of `kind` and append it to the upload list.
    pub fn upload(&mut self, kind: FileKind, rng: &mut impl Rng) -> &UploadedFile {
        self.uploads.push(UploadedFile::simulate(kind, rng));
        &self.uploads[self.uploads.len() - 1]
    }

    /// Remove an upload by id. Returns `false` if no such upload exists.
    pub fn remove_upload(&mut self, id: &str) -> bool {
        let before = self.uploads.len();
        self.uploads.retain(|f| f.id != id);
        self.uploads.len() != before
    }

    /// Create (or re-create) the digital twin: sets the flag, restarts the
    /// chat with the greeting and switches to the chat tab.
    pub fn create_persona(&mut self) -> Transition {
        self.persona_created = true;
        self.chat = ChatLog::new();
        self.chat.push(ChatMessage::assistant(GREETING));
        self.enter(PersonaTab::Chat)
    }

    /// Post a user message. Returns the message to hand to a responder, or
    /// `None` when it was ignored (blank, or the chat is not open).
    pub fn send_message(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() || self.tab != PersonaTab::Chat || !self.persona_created {
            return None;
        }
        self.chat.push(ChatMessage::user(text));
        self.pending_replies += 1;
        Some(text.to_string())
    }

    /// Append a reply that has finished its simulated latency.
    pub fn deliver_reply(&mut self, reply: &str) {
        self.chat.push(ChatMessage::assistant(reply));
        self.pending_replies = self.pending_replies.saturating_sub(1);
    }

    /// True while at least one reply is still on its way.
    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    /// The "Update Persona Settings" action is enabled once a twin exists.
    pub fn can_update_settings(&self) -> bool {
        self.persona_created
    }
}

impl Workflow for PersonaForge {
    type State = PersonaTab;

    const STATES: &'static [PersonaTab] =
        &[PersonaTab::Upload, PersonaTab::Chat, PersonaTab::Settings];

    fn state(&self) -> PersonaTab {
        self.tab
    }

    fn guard(&self, to: PersonaTab) -> Guard {
        match to {
            PersonaTab::Chat if !self.persona_created => Guard::NeedsPersona,
            PersonaTab::Upload if self.tab == PersonaTab::Chat && !self.persona_created => {
                Guard::NeedsPersona
            }
            _ => Guard::Open,
        }
    }

    fn enter(&mut self, to: PersonaTab) -> Transition {
        let guard = self.guard(to);
        step(&mut self.tab, to, guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Role;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn test_initial_state() {
        let page = PersonaForge::new();
        assert_eq!(page.state(), PersonaTab::Upload);
        assert!(!page.persona_created());
        assert!(page.chat().is_empty());
        assert!(!page.can_update_settings());
    }

    #[test]
    fn test_chat_guarded_until_created() {
        let mut page = PersonaForge::new();
        assert_eq!(
            page.enter(PersonaTab::Chat),
            Transition::Rejected(Guard::NeedsPersona)
        );
        assert_eq!(page.state(), PersonaTab::Upload);
        assert_eq!(page.enter(PersonaTab::Settings), Transition::Entered);
        assert!(page.enter(PersonaTab::Chat).is_rejected());
        assert_eq!(page.state(), PersonaTab::Settings);
    }

    #[test]
    fn test_create_persona_seeds_greeting_and_opens_chat() {
        let mut page = PersonaForge::new();
        assert_eq!(page.create_persona(), Transition::Entered);
        assert_eq!(page.state(), PersonaTab::Chat);
        assert!(page.persona_created());
        assert!(page.can_update_settings());
        assert_eq!(page.chat().len(), 1);
        let first = &page.chat().messages()[0];
        assert_eq!(first.role, Role::Assistant);
        assert_eq!(first.content, GREETING);
    }

    #[test]
    fn test_recreate_resets_chat() {
        let mut page = PersonaForge::new();
        page.create_persona();
        page.send_message("hello");
        page.deliver_reply("hi");
        assert_eq!(page.chat().len(), 3);
        page.enter(PersonaTab::Upload);
        page.create_persona();
        assert_eq!(page.chat().len(), 1);
        assert_eq!(page.state(), PersonaTab::Chat);
    }

    #[test]
    fn test_upload_and_remove() {
        let mut rng = rng();
        let mut page = PersonaForge::new();
        let id = page.upload(FileKind::Email, &mut rng).id.clone();
        page.upload(FileKind::Voice, &mut rng);
        assert_eq!(page.uploads().len(), 2);
        assert!(page.remove_upload(&id));
        assert_eq!(page.uploads().len(), 1);
        assert_eq!(page.uploads()[0].kind, FileKind::Voice);
        assert!(!page.remove_upload(&id));
    }

    #[test]
    fn test_uploads_not_required_for_persona() {
        let mut page = PersonaForge::new();
        page.create_persona();
        assert!(page.uploads().is_empty());
        assert_eq!(page.state(), PersonaTab::Chat);
    }

    #[test]
    fn test_send_message_flow() {
        let mut page = PersonaForge::new();
        page.create_persona();
        assert_eq!(page.send_message("what now?"), Some("what now?".to_string()));
        assert!(page.is_typing());
        page.deliver_reply("a reply");
        assert!(!page.is_typing());
        let roles: Vec<Role> = page.chat().messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::Assistant, Role::User, Role::Assistant]);
    }

    #[test]
    fn test_blank_message_ignored() {
        let mut page = PersonaForge::new();
        page.create_persona();
        assert_eq!(page.send_message("   "), None);
        assert_eq!(page.chat().len(), 1);
        assert!(!page.is_typing());
    }

    #[test]
    fn test_message_ignored_outside_chat() {
        let mut page = PersonaForge::new();
        assert_eq!(page.send_message("hello"), None);
        page.create_persona();
        page.enter(PersonaTab::Settings);
        assert_eq!(page.send_message("hello"), None);
        assert_eq!(page.chat().len(), 1);
    }

    #[test]
    fn test_multiple_pending_replies() {
        let mut page = PersonaForge::new();
        page.create_persona();
        page.send_message("one");
        page.send_message("two");
        assert_eq!(page.pending_replies(), 2);
        page.deliver_reply("r1");
        assert!(page.is_typing());
        page.deliver_reply("r2");
        assert!(!page.is_typing());
    }

    #[test]
    fn test_tabs_enabled() {
        let mut page = PersonaForge::new();
        assert!(page.tabs().contains(&(PersonaTab::Chat, false)));
        page.create_persona();
        assert!(page.tabs().iter().all(|(_, enabled)| *enabled));
    }
}
