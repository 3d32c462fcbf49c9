//! Interactive PersonaForge session.
//!
//! Lines are commands or chat messages; replies wait in a [`PendingQueue`]
//! until their simulated latency elapses.

use fc_core::{FileKind, Guard, PersonaForge, PersonaTab, Responder, Transition, Workflow};
use rand::rngs::SmallRng;

use crate::pending::PendingQueue;
use crate::render;
use crate::session::{Outcome, Session, split_command};

const HELP: &[&str] = &[
    "commands:",
    "  /upload <email|chat|writing|voice>  simulate a data upload",
    "  /remove <id>                        remove an uploaded file",
    "  /files                              list uploaded files",
    "  /create                             create your digital twin",
    "  /tab <upload|chat|settings>         switch tab",
    "  /update                             update persona settings",
    "  /history                            show the conversation",
    "  /help                               this list",
    "  /quit                               leave",
    "anything else is sent to your twin from the chat tab",
];

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Upload(String),
    Remove(String),
    Files,
    Create,
    Tab(String),
    Update,
    History,
    Help,
    Quit,
    Unknown(String),
    Say(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let Some((name, arg)) = split_command(line) else {
            return Self::Say(line.to_string());
        };
        match name {
            "upload" => Self::Upload(arg),
            "remove" => Self::Remove(arg),
            "files" => Self::Files,
            "create" => Self::Create,
            "tab" => Self::Tab(arg),
            "update" => Self::Update,
            "history" => Self::History,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

pub struct PersonaSession<R> {
    page: PersonaForge,
    responder: R,
    pending: PendingQueue<String>,
    rng: SmallRng,
}

impl<R: Responder> PersonaSession<R> {
    pub fn new(responder: R, rng: SmallRng) -> Self {
        Self {
            page: PersonaForge::new(),
            responder,
            pending: PendingQueue::new(),
            rng,
        }
    }

    pub fn page(&self) -> &PersonaForge {
        &self.page
    }

    fn say(&mut self, text: &str) -> Vec<String> {
        match self.page.send_message(text) {
            Some(prompt) => {
                let reply = self.responder.reply(&prompt);
                self.pending.schedule(self.responder.latency(), reply);
                tracing::debug!(pending = self.page.pending_replies(), "reply scheduled");
                vec!["twin is typing...".to_string()]
            }
            None if text.trim().is_empty() => Vec::new(),
            None if !self.page.persona_created() => {
                vec!["Create your digital twin first (/create).".to_string()]
            }
            None => vec!["Switch to the chat tab to talk to your twin (/tab chat).".to_string()],
        }
    }

    fn upload(&mut self, kind: &str) -> Vec<String> {
        match kind.parse::<FileKind>() {
            Ok(kind) => {
                let file = self.page.upload(kind, &mut self.rng);
                vec![format!("uploaded {} ({}) as {}", file.name, file.size, file.id)]
            }
            Err(e) => vec![e],
        }
    }

    fn switch_tab(&mut self, name: &str) -> Vec<String> {
        let tab = match name.parse::<PersonaTab>() {
            Ok(tab) => tab,
            Err(e) => return vec![e],
        };
        match self.page.enter(tab) {
            Transition::Entered | Transition::Unchanged => self.view(),
            Transition::Rejected(Guard::NeedsPersona) => vec![format!(
                "{} is locked: create your digital twin first (/create).",
                tab.label()
            )],
            Transition::Rejected(_) => vec![format!("{} is locked.", tab.label())],
        }
    }

    fn files(&self) -> Vec<String> {
        if self.page.uploads().is_empty() {
            return vec!["no files uploaded".to_string()];
        }
        self.page.uploads().iter().map(render::upload).collect()
    }

    fn history(&self) -> Vec<String> {
        if self.page.chat().is_empty() {
            return vec!["no conversation yet".to_string()];
        }
        let mut lines: Vec<String> = self.page.chat().messages().iter().map(render::message).collect();
        if self.page.is_typing() {
            lines.push("twin is typing...".to_string());
        }
        lines
    }

    /// Tab strip plus the body of the current tab.
    fn view(&self) -> Vec<String> {
        let mut lines = vec![render::tabs(&self.page, |t: PersonaTab| t.label())];
        match self.page.state() {
            PersonaTab::Upload => {
                lines.push("Upload Your Data".to_string());
                let kinds: Vec<&str> = FileKind::ALL.iter().map(|k| k.as_str()).collect();
                lines.push(format!("  sources: {}", kinds.join(", ")));
                lines.extend(self.files().into_iter().map(|l| format!("  {l}")));
            }
            PersonaTab::Chat => lines.extend(self.history()),
            PersonaTab::Settings => lines.extend(render::persona_settings(&self.page)),
        }
        lines
    }
}

impl<R: Responder> Session for PersonaSession<R> {
    type Item = String;

    fn intro(&self) -> Vec<String> {
        let mut lines = vec![
            "PersonaForge".to_string(),
            "Create your digital twin based on your personal data".to_string(),
        ];
        lines.extend(self.view());
        lines.push("type /help for commands".to_string());
        lines
    }

    /// Apply one input line and return what to print.
    fn handle(&mut self, line: &str) -> (Vec<String>, Outcome) {
        let out = match Command::parse(line) {
            Command::Upload(kind) => self.upload(&kind),
            Command::Remove(id) => {
                if self.page.remove_upload(&id) {
                    vec![format!("removed {id}")]
                } else {
                    vec![format!("no upload with id '{id}'")]
                }
            }
            Command::Files => self.files(),
            Command::Create => {
                self.page.create_persona();
                tracing::debug!(uploads = self.page.uploads().len(), "persona created");
                let mut lines = vec![
                    "Digital Twin Created: Your digital twin is ready to chat with you!"
                        .to_string(),
                ];
                lines.extend(self.view());
                lines
            }
            Command::Tab(name) => self.switch_tab(&name),
            Command::Update => {
                if self.page.can_update_settings() {
                    vec!["Persona settings updated.".to_string()]
                } else {
                    vec!["Create your digital twin first (/create).".to_string()]
                }
            }
            Command::History => self.history(),
            Command::Help => HELP.iter().map(|s| s.to_string()).collect(),
            Command::Quit => return (Vec::new(), Outcome::Quit),
            Command::Unknown(name) => vec![format!("unknown command '/{name}' (try /help)")],
            Command::Say(text) => self.say(&text),
        };
        (out, Outcome::Continue)
    }

    fn pending(&self) -> &PendingQueue<String> {
        &self.pending
    }

    fn pending_mut(&mut self) -> &mut PendingQueue<String> {
        &mut self.pending
    }

    /// Append a reply to the chat and render it.
    fn deliver(&mut self, reply: String) -> Vec<String> {
        self.page.deliver_reply(&reply);
        vec![format!("twin> {reply}")]
    }
}
