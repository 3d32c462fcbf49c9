//! The interactive loop shared by the page sessions.
//!
//! A session owns one page. Lines from stdin are slash commands or free text;
//! timed results wait in the session's [`PendingQueue`] until due.

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::pending::PendingQueue;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Split `/name rest of line` into `("name", "rest of line")`.
/// Returns `None` for lines that are not slash commands.
pub fn split_command(line: &str) -> Option<(&str, String)> {
    let rest = line.trim_start().strip_prefix('/')?;
    Some(match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim().to_string()),
        None => (rest.trim_end(), String::new()),
    })
}

pub trait Session {
    /// What the pending queue delivers.
    type Item;

    fn intro(&self) -> Vec<String>;

    /// Apply one input line and return what to print.
    fn handle(&mut self, line: &str) -> (Vec<String>, Outcome);

    fn pending(&self) -> &PendingQueue<Self::Item>;

    fn pending_mut(&mut self) -> &mut PendingQueue<Self::Item>;

    /// Apply a due item and return what to print.
    fn deliver(&mut self, item: Self::Item) -> Vec<String>;

    fn has_pending(&self) -> bool {
        !self.pending().is_empty()
    }
}

/// Wait out every pending item, delivering each in order.
pub async fn drain<S: Session>(session: &mut S) -> Vec<String> {
    let mut out = Vec::new();
    for item in session.pending_mut().drain().await {
        out.extend(session.deliver(item));
    }
    out
}

/// Drive a session from stdin until EOF, `/quit` or Ctrl-C.
///
/// At EOF pending items are waited for; `/quit` and Ctrl-C drop them.
pub async fn run<S: Session>(mut session: S) -> Result<()> {
    print_lines(session.intro());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let has_pending = session.has_pending();
        tokio::select! {
            Some(item) = session.pending_mut().next_due(), if has_pending => {
                print_lines(session.deliver(item));
            }
            line = lines.next_line() => {
                match line.context("failed to read stdin")? {
                    Some(line) => {
                        let (out, outcome) = session.handle(&line);
                        print_lines(out);
                        if outcome == Outcome::Quit {
                            if session.has_pending() {
                                tracing::debug!(
                                    pending = session.pending().len(),
                                    "discarding pending items on quit"
                                );
                            }
                            return Ok(());
                        }
                    }
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::debug!("interrupted");
                return Ok(());
            }
        }
    }

    print_lines(drain(&mut session).await);
    Ok(())
}

pub fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("/tab  chat "), Some(("tab", "chat".to_string())));
        assert_eq!(split_command("  /files"), Some(("files", String::new())));
        assert_eq!(
            split_command("/title Lost at sea"),
            Some(("title", "Lost at sea".to_string()))
        );
        assert_eq!(split_command("hello /there"), None);
    }
}
