//! Headless line editor — the shell loop state machine.
//!
//! Models the original panel's input box and output pane without any
//! rendering: a free-text input buffer, a newest-first history, and an
//! append-only list of styled output lines. A front end feeds key
//! events in (`set_input`, `submit`, `navigate`) and draws
//! [`LineEditor::output`] however it likes.
//!
//! Exactly one submission may be in flight at a time: `submit` locks
//! the buffer and every further submit or navigation is a no-op until
//! `complete` unlocks it.

use siteshell_types::ExecOutcome;

use crate::history::{Direction, HistoryBuffer};

/// Rendering style for one output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Success,
    Error,
}

/// One rendered output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub style: Style,
}

/// What the front end hands back after a round-trip: the outcome, or
/// an opaque error message to render in error styling.
pub type ShellReply = Result<ExecOutcome, String>;

/// The shell loop state: input buffer, history, output pane.
pub struct LineEditor {
    history: HistoryBuffer,
    buffer: String,
    locked: bool,
    prompt: String,
    welcome: String,
    output: Vec<OutputLine>,
    cleared: bool,
}

impl LineEditor {
    /// Create an editor showing the welcome banner.
    pub fn new(prompt: impl Into<String>, welcome: impl Into<String>) -> Self {
        let mut editor = Self {
            history: HistoryBuffer::new(),
            buffer: String::new(),
            locked: false,
            prompt: prompt.into(),
            welcome: welcome.into(),
            output: Vec::new(),
            cleared: false,
        };
        editor.push_welcome();
        editor
    }

    /// Replace the input buffer with typed text. Ignored while locked.
    pub fn set_input(&mut self, text: &str) {
        if !self.locked {
            self.buffer = text.to_string();
        }
    }

    /// Current input buffer content.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// True while a submission is in flight.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The output pane, oldest line first.
    pub fn output(&self) -> &[OutputLine] {
        &self.output
    }

    /// The command history.
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Submit the current buffer.
    ///
    /// Returns the command line to send to the backend, locking the
    /// buffer until [`complete`](Self::complete) is called. Returns
    /// `None` without side effects while locked; `None` with an error
    /// line for a blank buffer; and `None` for `clear`/`cls`, which are
    /// handled locally without a round-trip (history still records
    /// them).
    pub fn submit(&mut self) -> Option<String> {
        if self.locked {
            return None;
        }

        let line = self.buffer.trim().to_string();
        if line.is_empty() {
            self.push_line("Please enter a command.", Style::Error);
            return None;
        }

        self.history.push(line.clone());
        self.push_line(format!("{}{}", self.prompt, line), Style::Success);

        // Local clear side channel: never reaches the backend
        if line.eq_ignore_ascii_case("clear") || line.eq_ignore_ascii_case("cls") {
            self.render(&Ok(ExecOutcome::ClearScreen));
            return None;
        }

        self.locked = true;
        Some(line)
    }

    /// Finish the in-flight submission: render the reply, clear and
    /// unlock the input buffer.
    pub fn complete(&mut self, reply: &ShellReply) {
        self.render(reply);
        self.buffer.clear();
        self.locked = false;
    }

    /// Browse history. No-op while locked.
    pub fn navigate(&mut self, direction: Direction) {
        if self.locked {
            return;
        }
        if let Some(text) = self.history.navigate(direction) {
            self.buffer = text;
        }
    }

    /// True exactly once after each clear-screen render; front ends use
    /// this to wipe their display before redrawing.
    pub fn take_cleared(&mut self) -> bool {
        std::mem::take(&mut self.cleared)
    }

    fn render(&mut self, reply: &ShellReply) {
        match reply {
            Ok(ExecOutcome::ClearScreen) => {
                // Wipes output and input only; history is untouched
                self.output.clear();
                self.push_welcome();
                self.buffer.clear();
                self.cleared = true;
            }
            Ok(ExecOutcome::Output(text)) => self.push_block(text, Style::Success),
            Err(message) => self.push_block(message, Style::Error),
        }
    }

    fn push_welcome(&mut self) {
        let welcome = self.welcome.clone();
        self.push_block(&welcome, Style::Success);
    }

    fn push_block(&mut self, text: &str, style: Style) {
        for line in text.split('\n') {
            self.output.push(OutputLine {
                text: line.to_string(),
                style,
            });
        }
    }

    fn push_line(&mut self, text: impl Into<String>, style: Style) {
        self.output.push(OutputLine {
            text: text.into(),
            style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> LineEditor {
        LineEditor::new("wp-cli> ", "Welcome\nType 'help' to see available commands.")
    }

    #[test]
    fn starts_with_the_welcome_banner() {
        let editor = editor();
        assert_eq!(editor.output().len(), 2);
        assert_eq!(editor.output()[0].text, "Welcome");
        assert_eq!(editor.output()[0].style, Style::Success);
    }

    #[test]
    fn blank_submit_is_rejected_without_history() {
        let mut editor = editor();
        editor.set_input("   ");
        assert_eq!(editor.submit(), None);
        assert!(editor.history().is_empty());
        let last = editor.output().last().unwrap();
        assert_eq!(last.text, "Please enter a command.");
        assert_eq!(last.style, Style::Error);
    }

    #[test]
    fn submit_echoes_prompt_and_locks() {
        let mut editor = editor();
        editor.set_input("plugin list");
        assert_eq!(editor.submit(), Some("plugin list".to_string()));
        assert!(editor.is_locked());
        assert_eq!(editor.output().last().unwrap().text, "wp-cli> plugin list");

        // Second submit while locked is a no-op
        editor.set_input("theme list");
        assert_eq!(editor.buffer(), "plugin list"); // set_input ignored
        assert_eq!(editor.submit(), None);
        assert_eq!(editor.history().len(), 1);

        editor.complete(&Ok(ExecOutcome::Output("ok".into())));
        assert!(!editor.is_locked());
        assert_eq!(editor.buffer(), "");
    }

    #[test]
    fn error_replies_render_with_error_styling() {
        let mut editor = editor();
        editor.set_input("user create admin a@b.c pw");
        editor.submit().unwrap();
        editor.complete(&Err("Error creating user: boom".to_string()));

        let last = editor.output().last().unwrap();
        assert_eq!(last.style, Style::Error);
        assert_eq!(last.text, "Error creating user: boom");
    }

    #[test]
    fn multi_line_output_becomes_one_line_per_entry() {
        let mut editor = editor();
        editor.set_input("user list");
        editor.submit().unwrap();
        let before = editor.output().len();
        editor.complete(&Ok(ExecOutcome::Output("Users:\n\nalice (a@b.c) - editor\n".into())));

        let lines: Vec<&str> = editor.output()[before..]
            .iter()
            .map(|l| l.text.as_str())
            .collect();
        // Trailing newline yields a trailing empty line, like the original pane
        assert_eq!(lines, vec!["Users:", "", "alice (a@b.c) - editor", ""]);
    }

    #[test]
    fn local_clear_skips_the_backend_and_keeps_history() {
        let mut editor = editor();
        editor.set_input("help");
        editor.submit().unwrap();
        editor.complete(&Ok(ExecOutcome::Output("stuff".into())));

        editor.set_input("CLS");
        assert_eq!(editor.submit(), None); // no round-trip
        assert!(!editor.is_locked());
        assert!(editor.take_cleared());
        assert!(!editor.take_cleared());

        // Output is back to just the welcome banner
        assert_eq!(editor.output().len(), 2);
        assert_eq!(editor.output()[0].text, "Welcome");
        // History kept both commands
        assert_eq!(editor.history().entries(), &["CLS", "help"]);
    }

    #[test]
    fn clear_reply_from_backend_also_resets_the_pane() {
        let mut editor = editor();
        editor.set_input("wp clear"); // not the local spelling, goes to the backend
        assert_eq!(editor.submit(), Some("wp clear".to_string()));
        editor.complete(&Ok(ExecOutcome::ClearScreen));
        assert!(editor.take_cleared());
        assert_eq!(editor.output().len(), 2);
        assert_eq!(editor.buffer(), "");
        assert!(!editor.is_locked());
    }

    #[test]
    fn navigation_loads_entries_and_restores_blank() {
        let mut editor = editor();
        for cmd in ["a", "b", "c"] {
            editor.set_input(cmd);
            editor.submit().unwrap();
            editor.complete(&Ok(ExecOutcome::Output(String::new())));
        }

        editor.navigate(Direction::Older);
        assert_eq!(editor.buffer(), "c");
        editor.navigate(Direction::Older);
        assert_eq!(editor.buffer(), "b");
        editor.navigate(Direction::Older);
        assert_eq!(editor.buffer(), "a");

        editor.navigate(Direction::Newer);
        assert_eq!(editor.buffer(), "b");
        editor.navigate(Direction::Newer);
        assert_eq!(editor.buffer(), "c");
        editor.navigate(Direction::Newer);
        assert_eq!(editor.buffer(), "");
    }

    #[test]
    fn navigation_is_ignored_while_locked() {
        let mut editor = editor();
        editor.set_input("a");
        editor.submit().unwrap();
        editor.complete(&Ok(ExecOutcome::Output(String::new())));

        editor.set_input("b");
        editor.submit().unwrap();
        editor.navigate(Direction::Older);
        assert_eq!(editor.buffer(), "b"); // unchanged
    }
}
