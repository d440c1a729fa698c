use super::{paint, paint_prompt, LineIo, Output, COMMAND_PROMPT};
use crate::commands::MessageLevel;
use crate::error::{QuizzError, Result};
use async_trait::async_trait;
use console::Term;
use dialoguer::Input;
use std::io::ErrorKind;

/// Console for a user sitting at a terminal.
///
/// Reads are blocking terminal calls, so each one runs on the blocking pool.
/// A pending prefill is shown as editable text on the next `ask`, letting the
/// user change the current value instead of retyping it.
pub struct TermConsole {
    term: Term,
    initial_text: Option<String>,
    closed: bool,
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl TermConsole {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            initial_text: None,
            closed: false,
        }
    }

    /// True when stdin and stdout are both attached to a terminal.
    pub fn is_attended() -> bool {
        console::user_attended() && Term::stdout().features().is_attended()
    }

    async fn read_line(
        &mut self,
        prompt: String,
        initial_text: Option<String>,
    ) -> Result<Option<String>> {
        let term = self.term.clone();
        let read = tokio::task::spawn_blocking(move || -> std::io::Result<String> {
            match initial_text {
                Some(text) => Input::<String>::new()
                    .with_prompt(prompt.trim_end().trim_end_matches(':').to_string())
                    .with_initial_text(text)
                    .allow_empty(true)
                    .interact_text_on(&term),
                None => {
                    term.write_str(&prompt)?;
                    term.read_line()
                }
            }
        })
        .await
        .map_err(std::io::Error::other)?;

        match read {
            Ok(line) if !is_end_of_input(&line) => Ok(Some(line.trim().to_string())),
            Ok(_) => {
                self.closed = true;
                Ok(None)
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                self.closed = true;
                Ok(None)
            }
            Err(e) => Err(QuizzError::Io(e)),
        }
    }
}

/// The terminal is read in raw mode, so Ctrl-D arrives as a literal EOT.
fn is_end_of_input(line: &str) -> bool {
    line.trim() == "\u{4}"
}

#[async_trait]
impl LineIo for TermConsole {
    async fn prompt(&mut self) -> Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }
        self.read_line(paint_prompt(COMMAND_PROMPT), None).await
    }

    async fn ask(&mut self, question: &str) -> Result<String> {
        if self.closed {
            return Err(QuizzError::Closed);
        }
        let initial_text = self.initial_text.take();
        let prompt = match initial_text {
            Some(_) => question.to_string(),
            None => paint_prompt(question),
        };
        self.read_line(prompt, initial_text)
            .await?
            .ok_or(QuizzError::Closed)
    }

    fn prefill(&mut self, text: &str) {
        self.initial_text = Some(text.to_string());
    }

    async fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}

#[async_trait]
impl Output for TermConsole {
    async fn emit(&mut self, line: &str, level: MessageLevel) -> Result<()> {
        self.term.write_line(&paint(line, level))?;
        Ok(())
    }
}
