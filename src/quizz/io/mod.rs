//! # Console Layer
//!
//! Sessions talk to the user through two narrow traits:
//!
//! - [`LineIo`]: read the next command line, ask a follow-up question, offer
//!   editable default text, close the session
//! - [`Output`]: emit one line with a display hint
//!
//! [`Console`] is implemented for anything providing both. Nothing in the
//! command layer knows whether it is talking to a terminal, a pipe or a TCP
//! peer.
//!
//! ## Implementations
//!
//! - [`stream::StreamConsole`]: any async reader/writer pair (TCP peers, piped stdio)
//! - [`terminal::TermConsole`]: an attended terminal, with real prefilled prompts
//! - `test_utils::ScriptedConsole`: scripted input for tests
//!
//! ## End of Input
//!
//! `prompt` returns `Ok(None)` and `ask` fails with [`QuizzError::Closed`]
//! once the input ends. The session treats both as the end of the
//! conversation and never prompts again.
//!
//! [`QuizzError::Closed`]: crate::error::QuizzError::Closed

use crate::commands::MessageLevel;
use crate::error::Result;
use async_trait::async_trait;
use colored::Colorize;

pub mod stream;
pub mod terminal;

pub const COMMAND_PROMPT: &str = "quiz > ";

#[async_trait]
pub trait LineIo: Send {
    /// Show the command prompt and read the next command line.
    async fn prompt(&mut self) -> Result<Option<String>>;

    /// Pose `question` and wait for one trimmed line of answer.
    async fn ask(&mut self, question: &str) -> Result<String>;

    /// Offer `text` as editable default for the next `ask`.
    fn prefill(&mut self, text: &str);

    async fn close(&mut self) -> Result<()>;
}

#[async_trait]
pub trait Output: Send {
    async fn emit(&mut self, line: &str, level: MessageLevel) -> Result<()>;
}

pub trait Console: LineIo + Output {}

impl<T: LineIo + Output + ?Sized> Console for T {}

pub fn paint(line: &str, level: MessageLevel) -> String {
    match level {
        MessageLevel::Plain => line.to_string(),
        MessageLevel::Info => line.dimmed().to_string(),
        MessageLevel::Success => line.green().to_string(),
        MessageLevel::Warning => line.yellow().to_string(),
        MessageLevel::Error => line.red().to_string(),
        MessageLevel::Highlight => line.magenta().bold().to_string(),
    }
}

pub fn paint_prompt(text: &str) -> String {
    text.red().to_string()
}
