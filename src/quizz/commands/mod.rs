//! # Command Layer
//!
//! One module per session command. Every command is a short pipeline:
//! validate the argument, talk to the store, ask the user follow-up
//! questions where needed, and hand back a [`CmdResult`].
//!
//! Commands never write to the console directly except through
//! [`Console::ask`](crate::io::LineIo::ask) and, for `play`, the per-round
//! status lines. Everything else is returned as [`CmdMessage`]s and emitted by
//! the session, which also owns error reporting and re-prompting.

use crate::model::Quiz;

pub mod add;
pub mod credits;
pub mod delete;
pub mod edit;
pub mod help;
pub mod helpers;
pub mod list;
pub mod play;
pub mod show;
pub mod test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Plain,
    Info,
    Success,
    Warning,
    Error,
    Highlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Plain,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }

    pub fn highlight(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Highlight,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_quizzes: Vec<Quiz>,
    pub listed_quizzes: Vec<Quiz>,
    pub play: Option<play::PlayOutcome>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_quiz(mut self, quiz: Quiz) -> Self {
        self.affected_quizzes.push(quiz);
        self
    }

    pub fn with_listed_quizzes(mut self, quizzes: Vec<Quiz>) -> Self {
        self.listed_quizzes = quizzes;
        self
    }

    pub fn with_play(mut self, outcome: play::PlayOutcome) -> Self {
        self.play = Some(outcome);
        self
    }
}
