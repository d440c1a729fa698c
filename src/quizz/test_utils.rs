use crate::commands::MessageLevel;
use crate::error::{QuizzError, Result};
use crate::io::{LineIo, Output};
use async_trait::async_trait;
use std::collections::VecDeque;

/// Console driven by a fixed script of input lines.
///
/// Command lines and answers come from the same queue, in order. When the
/// queue runs dry the console behaves like a closed stream.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub emitted: Vec<(String, MessageLevel)>,
    pub asked: Vec<String>,
    pub prefilled: Vec<String>,
    pub prompts: usize,
    pub closed: bool,
}

impl ScriptedConsole {
    pub fn new<I, T>(inputs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Emitted lines without their levels.
    pub fn lines(&self) -> Vec<&str> {
        self.emitted.iter().map(|(line, _)| line.as_str()).collect()
    }

    pub fn output(&self) -> String {
        self.lines().join("\n")
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

#[async_trait]
impl LineIo for ScriptedConsole {
    async fn prompt(&mut self) -> Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }
        self.prompts += 1;
        Ok(self.inputs.pop_front().map(|line| line.trim().to_string()))
    }

    async fn ask(&mut self, question: &str) -> Result<String> {
        if self.closed {
            return Err(QuizzError::Closed);
        }
        self.asked.push(question.to_string());
        self.inputs
            .pop_front()
            .map(|line| line.trim().to_string())
            .ok_or(QuizzError::Closed)
    }

    fn prefill(&mut self, text: &str) {
        self.prefilled.push(text.to_string());
    }

    async fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}

#[async_trait]
impl Output for ScriptedConsole {
    async fn emit(&mut self, line: &str, level: MessageLevel) -> Result<()> {
        self.emitted.push((line.to_string(), level));
        Ok(())
    }
}
