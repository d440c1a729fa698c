use super::{paint, paint_prompt, LineIo, Output, COMMAND_PROMPT};
use crate::commands::MessageLevel;
use crate::error::{QuizzError, Result};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Line-oriented console over an async reader/writer pair.
///
/// Used for TCP peers and for stdio when nobody is at a terminal. Prefill is
/// ignored: there is no line editor on the other end to put the text into.
pub struct StreamConsole<R, W> {
    reader: R,
    writer: W,
    color: bool,
    closed: bool,
}

impl<R, W> StreamConsole<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            color: false,
            closed: false,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    async fn write_raw(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn read_line(&mut self) -> Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }
        // Peers may send bytes that are not UTF-8; they must not end the session.
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf).await? == 0 {
            self.closed = true;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }
}

#[async_trait]
impl<R, W> LineIo for StreamConsole<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn prompt(&mut self) -> Result<Option<String>> {
        if self.closed {
            return Ok(None);
        }
        let prompt = if self.color {
            paint_prompt(COMMAND_PROMPT)
        } else {
            COMMAND_PROMPT.to_string()
        };
        self.write_raw(&prompt).await?;
        self.read_line().await
    }

    async fn ask(&mut self, question: &str) -> Result<String> {
        if self.closed {
            return Err(QuizzError::Closed);
        }
        let question = if self.color {
            paint_prompt(question)
        } else {
            question.to_string()
        };
        self.write_raw(&question).await?;
        self.read_line().await?.ok_or(QuizzError::Closed)
    }

    fn prefill(&mut self, _text: &str) {}

    async fn close(&mut self) -> Result<()> {
        if !self.closed {
            self.closed = true;
            self.writer.shutdown().await?;
        }
        Ok(())
    }
}

#[async_trait]
impl<R, W> Output for StreamConsole<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn emit(&mut self, line: &str, level: MessageLevel) -> Result<()> {
        let line = if self.color {
            paint(line, level)
        } else {
            line.to_string()
        };
        self.write_raw(&format!("{}\n", line)).await
    }
}
