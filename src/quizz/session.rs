//! # Session
//!
//! One conversation between a [`Console`] and a shared [`QuizStore`].
//!
//! The loop is: prompt → parse → run the command → emit its messages (or
//! its error) → prompt again. A command's failure never ends the session;
//! only `quit` or the end of input does. Once the input has ended nothing
//! else is emitted and no further prompt is shown.

use crate::commands::{self, CmdResult, MessageLevel};
use crate::dispatch::Command;
use crate::error::{QuizzError, Result};
use crate::io::Console;
use crate::store::QuizStore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const BANNER: &str = "Welcome to quizz. Type 'help' to see all commands.";

/// What the session does after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
    Closed,
}

pub struct Session<S: ?Sized, C, R = StdRng> {
    store: Arc<S>,
    console: C,
    rng: R,
    authors: Vec<String>,
}

impl<S: QuizStore + ?Sized, C: Console> Session<S, C, StdRng> {
    pub fn new(store: Arc<S>, console: C) -> Self {
        Self {
            store,
            console,
            rng: StdRng::from_entropy(),
            authors: Vec::new(),
        }
    }
}

impl<S: QuizStore + ?Sized, C: Console, R: Rng + Send> Session<S, C, R> {
    pub fn with_rng<R2: Rng + Send>(self, rng: R2) -> Session<S, C, R2> {
        Session {
            store: self.store,
            console: self.console,
            rng,
            authors: self.authors,
        }
    }

    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    /// Run until `quit` or end of input, handing the console back.
    pub async fn run(mut self) -> C {
        info!("session started");
        if let Err(e) = self.console.emit(BANNER, MessageLevel::Info).await {
            warn!(error = %e, "could not greet peer");
            return self.console;
        }

        loop {
            let line = match self.console.prompt().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "failed to read command");
                    break;
                }
            };

            match self.execute(&line).await {
                Ok(Flow::Continue) => {}
                Ok(flow) => {
                    debug!(?flow, "session ending");
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "console failed");
                    break;
                }
            }
        }

        info!("session ended");
        self.console
    }

    /// Handle one command line.
    ///
    /// Errors returned here come from the console itself; command failures
    /// are reported to the user and yield `Flow::Continue`.
    pub async fn execute(&mut self, line: &str) -> Result<Flow> {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                self.report(&e).await?;
                return Ok(Flow::Continue);
            }
        };
        debug!(command = command.name(), "dispatching");

        if command == Command::Quit {
            if let Err(e) = self.console.close().await {
                warn!(error = %e, "failed to close console");
            }
            return Ok(Flow::Quit);
        }

        match self.dispatch(command).await {
            Ok(result) => self.render(&result).await?,
            Err(QuizzError::Closed) => return Ok(Flow::Closed),
            Err(e) => self.report(&e).await?,
        }
        Ok(Flow::Continue)
    }

    async fn dispatch(&mut self, command: Command) -> Result<CmdResult> {
        let store = self.store.as_ref();
        match command {
            Command::Help => Ok(commands::help::run()),
            Command::List => commands::list::run(store).await,
            Command::Show(arg) => commands::show::run(store, arg.as_deref()).await,
            Command::Add => commands::add::run(store, &mut self.console).await,
            Command::Delete(arg) => commands::delete::run(store, arg.as_deref()).await,
            Command::Edit(arg) => {
                commands::edit::run(store, &mut self.console, arg.as_deref()).await
            }
            Command::Test(arg) => {
                commands::test::run(store, &mut self.console, arg.as_deref()).await
            }
            Command::Play => commands::play::run(store, &mut self.console, &mut self.rng).await,
            Command::Credits => Ok(commands::credits::run(&self.authors)),
            Command::Quit => Ok(CmdResult::default()),
        }
    }

    async fn render(&mut self, result: &CmdResult) -> Result<()> {
        for message in &result.messages {
            self.console.emit(&message.content, message.level).await?;
        }
        Ok(())
    }

    async fn report(&mut self, err: &QuizzError) -> Result<()> {
        debug!(error = %err, "command failed");
        for line in err.messages() {
            self.console.emit(&line, MessageLevel::Error).await?;
        }
        Ok(())
    }
}
