//! # Play
//!
//! Asks every stored quiz once, in random order, until the pool runs out or
//! an answer is wrong.
//!
//! ```text
//!              ┌──────────── pool non-empty ────────────┐
//!              ▼                                        │
//!   ┌─► Selecting ──► AwaitingAnswer ──► Correct ───────┤
//!   │       │                │                          │
//!   │  pool empty        wrong answer              pool empty
//!   │       ▼                ▼                          ▼
//!   │   Finished         Incorrect                  Finished
//! start
//! ```
//!
//! The pool is a snapshot taken when the game starts; a record is removed
//! from it before its question is posed, so nothing is asked twice. The score
//! goes up by one per correct answer and is never decremented.

use crate::commands::{CmdMessage, CmdResult, MessageLevel};
use crate::error::Result;
use crate::io::Console;
use crate::model::{Quiz, QuizId};
use crate::store::QuizStore;
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Selecting,
    AwaitingAnswer,
    Correct,
    Incorrect,
    Finished,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Incorrect | Phase::Finished)
    }
}

/// How a game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    pub phase: Phase,
    pub score: u32,
    /// Ids in the order they were asked.
    pub asked: Vec<QuizId>,
}

#[derive(Debug)]
pub struct PlayState {
    pool: Vec<Quiz>,
    current: Option<Quiz>,
    score: u32,
    asked: Vec<QuizId>,
    phase: Phase,
}

impl PlayState {
    pub fn new(pool: Vec<Quiz>) -> Self {
        Self {
            pool,
            current: None,
            score: 0,
            asked: Vec::new(),
            phase: Phase::Selecting,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn current(&self) -> Option<&Quiz> {
        self.current.as_ref()
    }

    /// Selecting → AwaitingAnswer, or Finished when the pool is empty.
    pub fn select<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        debug_assert_eq!(self.phase, Phase::Selecting);
        if self.pool.is_empty() {
            self.phase = Phase::Finished;
            return;
        }
        let quiz = self.pool.swap_remove(rng.gen_range(0..self.pool.len()));
        self.asked.push(quiz.id);
        self.current = Some(quiz);
        self.phase = Phase::AwaitingAnswer;
    }

    /// AwaitingAnswer → Correct or Incorrect.
    pub fn answer(&mut self, given: &str) {
        debug_assert_eq!(self.phase, Phase::AwaitingAnswer);
        let correct = self
            .current
            .take()
            .is_some_and(|quiz| quiz.is_answered_by(given));
        if correct {
            self.score += 1;
            self.phase = Phase::Correct;
        } else {
            self.phase = Phase::Incorrect;
        }
    }

    /// Correct → Selecting, or Finished when the pool is empty.
    pub fn advance(&mut self) {
        debug_assert_eq!(self.phase, Phase::Correct);
        self.phase = if self.pool.is_empty() {
            Phase::Finished
        } else {
            Phase::Selecting
        };
    }

    pub fn outcome(&self) -> PlayOutcome {
        PlayOutcome {
            phase: self.phase,
            score: self.score,
            asked: self.asked.clone(),
        }
    }
}

pub async fn run<S, C, R>(store: &S, console: &mut C, rng: &mut R) -> Result<CmdResult>
where
    S: QuizStore + ?Sized,
    C: Console + ?Sized,
    R: Rng + Send + ?Sized,
{
    let mut state = PlayState::new(store.find_all().await?);
    debug!(pool = state.remaining(), "starting game");

    loop {
        match state.phase() {
            Phase::Selecting => state.select(rng),
            Phase::AwaitingAnswer => {
                let question = state
                    .current()
                    .map(|quiz| format!(" {}? ", quiz.question))
                    .unwrap_or_default();
                let answer = console.ask(&question).await?;
                state.answer(&answer);
            }
            Phase::Correct => {
                console
                    .emit(
                        &format!(" CORRECT - {} hits so far.", state.score()),
                        MessageLevel::Success,
                    )
                    .await?;
                state.advance();
            }
            Phase::Incorrect | Phase::Finished => break,
        }
    }

    let summary = match state.phase() {
        Phase::Incorrect => {
            CmdMessage::error(format!("INCORRECT. Game over. Hits: {}", state.score()))
        }
        _ => CmdMessage::success(format!(
            "Nothing left to ask. Game over. Hits: {}",
            state.score()
        )),
    };

    Ok(CmdResult::default()
        .with_message(summary)
        .with_message(CmdMessage::highlight(state.score().to_string()))
        .with_play(state.outcome()))
}
