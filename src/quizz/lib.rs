//! # Quizz Architecture
//!
//! Quizz is an interactive quiz trainer. A user types short commands against
//! a collection of question/answer pairs, and can play a randomized game that
//! scores consecutive correct answers.
//!
//! The same session engine serves a local terminal and TCP peers: nothing
//! below the console layer knows which one it is talking to.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs)                                  │
//! │  - Parses arguments, loads config, sets up logging          │
//! │  - Picks a console (terminal or stream) or starts the server│
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs, dispatch.rs, server.rs)               │
//! │  - Reads a line, maps it to a Command, runs it              │
//! │  - Emits results or errors, then prompts again              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One pipeline per command: validate → store → result      │
//! │  - Returns CmdResult; asks follow-ups through the Console   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)       Console Layer (io/)           │
//! │  - QuizStore trait            - LineIo + Output traits      │
//! │  - FileStore, InMemoryStore   - TermConsole, StreamConsole  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Handling
//!
//! Every command failure is a [`error::QuizzError`]. The session turns it into
//! one or more lines for the user and keeps going; a failed command never
//! ends the session. The only ways out are `quit` and the end of input.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests against `InMemoryStore` with
//!    a scripted console. The play state machine is also tested directly
//!    with a seeded RNG.
//! 2. **Session** (`session.rs`): whole conversations through a scripted
//!    console.
//! 3. **Binary** (`tests/`): piped stdin end to end, and TCP peers against an
//!    in-process server.
//!
//! ## Module Overview
//!
//! - [`session`]: The read → dispatch → render → prompt loop
//! - [`dispatch`]: Command line parsing
//! - [`commands`]: One module per command, plus the play engine
//! - [`validate`]: Id argument validation
//! - [`store`]: Storage abstraction and implementations
//! - [`io`]: Console abstraction and implementations
//! - [`server`]: TCP front end
//! - [`model`]: The `Quiz` record
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod io;
pub mod model;
pub mod server;
pub mod session;
pub mod store;
pub mod validate;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
