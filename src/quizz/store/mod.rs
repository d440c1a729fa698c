//! # Storage Layer
//!
//! This module defines the storage abstraction for quizz. The [`QuizStore`]
//! trait is all the session engine knows about persistence.
//!
//! ## Responsibilities
//!
//! The store is the single authority for:
//! - **Id assignment**: ids are handed out by `create` and never reused
//! - **Field validation**: a record with an empty question or answer is
//!   rejected with [`QuizzError::Validation`], carrying one message per field
//! - **Consistency**: sessions share one store through an `Arc`, so every
//!   implementation serializes its own mutations
//!
//! Deleting an id that has no record is not an error; `delete_by_id` reports
//! whether anything was removed.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage in a single JSON file
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! {
//!   "next_id": 5,
//!   "quizzes": [ { "id": 1, "question": "...", "answer": "...", ... } ]
//! }
//! ```

use crate::error::{QuizzError, Result};
use crate::model::{Quiz, QuizId};
use async_trait::async_trait;

pub mod fs;
pub mod memory;

/// Abstract interface for quiz storage.
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// All records, ordered by id
    async fn find_all(&self) -> Result<Vec<Quiz>>;

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>>;

    /// Validate and persist a new record, assigning its id
    async fn create(&self, question: String, answer: String) -> Result<Quiz>;

    /// Validate and persist changed question/answer text of an existing record
    async fn update(&self, quiz: &Quiz) -> Result<Quiz>;

    /// Remove a record. Returns `false` when there was nothing to remove.
    async fn delete_by_id(&self, id: QuizId) -> Result<bool>;
}

/// Questions every fresh store starts with when seeding is enabled.
pub const DEFAULT_QUIZZES: [(&str, &str); 4] = [
    ("Capital of Italy", "Rome"),
    ("Capital of France", "Paris"),
    ("Capital of Spain", "Madrid"),
    ("Capital of Portugal", "Lisbon"),
];

/// Field-level checks shared by every store implementation.
pub fn check_fields(question: &str, answer: &str) -> Result<()> {
    let mut errors = Vec::new();
    if question.trim().is_empty() {
        errors.push("Question must not be empty.".to_string());
    }
    if answer.trim().is_empty() {
        errors.push("Answer must not be empty.".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(QuizzError::Validation(errors))
    }
}
