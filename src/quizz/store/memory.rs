use super::{check_fields, QuizStore};
use crate::error::{QuizzError, Result};
use crate::model::{Quiz, QuizId};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Records>,
}

#[derive(Default)]
struct Records {
    quizzes: BTreeMap<QuizId, Quiz>,
    last_id: QuizId,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizStore for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Quiz>> {
        let records = self.inner.lock().await;
        Ok(records.quizzes.values().cloned().collect())
    }

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>> {
        let records = self.inner.lock().await;
        Ok(records.quizzes.get(&id).cloned())
    }

    async fn create(&self, question: String, answer: String) -> Result<Quiz> {
        check_fields(&question, &answer)?;
        let mut records = self.inner.lock().await;
        records.last_id += 1;
        let quiz = Quiz::new(records.last_id, question, answer);
        records.quizzes.insert(quiz.id, quiz.clone());
        Ok(quiz)
    }

    async fn update(&self, quiz: &Quiz) -> Result<Quiz> {
        check_fields(&quiz.question, &quiz.answer)?;
        let mut records = self.inner.lock().await;
        let stored = records
            .quizzes
            .get_mut(&quiz.id)
            .ok_or(QuizzError::NotFound(quiz.id))?;
        stored.question = quiz.question.clone();
        stored.answer = quiz.answer.clone();
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete_by_id(&self, id: QuizId) -> Result<bool> {
        let mut records = self.inner.lock().await;
        Ok(records.quizzes.remove(&id).is_some())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub async fn with_quiz(self, question: &str, answer: &str) -> Self {
            self.store
                .create(question.to_string(), answer.to_string())
                .await
                .unwrap();
            self
        }

        pub async fn with_quizzes(mut self, count: usize) -> Self {
            for i in 0..count {
                let question = format!("Question {}", i + 1);
                let answer = format!("Answer {}", i + 1);
                self = self.with_quiz(&question, &answer).await;
            }
            self
        }
    }

    /// A store whose backend is gone: every call fails with a store error.
    pub struct FailingStore;

    impl FailingStore {
        fn unavailable<T>() -> Result<T> {
            Err(QuizzError::Store("quiz store unavailable".into()))
        }
    }

    #[async_trait]
    impl QuizStore for FailingStore {
        async fn find_all(&self) -> Result<Vec<Quiz>> {
            Self::unavailable()
        }

        async fn find_by_id(&self, _id: QuizId) -> Result<Option<Quiz>> {
            Self::unavailable()
        }

        async fn create(&self, _question: String, _answer: String) -> Result<Quiz> {
            Self::unavailable()
        }

        async fn update(&self, _quiz: &Quiz) -> Result<Quiz> {
            Self::unavailable()
        }

        async fn delete_by_id(&self, _id: QuizId) -> Result<bool> {
            Self::unavailable()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[tokio::test]
    async fn assigns_sequential_ids() {
        let store = InMemoryStore::new();
        let a = store.create("a".into(), "1".into()).await.unwrap();
        let b = store.create("b".into(), "2".into()).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = StoreFixture::new().with_quizzes(2).await.store;
        store.delete_by_id(2).await.unwrap();
        let next = store.create("c".into(), "3".into()).await.unwrap();
        assert_eq!(next.id, 3);
    }

    #[tokio::test]
    async fn rejects_empty_fields() {
        let store = InMemoryStore::new();
        let err = store.create("".into(), "".into()).await.unwrap_err();
        assert!(matches!(err, QuizzError::Validation(ref e) if e.len() == 2));
        assert!(store.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_changes_text_only() {
        let store = StoreFixture::new().with_quiz("2+2", "4").await.store;
        let mut quiz = store.find_by_id(1).await.unwrap().unwrap();
        quiz.question = "3+3".into();
        quiz.answer = "6".into();
        let updated = store.update(&quiz).await.unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.question, "3+3");
        assert_eq!(updated.created_at, quiz.created_at);
    }

    #[tokio::test]
    async fn update_of_missing_record_is_not_found() {
        let store = InMemoryStore::new();
        let ghost = Quiz::new(9, "q".into(), "a".into());
        assert!(matches!(
            store.update(&ghost).await,
            Err(QuizzError::NotFound(9))
        ));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = StoreFixture::new().with_quizzes(1).await.store;
        assert!(store.delete_by_id(1).await.unwrap());
        assert!(!store.delete_by_id(1).await.unwrap());
    }
}
