use super::{check_fields, QuizStore, DEFAULT_QUIZZES};
use crate::error::{QuizzError, Result};
use crate::model::{Quiz, QuizId};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Default, Serialize, Deserialize)]
struct QuizFile {
    #[serde(default)]
    next_id: QuizId,
    quizzes: Vec<Quiz>,
}

impl QuizFile {
    fn allocate_id(&mut self) -> QuizId {
        // next_id is missing (0) in hand-written files
        let floor = self.quizzes.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let id = self.next_id.max(floor);
        self.next_id = id + 1;
        id
    }
}

/// Quiz storage backed by one JSON file.
///
/// Every call reads the file, and every mutation rewrites it while holding
/// the store lock, so sessions sharing the store never interleave writes.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Open the store, writing the default quizzes if the file does not exist yet.
    pub async fn open_seeded(path: PathBuf) -> Result<Self> {
        let store = Self::new(path);
        if !fs::try_exists(&store.path).await? {
            let mut file = QuizFile::default();
            for (question, answer) in DEFAULT_QUIZZES {
                let id = file.allocate_id();
                file.quizzes
                    .push(Quiz::new(id, question.to_string(), answer.to_string()));
            }
            store.save(&file).await?;
            debug!(path = %store.path.display(), "seeded quiz file");
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<QuizFile> {
        if !fs::try_exists(&self.path).await? {
            return Ok(QuizFile::default());
        }
        let content = fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(QuizFile::default());
        }
        let mut file: QuizFile = serde_json::from_str(&content)?;
        file.quizzes.sort_by_key(|q| q.id);
        Ok(file)
    }

    async fn save(&self, file: &QuizFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(file)?;

        // Write to a sibling and rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl QuizStore for FileStore {
    async fn find_all(&self) -> Result<Vec<Quiz>> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.quizzes)
    }

    async fn find_by_id(&self, id: QuizId) -> Result<Option<Quiz>> {
        let _guard = self.lock.lock().await;
        let file = self.load().await?;
        Ok(file.quizzes.into_iter().find(|q| q.id == id))
    }

    async fn create(&self, question: String, answer: String) -> Result<Quiz> {
        check_fields(&question, &answer)?;
        let _guard = self.lock.lock().await;
        let mut file = self.load().await?;
        let quiz = Quiz::new(file.allocate_id(), question, answer);
        file.quizzes.push(quiz.clone());
        self.save(&file).await?;
        debug!(id = quiz.id, "created quiz");
        Ok(quiz)
    }

    async fn update(&self, quiz: &Quiz) -> Result<Quiz> {
        check_fields(&quiz.question, &quiz.answer)?;
        let _guard = self.lock.lock().await;
        let mut file = self.load().await?;
        let stored = file
            .quizzes
            .iter_mut()
            .find(|q| q.id == quiz.id)
            .ok_or(QuizzError::NotFound(quiz.id))?;
        stored.question = quiz.question.clone();
        stored.answer = quiz.answer.clone();
        stored.updated_at = Utc::now();
        let updated = stored.clone();
        self.save(&file).await?;
        debug!(id = updated.id, "updated quiz");
        Ok(updated)
    }

    async fn delete_by_id(&self, id: QuizId) -> Result<bool> {
        let _guard = self.lock.lock().await;
        let mut file = self.load().await?;
        let before = file.quizzes.len();
        file.quizzes.retain(|q| q.id != id);
        if file.quizzes.len() == before {
            return Ok(false);
        }
        self.save(&file).await?;
        debug!(id, "deleted quiz");
        Ok(true)
    }
}
