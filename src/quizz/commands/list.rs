use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::QuizStore;

pub async fn run<S: QuizStore + ?Sized>(store: &S) -> Result<CmdResult> {
    let quizzes = store.find_all().await?;

    let mut result = CmdResult::default();
    if quizzes.is_empty() {
        result.add_message(CmdMessage::info("No quizzes found."));
    }
    for quiz in &quizzes {
        result.add_message(CmdMessage::plain(format!(
            "[{}]: {}",
            quiz.id, quiz.question
        )));
    }
    Ok(result.with_listed_quizzes(quizzes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuizzError;
    use crate::store::memory::fixtures::{FailingStore, StoreFixture};

    #[tokio::test]
    async fn lists_questions_without_answers() {
        let store = StoreFixture::new()
            .with_quiz("2+2", "4")
            .await
            .with_quiz("Capital of Spain", "Madrid")
            .await
            .store;

        let result = run(&store).await.unwrap();
        assert_eq!(result.listed_quizzes.len(), 2);
        let lines: Vec<_> = result.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(lines, vec!["[1]: 2+2", "[2]: Capital of Spain"]);
    }

    #[tokio::test]
    async fn empty_store_says_so() {
        let store = StoreFixture::new().store;
        let result = run(&store).await.unwrap();
        assert!(result.listed_quizzes.is_empty());
        assert_eq!(result.messages, vec![CmdMessage::info("No quizzes found.")]);
    }

    #[tokio::test]
    async fn store_failure_replaces_the_listing() {
        let err = run(&FailingStore).await.unwrap_err();
        assert!(matches!(err, QuizzError::Store(_)));
        assert_eq!(err.messages(), vec!["Store error: quiz store unavailable"]);
    }
}
