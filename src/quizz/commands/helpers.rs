use crate::error::{QuizzError, Result};
use crate::model::Quiz;
use crate::store::QuizStore;
use crate::validate::validate_id;

/// Validate a raw id argument and fetch its quiz.
pub async fn find_quiz<S: QuizStore + ?Sized>(store: &S, arg: Option<&str>) -> Result<Quiz> {
    let id = validate_id(arg)?;
    store
        .find_by_id(id)
        .await?
        .ok_or(QuizzError::NotFound(id))
}

/// `[id]: question => answer`
pub fn describe(quiz: &Quiz) -> String {
    format!("[{}]: {} => {}", quiz.id, quiz.question, quiz.answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[tokio::test]
    async fn resolves_existing_quiz() {
        let store = StoreFixture::new().with_quiz("2+2", "4").await.store;
        let quiz = find_quiz(&store, Some("1")).await.unwrap();
        assert_eq!(describe(&quiz), "[1]: 2+2 => 4");
    }

    #[tokio::test]
    async fn validation_comes_before_lookup() {
        let store = StoreFixture::new().store;
        assert!(matches!(
            find_quiz(&store, None).await,
            Err(QuizzError::MissingParameter)
        ));
        assert!(matches!(
            find_quiz(&store, Some("one")).await,
            Err(QuizzError::NotANumber)
        ));
        assert!(matches!(
            find_quiz(&store, Some("1")).await,
            Err(QuizzError::NotFound(1))
        ));
    }
}
