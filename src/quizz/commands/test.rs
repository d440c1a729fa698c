use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::io::Console;
use crate::store::QuizStore;

use super::helpers::find_quiz;

pub async fn run<S, C>(store: &S, console: &mut C, arg: Option<&str>) -> Result<CmdResult>
where
    S: QuizStore + ?Sized,
    C: Console + ?Sized,
{
    let quiz = find_quiz(store, arg).await?;
    let answer = console.ask(&format!(" {}? ", quiz.question)).await?;

    let result = if quiz.is_answered_by(&answer) {
        CmdResult::default()
            .with_message(CmdMessage::plain("Your answer is correct."))
            .with_message(CmdMessage::success("Correct"))
    } else {
        CmdResult::default()
            .with_message(CmdMessage::plain("Your answer is incorrect."))
            .with_message(CmdMessage::error("Incorrect"))
    };
    Ok(result.with_affected_quiz(quiz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::test_utils::ScriptedConsole;

    async fn answer(reply: &str) -> CmdResult {
        let store = StoreFixture::new().with_quiz("2+2", "4").await.store;
        let mut console = ScriptedConsole::new([reply]);
        let result = run(&store, &mut console, Some("1")).await.unwrap();
        assert_eq!(console.asked, vec![" 2+2? "]);
        result
    }

    #[tokio::test]
    async fn right_answer_is_correct() {
        let result = answer("4").await;
        assert_eq!(result.messages[1].level, MessageLevel::Success);
    }

    #[tokio::test]
    async fn wrong_answer_is_incorrect_without_retry() {
        let result = answer("5").await;
        assert_eq!(result.messages[0].content, "Your answer is incorrect.");
        assert_eq!(result.messages[1].level, MessageLevel::Error);
    }

    #[tokio::test]
    async fn comparison_ignores_case_and_spacing() {
        let store = StoreFixture::new()
            .with_quiz("Capital of France", "Paris")
            .await
            .store;
        for reply in ["Paris", " paris ", "PARIS"] {
            let mut console = ScriptedConsole::new([reply]);
            let result = run(&store, &mut console, Some("1")).await.unwrap();
            assert_eq!(result.messages[1], CmdMessage::success("Correct"), "{reply}");
        }
    }
}
