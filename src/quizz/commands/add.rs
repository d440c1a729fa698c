use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::io::Console;
use crate::store::QuizStore;

pub async fn run<S, C>(store: &S, console: &mut C) -> Result<CmdResult>
where
    S: QuizStore + ?Sized,
    C: Console + ?Sized,
{
    let question = console.ask(" Enter a question: ").await?;
    let answer = console.ask(" Enter the answer: ").await?;

    let quiz = store.create(question, answer).await?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Added: {} => {}",
            quiz.question, quiz.answer
        )))
        .with_affected_quiz(quiz))
}
