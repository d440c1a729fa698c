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
    let mut quiz = find_quiz(store, arg).await?;

    console.prefill(&quiz.question);
    let question = console.ask(" Edit the question: ").await?;
    console.prefill(&quiz.answer);
    let answer = console.ask(" Edit the answer: ").await?;

    quiz.question = question;
    quiz.answer = answer;
    let quiz = store.update(&quiz).await?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Changed quiz {} to: {} => {}",
            quiz.id, quiz.question, quiz.answer
        )))
        .with_affected_quiz(quiz))
}
