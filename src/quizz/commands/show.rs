use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::QuizStore;

use super::helpers::{describe, find_quiz};

pub async fn run<S: QuizStore + ?Sized>(store: &S, arg: Option<&str>) -> Result<CmdResult> {
    let quiz = find_quiz(store, arg).await?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::plain(describe(&quiz)))
        .with_affected_quiz(quiz))
}
