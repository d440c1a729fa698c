use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::QuizStore;
use crate::validate::validate_id;

pub async fn run<S: QuizStore + ?Sized>(store: &S, arg: Option<&str>) -> Result<CmdResult> {
    let id = validate_id(arg)?;

    let message = if store.delete_by_id(id).await? {
        CmdMessage::success(format!("Deleted quiz {}.", id))
    } else {
        CmdMessage::warning(format!("Nothing to delete for id={}.", id))
    };
    Ok(CmdResult::default().with_message(message))
}
