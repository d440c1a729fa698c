use crate::commands::{CmdMessage, CmdResult};

pub fn run(authors: &[String]) -> CmdResult {
    let mut result = CmdResult::default().with_message(CmdMessage::plain("Authors:"));
    for author in authors {
        result.add_message(CmdMessage::success(author.clone()));
    }
    result
}
