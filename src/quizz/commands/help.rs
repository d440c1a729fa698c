use crate::commands::{CmdMessage, CmdResult};

pub const COMMANDS: [(&str, &str); 10] = [
    ("h|help", "Show this help."),
    ("list", "List all quizzes."),
    ("show <id>", "Show the question and answer of a quiz."),
    ("add", "Add a new quiz interactively."),
    ("delete <id>", "Delete a quiz."),
    ("edit <id>", "Edit a quiz."),
    ("test <id>", "Try to answer a quiz."),
    ("p|play", "Play: answer every quiz in random order."),
    ("credits", "Show the credits."),
    ("q|quit", "Leave the program."),
];

pub fn run() -> CmdResult {
    let mut result = CmdResult::default().with_message(CmdMessage::plain("Commands:"));
    for (usage, description) in COMMANDS {
        result.add_message(CmdMessage::plain(format!(" {} - {}", usage, description)));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_command() {
        let result = run();
        assert_eq!(result.messages.len(), COMMANDS.len() + 1);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content == " p|play - Play: answer every quiz in random order."));
    }
}
