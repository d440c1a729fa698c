//! Maps a raw command line onto a [`Command`].
//!
//! The first whitespace-separated token names the command (case-insensitive,
//! with the `h`, `p` and `q` shorthands). Whatever follows is kept verbatim,
//! minus leading whitespace, for the commands that take an id; the others
//! ignore it.

use crate::error::{QuizzError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Show(Option<String>),
    Add,
    Delete(Option<String>),
    Edit(Option<String>),
    Test(Option<String>),
    Play,
    Credits,
    Quit,
}

impl Command {
    /// Parse one input line. An empty line is `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (token, rest) = match line.split_once(char::is_whitespace) {
            Some((token, rest)) => (token, rest.trim_start()),
            None => (line, ""),
        };
        let arg = (!rest.is_empty()).then(|| rest.to_string());

        let command = match token.to_lowercase().as_str() {
            "h" | "help" => Command::Help,
            "list" => Command::List,
            "show" => Command::Show(arg),
            "add" => Command::Add,
            "delete" => Command::Delete(arg),
            "edit" => Command::Edit(arg),
            "test" => Command::Test(arg),
            "p" | "play" => Command::Play,
            "credits" => Command::Credits,
            "q" | "quit" => Command::Quit,
            _ => return Err(QuizzError::UnknownCommand(token.to_string())),
        };
        Ok(Some(command))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::List => "list",
            Command::Show(_) => "show",
            Command::Add => "add",
            Command::Delete(_) => "delete",
            Command::Edit(_) => "edit",
            Command::Test(_) => "test",
            Command::Play => "play",
            Command::Credits => "credits",
            Command::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn aliases_and_case() {
        assert_eq!(parse("h"), Command::Help);
        assert_eq!(parse("HELP"), Command::Help);
        assert_eq!(parse("P"), Command::Play);
        assert_eq!(parse("play"), Command::Play);
        assert_eq!(parse("q"), Command::Quit);
        assert_eq!(parse("Quit"), Command::Quit);
        assert_eq!(parse("CREDITS"), Command::Credits);
    }

    #[test]
    fn argument_is_passed_through() {
        assert_eq!(parse("show 1"), Command::Show(Some("1".into())));
        assert_eq!(parse("edit   3abc"), Command::Edit(Some("3abc".into())));
        assert_eq!(parse("test\t2 more"), Command::Test(Some("2 more".into())));
        assert_eq!(parse("delete"), Command::Delete(None));
    }

    #[test]
    fn commands_without_arguments_ignore_trailing_text() {
        assert_eq!(parse("list everything"), Command::List);
        assert_eq!(parse("add now"), Command::Add);
    }

    #[test]
    fn empty_line_is_nothing() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn unknown_command_is_an_error() {
        match Command::parse("frobnicate 3") {
            Err(QuizzError::UnknownCommand(token)) => assert_eq!(token, "frobnicate"),
            other => panic!("expected unknown command, got {:?}", other),
        }
    }
}
