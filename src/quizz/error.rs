use crate::model::QuizId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizzError {
    #[error("Missing <id> parameter.")]
    MissingParameter,

    #[error("The <id> parameter is not a number.")]
    NotANumber,

    #[error("No quiz associated with id={0}.")]
    NotFound(QuizId),

    #[error("Invalid quiz:")]
    Validation(Vec<String>),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown command: '{0}'")]
    UnknownCommand(String),

    /// The input stream ended; the session is over.
    #[error("Session closed")]
    Closed,
}

impl QuizzError {
    /// Lines shown to the user for this error.
    ///
    /// Validation failures expand into a header followed by one line per
    /// rejected field. Everything else is a single line.
    pub fn messages(&self) -> Vec<String> {
        match self {
            QuizzError::Validation(fields) => std::iter::once(self.to_string())
                .chain(fields.iter().cloned())
                .collect(),
            QuizzError::UnknownCommand(_) => vec![
                self.to_string(),
                "Use 'help' to see all commands.".to_string(),
            ],
            other => vec![other.to_string()],
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, QuizzError::Closed)
    }
}

pub type Result<T> = std::result::Result<T, QuizzError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_lists_every_field() {
        let err = QuizzError::Validation(vec![
            "Question must not be empty.".into(),
            "Answer must not be empty.".into(),
        ]);
        assert_eq!(
            err.messages(),
            vec![
                "Invalid quiz:",
                "Question must not be empty.",
                "Answer must not be empty.",
            ]
        );
    }

    #[test]
    fn other_errors_are_one_line() {
        assert_eq!(
            QuizzError::NotFound(99).messages(),
            vec!["No quiz associated with id=99."]
        );
        assert_eq!(QuizzError::Store("db down".into()).messages().len(), 1);
    }
}
