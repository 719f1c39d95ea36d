use thiserror::Error;

pub type InterpreterResult<T> = Result<T, InterpreterError>;

/// Reasons a command is rejected by the [`CommandInterpreter`](crate::CommandInterpreter).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InterpreterError {
    /// Unknown verb, a `PLACE` without a valid heading, or anything other than a
    /// valid `PLACE` as the opening command.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// A `PLACE` whose argument does not have exactly three comma-separated fields.
    #[error("PLACE expects 3 arguments, got {0}")]
    ArgumentError(usize),

    /// A report was requested before the robot was placed.
    #[error("robot has not been placed")]
    NotPlaced,
}

impl InterpreterError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        InterpreterError::InvalidCommand(msg.into())
    }
}

/// Rejected [`TableConfig`](crate::TableConfig) parameters.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("table must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
}

/// Errors that end a [`run_session`](crate::run_session).
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Command {
        line: usize,
        #[source]
        source: InterpreterError,
    },
}
