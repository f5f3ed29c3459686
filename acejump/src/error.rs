use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reasons an entry point refuses to start, or key notation fails to parse.
///
/// Nothing past invocation fails: invalid labels, exhausted alphabets and cancelled
/// prompts all end the session quietly with panes restored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("A jump session is already active")]
    SessionActive,

    #[error("No pane to jump in")]
    NoPanes,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Unclosed special key notation at '<{0}'")]
    UnclosedKey(String),

    #[error("Unknown special key: <{0}>")]
    UnknownKey(String),
}
