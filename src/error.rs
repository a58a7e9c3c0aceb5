use thiserror::Error;

/// Errors raised by the search agents and their helpers
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("cannot compute streaks of an empty line")]
    EmptyLine,

    #[error("non-terminal state has no successors")]
    NoSuccessors,

    #[error("bad agent tag: '{0}'")]
    InvalidConfiguration(String),

    #[error("input closed before a move was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
