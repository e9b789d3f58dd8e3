//! Error types for chess-session-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("illegal move: {from}{to} cannot be played in the current position")]
    IllegalMove { from: String, to: String },

    #[error("'{0}' is not a valid square name")]
    MalformedSquare(String),

    #[error("'{0}' is not a valid navigation count")]
    InvalidNavigationCount(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("engine unavailable: {0}")]
    EngineUnavailable(String),
}

impl Error {
    /// Status code the protocol layer attaches to this error. Every variant
    /// is recoverable: the session is left untouched and the server keeps
    /// serving.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::IllegalMove { .. }
            | Error::MalformedSquare(_)
            | Error::InvalidNavigationCount(_)
            | Error::InvalidFen(_) => 400,
            Error::EngineUnavailable(_) => 503,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
