//! Error types for contract violations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: {play}")]
    IllegalMove { play: String },

    #[error("the game is not over yet")]
    GameNotOver,

    #[error("the game is already over")]
    GameOver,

    #[error("invalid board '{board}': {reason}")]
    InvalidBoard { board: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn illegal<M: std::fmt::Display>(m: &M) -> Self {
        Error::IllegalMove {
            play: m.to_string(),
        }
    }
}
