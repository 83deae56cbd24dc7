//! Crate error type.
//!
//! Gameplay rejections (blocked moves, cooldown, late actions) are outcome values,
//! not errors. Only malformed input and misuse of a closed session end up here.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid direction or command: {0:?}")]
    InvalidDirection(String),
    #[error("Unknown menu choice: {0:?}")]
    UnknownMenuChoice(String),
    #[error("Position ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
    #[error("Session is closed, no new commands are accepted")]
    SessionClosed,
}

pub type Result<T> = core::result::Result<T, GameError>;
