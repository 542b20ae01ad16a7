use std::io;

use crate::board::MAX_ATTEMPTS;
use crate::symbols::CODE_LENGTH;

/// A guess line the player typed could not be turned into a code.
///
/// Recoverable: the game reports it and asks again for the same attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidGuessFormat {
    #[error("expected {expected} color symbols separated by '-', found {found}")]
    WrongTokenCount { expected: usize, found: usize },

    #[error("unrecognized color symbol '{0}'")]
    UnknownSymbol(String),
}

impl InvalidGuessFormat {
    pub(crate) fn wrong_count(found: usize) -> Self {
        Self::WrongTokenCount {
            expected: CODE_LENGTH,
            found,
        }
    }
}

/// Errors raised when writing to the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("attempt {attempt} is outside the board (1..={max})")]
    AttemptOutOfRange { attempt: usize, max: usize },

    #[error("attempt {found} recorded out of order (expected attempt {expected})")]
    OutOfOrder { expected: usize, found: usize },
}

impl BoardError {
    pub(crate) fn out_of_range(attempt: usize) -> Self {
        Self::AttemptOutOfRange {
            attempt,
            max: MAX_ATTEMPTS,
        }
    }
}

/// Errors that end a game early.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("failed to read player input: {0}")]
    Io(#[from] io::Error),

    #[error("input closed before the game finished")]
    InputClosed,

    #[error("game aborted by the player")]
    Aborted,

    #[error("the game is already over")]
    GameOver,

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}
