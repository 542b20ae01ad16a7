use crate::error::BoardError;
use crate::symbols::{CODE_LENGTH, Code, ColorCode};
use std::fmt;

pub const MAX_ATTEMPTS: usize = 9;

/// History of guesses and hints, one row per attempt.
///
/// Attempt `n` lives at row index `MAX_ATTEMPTS - n`, so the board fills from
/// the bottom up and the row labels count down from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    guesses: [Code; MAX_ATTEMPTS],
    hints: [Code; MAX_ATTEMPTS],
    recorded: usize,
}

/// One rendered line of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRow<'a> {
    pub label: usize,
    pub guess: &'a Code,
    pub hint: &'a Code,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            guesses: [[ColorCode::EMPTY; CODE_LENGTH]; MAX_ATTEMPTS],
            hints: [[ColorCode::EMPTY; CODE_LENGTH]; MAX_ATTEMPTS],
            recorded: 0,
        }
    }

    /// Write the guess and hint rows for `attempt` (1-based).
    ///
    /// Attempts must arrive in order starting at 1; a row is never rewritten.
    pub fn record(&mut self, attempt: usize, guess: &Code, hint: &Code) -> Result<(), BoardError> {
        if attempt == 0 || attempt > MAX_ATTEMPTS {
            return Err(BoardError::out_of_range(attempt));
        }
        let expected = self.recorded + 1;
        if attempt != expected {
            return Err(BoardError::OutOfOrder {
                expected,
                found: attempt,
            });
        }

        let row = MAX_ATTEMPTS - attempt;
        self.guesses[row] = *guess;
        self.hints[row] = *hint;
        self.recorded = attempt;
        Ok(())
    }

    pub fn attempts_recorded(&self) -> usize {
        self.recorded
    }

    pub fn is_full(&self) -> bool {
        self.recorded == MAX_ATTEMPTS
    }

    /// Guess and hint recorded for `attempt`, if it has been played.
    pub fn row(&self, attempt: usize) -> Option<(&Code, &Code)> {
        if attempt == 0 || attempt > self.recorded {
            return None;
        }
        let row = MAX_ATTEMPTS - attempt;
        Some((&self.guesses[row], &self.hints[row]))
    }

    /// All rows in display order, labelled from `MAX_ATTEMPTS` down to 1.
    pub fn rows(&self) -> impl Iterator<Item = BoardRow<'_>> {
        self.guesses
            .iter()
            .zip(&self.hints)
            .enumerate()
            .map(|(i, (guess, hint))| BoardRow {
                label: MAX_ATTEMPTS - i,
                guess,
                hint,
            })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            write!(f, "{}: ", row.label)?;
            for peg in row.guess {
                write!(f, "{peg} ")?;
            }
            write!(f, " | ")?;
            for marker in row.hint {
                write!(f, "{marker} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
