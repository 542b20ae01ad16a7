use crate::board::{Board, MAX_ATTEMPTS};
use crate::error::{GameError, InvalidGuessFormat};
use crate::scoring::{Hint, score};
use crate::secret::Secret;
use crate::symbols::Guess;
use crate::{debug_log, info_log};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Exhausted,
}

/// Result of scoring one submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub attempt: usize,
    pub hint: Hint,
    pub status: GameStatus,
}

/// Final state handed back once the loop terminates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub outcome: GameOutcome,
    pub attempts: usize,
    pub secret: Secret,
    pub board: Board,
}

/// Player-facing side of the game. Implemented by the line console and the TUI.
pub trait GameInterface {
    fn display_board(&mut self, board: &Board);
    fn display_attempt_prompt(&mut self, attempt: usize);
    /// Block until the player submits a line.
    fn read_guess_line(&mut self) -> Result<String, GameError>;
    fn display_invalid_guess(&mut self, error: &InvalidGuessFormat);
    fn display_result(&mut self, report: &GameReport);
}

/// A single game: the secret, the board and the attempt counter.
#[derive(Debug, Clone)]
pub struct Game {
    secret: Secret,
    board: Board,
    attempt: usize,
    status: GameStatus,
}

impl Game {
    pub fn new(secret: Secret) -> Self {
        Self {
            secret,
            board: Board::new(),
            attempt: 0,
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of attempts consumed so far.
    pub fn attempts(&self) -> usize {
        self.attempt
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Score a guess, record it and advance the state machine.
    pub fn submit(&mut self, guess: &Guess) -> Result<Turn, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let attempt = self.attempt + 1;
        let hint = score(&self.secret, guess);
        self.board.record(attempt, guess.code(), hint.markers())?;
        self.attempt = attempt;
        debug_log!("attempt {attempt}: guess {guess} scored {hint}");

        self.status = if hint.is_win() {
            GameStatus::Won
        } else if attempt >= MAX_ATTEMPTS {
            GameStatus::Exhausted
        } else {
            GameStatus::InProgress
        };

        Ok(Turn {
            attempt,
            hint,
            status: self.status,
        })
    }

    /// Snapshot of a finished game. `None` while the game is still running.
    pub fn report(&self) -> Option<GameReport> {
        let outcome = match self.status {
            GameStatus::InProgress => return None,
            GameStatus::Won => GameOutcome::Won,
            GameStatus::Exhausted => GameOutcome::Exhausted,
        };
        Some(GameReport {
            outcome,
            attempts: self.attempt,
            secret: self.secret,
            board: self.board,
        })
    }
}

enum GuessInput {
    Valid(Guess),
    Invalid,
}

fn read_guess<I: GameInterface>(interface: &mut I) -> Result<GuessInput, GameError> {
    let line = interface.read_guess_line()?;
    match line.parse::<Guess>() {
        Ok(guess) => Ok(GuessInput::Valid(guess)),
        Err(e) => {
            debug_log!("rejected guess {:?}: {}", line.trim(), e);
            interface.display_invalid_guess(&e);
            Ok(GuessInput::Invalid)
        }
    }
}

/// Play one game to completion against `secret`.
///
/// Invalid lines are reported and re-prompted without consuming an attempt.
/// Only input failures end the loop early.
pub fn game_loop<I: GameInterface>(secret: Secret, interface: &mut I) -> Result<GameReport, GameError> {
    info_log!("Starting new game");
    let mut game = Game::new(secret);
    interface.display_board(game.board());

    loop {
        interface.display_attempt_prompt(game.attempts() + 1);
        let guess = match read_guess(interface)? {
            GuessInput::Valid(guess) => guess,
            GuessInput::Invalid => continue,
        };

        game.submit(&guess)?;
        interface.display_board(game.board());

        if let Some(report) = game.report() {
            info_log!(
                "Game over after {} attempt(s): {:?}",
                report.attempts,
                report.outcome
            );
            interface.display_result(&report);
            return Ok(report);
        }
    }
}
