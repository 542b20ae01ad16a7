// Library interface for mastermind
// This allows integration tests to access internal modules

pub mod board;
pub mod cli;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod scoring;
pub mod secret;
pub mod symbols;
pub mod tui;

// Re-export commonly used items for easier testing
pub use board::{Board, MAX_ATTEMPTS};
pub use error::{BoardError, GameError, InvalidGuessFormat};
pub use game_state::{Game, GameOutcome, GameReport, GameStatus, game_loop};
pub use scoring::{Hint, score};
pub use secret::{Secret, seeded_rng};
pub use symbols::{CODE_LENGTH, ColorCode, Guess, PLAYABLE_COLORS};
