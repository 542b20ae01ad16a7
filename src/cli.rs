use crate::board::{Board, MAX_ATTEMPTS};
use crate::error::{GameError, InvalidGuessFormat};
use crate::game_state::{GameInterface, GameOutcome, GameReport};
use crate::symbols::{CODE_LENGTH, ColorCode};
use clap::Parser;
use std::io::BufRead;

/// Mastermind: guess the secret four-color code
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed for the secret generator (defaults to the current time)
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Play in the full-screen terminal UI
    #[arg(short = 't', long = "tui")]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

/// Legend describing the color symbols, the hint markers and the input format.
pub fn legend_lines() -> Vec<String> {
    let colors: Vec<String> = ColorCode::playable()
        .map(|c| format!("{} - {}", c.symbol(), c.name()))
        .collect();
    vec![
        "Legend: ".to_string(),
        format!("Color symbols: {}", colors.join(", ")),
        "Hints: ".to_string(),
        format!(
            "  - {} - '{}'",
            ColorCode::COLOR_ONLY.name(),
            ColorCode::COLOR_ONLY.symbol()
        ),
        format!(
            "  - {} - '{}'",
            ColorCode::EXACT.name(),
            ColorCode::EXACT.symbol()
        ),
        format!("  - {} - '{}'", ColorCode::EMPTY.name(), ColorCode::EMPTY.symbol()),
        format!("Please choose {CODE_LENGTH} of the above given color symbols delimited with '-'"),
    ]
}

pub fn result_message(report: &GameReport) -> String {
    match report.outcome {
        GameOutcome::Won => format!(
            "Perfect! You guessed the secret! The attempt number is: {}",
            report.attempts
        ),
        GameOutcome::Exhausted => {
            format!("Unlucky, unlucky! Unfortunately you didn't guess the secret in {MAX_ATTEMPTS} attempts")
        }
    }
}

pub fn display_board(board: &Board) {
    println!("{board}");
}

pub fn display_attempt_prompt(attempt: usize) {
    println!("******** Attempt # {attempt}  ********");
    println!();
    for line in legend_lines() {
        println!("{line}");
    }
    println!();
}

pub fn display_invalid_guess(error: &InvalidGuessFormat) {
    println!("Invalid guess: {error}. Please try again.");
}

pub fn display_result(report: &GameReport) {
    println!("{}", result_message(report));
    println!("The secret is: {}", report.secret);
}

/// Read one line, treating end of input as fatal.
///
/// Bytes that are not UTF-8 become replacement characters, so the line is
/// rejected by the guess parser instead of ending the game.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String, GameError> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Err(GameError::InputClosed);
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_board(&mut self, board: &Board) {
        display_board(board);
    }

    fn display_attempt_prompt(&mut self, attempt: usize) {
        display_attempt_prompt(attempt);
    }

    fn read_guess_line(&mut self) -> Result<String, GameError> {
        read_line(&mut self.reader)
    }

    fn display_invalid_guess(&mut self, error: &InvalidGuessFormat) {
        display_invalid_guess(error);
    }

    fn display_result(&mut self, report: &GameReport) {
        display_result(report);
    }
}
