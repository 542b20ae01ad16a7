//! Color codes and their single-character display symbols.
//!
//! Codes `0..=2` are reserved for the board: an empty slot and the two hint
//! markers. Codes `3..=10` are the playable colors.

use crate::error::InvalidGuessFormat;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const CODE_LENGTH: usize = 4;
pub const PLAYABLE_COLORS: u8 = 8;

const SYMBOLS: [char; 11] = ['_', 'x', 'o', 'G', 'O', 'Y', 'B', 'K', 'R', 'C', 'V'];
const FIRST_PLAYABLE: u8 = 3;
const GUESS_DELIMITER: char = '-';

static SYMBOL_TO_CODE: LazyLock<HashMap<char, ColorCode>> = LazyLock::new(|| {
    SYMBOLS
        .iter()
        .enumerate()
        .map(|(code, &symbol)| (symbol, ColorCode(code as u8)))
        .collect()
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorCode(u8);

/// One row of the board: a secret, a guess or a hint.
pub type Code = [ColorCode; CODE_LENGTH];

impl ColorCode {
    pub const EMPTY: Self = Self(0);
    pub const COLOR_ONLY: Self = Self(1);
    pub const EXACT: Self = Self(2);

    pub const GREEN: Self = Self(3);
    pub const ORANGE: Self = Self(4);
    pub const YELLOW: Self = Self(5);
    pub const BLUE: Self = Self(6);
    pub const BLACK: Self = Self(7);
    pub const RED: Self = Self(8);
    pub const CYAN: Self = Self(9);
    pub const VIOLET: Self = Self(10);

    /// Number of distinct codes, reserved ones included.
    pub const COUNT: usize = SYMBOLS.len();

    pub const PLAYABLE: [Self; PLAYABLE_COLORS as usize] = [
        Self::GREEN,
        Self::ORANGE,
        Self::YELLOW,
        Self::BLUE,
        Self::BLACK,
        Self::RED,
        Self::CYAN,
        Self::VIOLET,
    ];

    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        ((value as usize) < Self::COUNT).then_some(Self(value))
    }

    pub fn playable() -> impl Iterator<Item = Self> {
        Self::PLAYABLE.into_iter()
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub fn is_playable(self) -> bool {
        self.0 >= FIRST_PLAYABLE
    }

    #[must_use]
    pub fn symbol(self) -> char {
        SYMBOLS[self.index()]
    }

    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        SYMBOL_TO_CODE.get(&symbol).copied()
    }

    /// Human-readable color name used in the legend.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self.0 {
            0 => "no guess",
            1 => "correct color",
            2 => "correct color and spot",
            3 => "Green",
            4 => "Orange",
            5 => "Yellow",
            6 => "Blue",
            7 => "Black",
            8 => "Red",
            9 => "Cyan",
            _ => "Violet",
        }
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Join the symbols of a row with `-`, the same shape the player types.
#[must_use]
pub fn format_code(code: &Code) -> String {
    let symbols: Vec<String> = code.iter().map(ColorCode::to_string).collect();
    symbols.join("-")
}

/// Parse `<sym>-<sym>-<sym>-<sym>` into four playable colors.
///
/// Input is trimmed and upper-cased first, so `g-y-b-k` is accepted.
pub fn parse_code(input: &str) -> Result<Code, InvalidGuessFormat> {
    let input = input.trim().to_uppercase();
    let tokens: Vec<&str> = input.split(GUESS_DELIMITER).map(str::trim).collect();
    if tokens.len() != CODE_LENGTH {
        return Err(InvalidGuessFormat::wrong_count(tokens.len()));
    }

    let mut code = [ColorCode::EMPTY; CODE_LENGTH];
    for (slot, token) in code.iter_mut().zip(&tokens) {
        let mut chars = token.chars();
        let color = match (chars.next(), chars.next()) {
            (Some(symbol), None) => ColorCode::from_symbol(symbol).filter(|c| c.is_playable()),
            _ => None,
        };
        *slot = color.ok_or_else(|| InvalidGuessFormat::UnknownSymbol((*token).to_string()))?;
    }
    Ok(code)
}

/// A player's guess for one attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Guess(Code);

impl Guess {
    /// Build a guess from colors already known to be playable.
    ///
    /// Returns `None` if any entry is a reserved marker code.
    #[must_use]
    pub fn new(code: Code) -> Option<Self> {
        code.iter().all(|c| c.is_playable()).then_some(Self(code))
    }

    #[must_use]
    pub fn code(&self) -> &Code {
        &self.0
    }
}

impl FromStr for Guess {
    type Err = InvalidGuessFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code(s).map(Self)
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_code(&self.0))
    }
}
