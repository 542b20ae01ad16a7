use crate::symbols::{CODE_LENGTH, Code, ColorCode, Guess, format_code};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// The hidden code for one game. Read-only once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secret(Code);

impl Secret {
    /// Draw each position independently and uniformly from the playable colors.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut code = [ColorCode::EMPTY; CODE_LENGTH];
        for slot in &mut code {
            *slot = ColorCode::PLAYABLE[rng.random_range(0..ColorCode::PLAYABLE.len())];
        }
        Self(code)
    }

    #[must_use]
    pub fn code(&self) -> &Code {
        &self.0
    }
}

/// A caller-chosen secret, e.g. a fixed puzzle.
impl From<Guess> for Secret {
    fn from(guess: Guess) -> Self {
        Self(*guess.code())
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_code(&self.0))
    }
}

/// Random source for a new game: fixed seed if given, otherwise the clock.
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0) as u64);
    StdRng::seed_from_u64(seed)
}
