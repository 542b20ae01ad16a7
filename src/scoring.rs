use crate::secret::Secret;
use crate::symbols::{CODE_LENGTH, Code, ColorCode, Guess};
use std::fmt;

/// Feedback for one guess: exact markers first, then color-only markers,
/// then empty slots. A marker's index says nothing about which guess position
/// earned it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hint(Code);

impl Hint {
    /// Build the marker row for the given counts.
    ///
    /// Counts beyond the row length are clamped.
    #[must_use]
    pub fn from_counts(exact: usize, color_only: usize) -> Self {
        let exact = exact.min(CODE_LENGTH);
        let color_only = color_only.min(CODE_LENGTH - exact);

        let mut markers = [ColorCode::EMPTY; CODE_LENGTH];
        for (i, marker) in markers.iter_mut().enumerate() {
            if i < exact {
                *marker = ColorCode::EXACT;
            } else if i < exact + color_only {
                *marker = ColorCode::COLOR_ONLY;
            }
        }
        Self(markers)
    }

    #[must_use]
    pub fn solved() -> Self {
        Self([ColorCode::EXACT; CODE_LENGTH])
    }

    #[must_use]
    pub fn markers(&self) -> &Code {
        &self.0
    }

    #[must_use]
    pub fn exact_count(&self) -> usize {
        self.count(ColorCode::EXACT)
    }

    #[must_use]
    pub fn color_only_count(&self) -> usize {
        self.count(ColorCode::COLOR_ONLY)
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        self.exact_count() == CODE_LENGTH
    }

    fn count(&self, marker: ColorCode) -> usize {
        self.0.iter().filter(|&&m| m == marker).count()
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: String = self.0.iter().map(|m| m.symbol()).collect();
        f.write_str(&symbols)
    }
}

/// Score a guess against the secret.
///
/// Shared colors are matched by consumption: a secret peg pairs with at most
/// one guess peg and vice versa, so the shared total per color is the smaller
/// of its two occurrence counts.
#[must_use]
pub fn score(secret: &Secret, guess: &Guess) -> Hint {
    let secret = secret.code();
    let guess = guess.code();

    let exact = secret.iter().zip(guess).filter(|(s, g)| s == g).count();
    if exact == CODE_LENGTH {
        return Hint::solved();
    }

    let mut secret_counts = [0usize; ColorCode::COUNT];
    let mut guess_counts = [0usize; ColorCode::COUNT];
    for (s, g) in secret.iter().zip(guess) {
        secret_counts[s.index()] += 1;
        guess_counts[g.index()] += 1;
    }
    let shared: usize = secret_counts
        .iter()
        .zip(&guess_counts)
        .map(|(s, g)| (*s).min(*g))
        .sum();

    Hint::from_counts(exact, shared - exact)
}
