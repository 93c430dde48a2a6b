//! Guess validity check
//!
//! Normalizes a candidate word and asks the bank whether it would be
//! accepted as a guess.

use crate::wordbank::WordBank;

/// Outcome of a validity check
pub struct CheckReport {
    /// The candidate in canonical (lowercase) form
    pub word: String,
    /// Whether the bank accepts it
    pub valid: bool,
}

/// Check whether `raw` is an accepted guess
///
/// Validity is a normal boolean outcome, not an error: the caller decides
/// whether to accept or reject the attempt.
#[must_use]
pub fn check_word(bank: &WordBank, raw: &str) -> CheckReport {
    let word = raw.to_lowercase();
    let valid = bank.is_valid(&word);

    CheckReport { word, valid }
}
