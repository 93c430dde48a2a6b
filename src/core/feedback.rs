//! Guess classification
//!
//! Compares a submitted guess against the answer and classifies each letter:
//! - `Miss` - letter not in the answer (after other uses are accounted for)
//! - `Present` - letter in the answer, wrong position
//! - `Match` - letter in the answer at this exact position
//!
//! Duplicate letters are resolved in a second pass: a `Match` always claims
//! an answer letter ahead of any `Present`, and a letter can satisfy at most
//! as many positions as it occurs in the answer.

use rustc_hash::FxHashMap;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    /// Letter doesn't exist in the answer
    Miss,
    /// Letter exists but at a different position
    Present,
    /// Letter exists at this exact position
    Match,
}

/// Per-position classification of a guess against an answer
///
/// Produced only by [`evaluate`]. Empty exactly when the guess and answer
/// lengths differ; callers must treat an empty result as "not evaluable"
/// rather than as a scored row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuessResult(Vec<LetterState>);

impl GuessResult {
    /// Get the per-position letter states
    #[inline]
    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.0
    }

    /// Number of classified positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the guess could not be compared against the answer
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is a `Match` (a winning guess)
    ///
    /// # Examples
    /// ```
    /// use verba::core::evaluate;
    ///
    /// assert!(evaluate("terra", "terra").is_win());
    /// assert!(!evaluate("terra", "lumen").is_win());
    /// ```
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterState::Match)
    }

    /// Render the row as share-grid emoji (⬛️ / 🟨 / 🟩)
    #[must_use]
    pub fn to_emoji(&self) -> String {
        let mut out = String::new();
        for state in &self.0 {
            out.push_str(match state {
                LetterState::Miss => "⬛️",
                LetterState::Present => "🟨",
                LetterState::Match => "🟩",
            });
        }
        out
    }
}

/// Classify each letter of `guess` against `answer`
///
/// Pure and deterministic. If the two inputs differ in length the result is
/// empty - a length mismatch signals non-comparability, not an error.
///
/// Repeated letters are settled by the two-pass accounting: a provisional
/// `Present` is demoted whenever any occurrence of its letter in the answer
/// is already claimed by a `Match`, or the letter's occurrence budget is
/// spent. On some repeated-letter patterns this demotes more positions than
/// classic scoring would; that behavior is intentional and pinned by the
/// `repeated_letters_*` tests.
///
/// # Examples
/// ```
/// use verba::core::{evaluate, LetterState};
///
/// let result = evaluate("eabcd", "abcde");
/// assert_eq!(result.states(), [LetterState::Present; 5]);
///
/// assert!(evaluate("terra", "terrarum").is_empty());
/// ```
#[must_use]
pub fn evaluate(guess: &str, answer: &str) -> GuessResult {
    let guess_letters: Vec<char> = guess.chars().collect();
    let answer_letters: Vec<char> = answer.chars().collect();

    if guess_letters.len() != answer_letters.len() {
        return GuessResult::default();
    }

    let mut states: Vec<LetterState> = Vec::with_capacity(guess_letters.len());
    let mut answer_counts: FxHashMap<char, i32> = FxHashMap::default();

    // First pass: provisional classification. The tally visits one answer
    // position per step, so it holds the full per-letter occurrence counts
    // of the answer once the pass completes.
    for (i, &letter) in guess_letters.iter().enumerate() {
        *answer_counts.entry(answer_letters[i]).or_insert(0) += 1;

        if answer_letters[i] == letter {
            states.push(LetterState::Match);
        } else if answer_letters.contains(&letter) {
            states.push(LetterState::Present);
        } else {
            states.push(LetterState::Miss);
        }
    }

    // Second pass: demote provisional Presents that over-claim a letter.
    // Each processed Present spends one unit of its letter's budget,
    // whether it survives or not.
    // Allow: index needed to mutate states[i] while reading states[j]
    #[allow(clippy::needless_range_loop)]
    for i in 0..states.len() {
        if states[i] != LetterState::Present {
            continue;
        }

        let letter = guess_letters[i];
        let budget = answer_counts.get(&letter).copied().unwrap_or(0);

        for (j, &answer_letter) in answer_letters.iter().enumerate() {
            if answer_letter != letter {
                continue;
            }

            if states[j] == LetterState::Match {
                states[i] = LetterState::Miss;
            }

            if budget <= 0 {
                states[i] = LetterState::Miss;
            }
        }

        if let Some(count) = answer_counts.get_mut(&letter) {
            *count -= 1;
        }
    }

    GuessResult(states)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterState::{Match, Miss, Present};

    #[test]
    fn evaluate_all_match() {
        let result = evaluate("abcde", "abcde");
        assert_eq!(result.states(), [Match; 5]);
        assert!(result.is_win());
    }

    #[test]
    fn evaluate_all_present() {
        let result = evaluate("eabcd", "abcde");
        assert_eq!(result.states(), [Present; 5]);
        assert!(!result.is_win());
    }

    #[test]
    fn evaluate_all_miss() {
        let result = evaluate("fghij", "abcde");
        assert_eq!(result.states(), [Miss; 5]);
    }

    #[test]
    fn evaluate_length_mismatch_is_empty() {
        assert!(evaluate("abcd", "abcde").is_empty());
        assert!(evaluate("abcde", "abcd").is_empty());
        assert!(evaluate("", "abcde").is_empty());
    }

    #[test]
    fn evaluate_empty_inputs_not_a_win() {
        let result = evaluate("", "");
        assert!(result.is_empty());
        assert!(!result.is_win());
    }

    #[test]
    fn evaluate_mixed_states() {
        // 'e' occurs in LUMEN at another position; the rest are absent
        let result = evaluate("terra", "lumen");
        assert_eq!(result.states(), [Miss, Present, Miss, Miss, Miss]);
    }

    #[test]
    fn evaluate_duplicate_guess_letters_single_answer_occurrence() {
        // Answer has one 'e', claimed by the match at position 4; every
        // other 'e' in the guess is demoted
        let result = evaluate("eeeee", "abcde");
        assert_eq!(result.states(), [Miss, Miss, Miss, Miss, Match]);
    }

    #[test]
    fn evaluate_duplicate_answer_letters_kept_within_budget() {
        // ERASE has two e's and no matches, so both guessed e's stay Present
        let result = evaluate("speed", "erase");
        assert_eq!(result.states(), [Present, Miss, Present, Present, Miss]);
    }

    #[test]
    fn repeated_letters_match_claims_whole_letter() {
        // The matches at positions 0 and 3 demote every other 'a' and 'b',
        // even though the answer holds unclaimed occurrences of both letters
        let result = evaluate("aabbb", "ababa");
        assert_eq!(result.states(), [Match, Miss, Miss, Match, Miss]);
    }

    #[test]
    fn repeated_letters_budget_demotion() {
        // LABEL has one 'a': the first guessed 'a' keeps Present and spends
        // the budget, the second is demoted; the second 'l' is demoted by
        // the match at position 0
        let result = evaluate("llama", "label");
        assert_eq!(result.states(), [Match, Miss, Present, Miss, Miss]);
    }

    #[test]
    fn repeated_letters_match_elsewhere_demotes_present() {
        // FLOOR: the green 'o' at position 3 demotes the 'o' at position 1,
        // though classic scoring would keep it Present
        let result = evaluate("robot", "floor");
        assert_eq!(result.states(), [Present, Miss, Miss, Match, Miss]);
    }

    #[test]
    fn evaluate_is_deterministic() {
        for (guess, answer) in [("aabbb", "ababa"), ("speed", "erase"), ("terra", "lumen")] {
            assert_eq!(evaluate(guess, answer), evaluate(guess, answer));
        }
    }

    #[test]
    fn evaluate_self_is_always_win() {
        for word in ["terra", "aquae", "aaaaa", "ababa", "zzzzz"] {
            assert!(evaluate(word, word).is_win());
        }
    }

    #[test]
    fn match_and_present_never_exceed_answer_occurrences() {
        let cases = [
            ("aabbb", "ababa"),
            ("llama", "label"),
            ("robot", "floor"),
            ("speed", "erase"),
            ("eeeee", "abcde"),
            ("aaaaa", "ababa"),
            ("banal", "annal"),
        ];

        for (guess, answer) in cases {
            let result = evaluate(guess, answer);
            assert_eq!(result.len(), guess.len());

            for letter in guess.chars() {
                let answer_count = answer.chars().filter(|&c| c == letter).count();
                let claimed = guess
                    .chars()
                    .zip(result.states())
                    .filter(|&(c, &s)| c == letter && s != Miss)
                    .count();
                assert!(
                    claimed <= answer_count,
                    "{guess} vs {answer}: letter {letter} claimed {claimed} of {answer_count}"
                );
            }
        }
    }

    #[test]
    fn guess_result_to_emoji() {
        let result = evaluate("terra", "lumen");
        assert_eq!(result.to_emoji(), "⬛️🟨⬛️⬛️⬛️");

        assert_eq!(evaluate("abcde", "abcde").to_emoji(), "🟩🟩🟩🟩🟩");
        assert_eq!(evaluate("", "abcde").to_emoji(), "");
    }
}
