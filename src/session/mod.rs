//! Game session state
//!
//! A [`Session`] holds one game: the answer, the scored rows, and the
//! win/loss status. It is an explicit value constructed fresh per game and
//! owned by the caller (the presentation layer); the core functions in
//! [`crate::core`], [`crate::schedule`], and [`crate::wordbank`] never see
//! it. Day rollover is likewise explicit: the caller asks [`Session::is_stale`]
//! when it wants to know whether a new game should start.

use crate::core::{GuessResult, WORD_LENGTH, Word, evaluate};
use crate::schedule;
use crate::wordbank::WordBank;
use std::fmt;

/// Maximum number of scored guesses per game
pub const MAX_GUESSES: usize = 6;

/// Whether a game is still accepting guesses, and how it ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    guess: Word,
    result: GuessResult,
}

impl Row {
    /// The submitted word
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &Word {
        &self.guess
    }

    /// Its per-letter classification
    #[inline]
    #[must_use]
    pub fn result(&self) -> &GuessResult {
        &self.result
    }
}

/// Why a submission was rejected
///
/// All variants are recoverable: the caller keeps the session and decides
/// how to surface the rejection (the game shakes the row rather than
/// scoring it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The game has already been won or lost
    GameOver,
    /// The guess is not exactly `WORD_LENGTH` letters
    WrongLength(usize),
    /// The guess is not in the word bank
    UnknownWord(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is already over"),
            Self::WrongLength(len) => {
                write!(f, "Guess must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::UnknownWord(word) => write!(f, "'{word}' is not in the word list"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// One game in progress or finished
#[derive(Debug, Clone)]
pub struct Session {
    answer: Word,
    rows: Vec<Row>,
    status: GameStatus,
}

impl Session {
    /// Start a game against a known answer
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self {
            answer,
            rows: Vec::new(),
            status: GameStatus::Playing,
        }
    }

    /// Start a game against the answer scheduled for the instant `now_ms`
    ///
    /// Returns `None` only for an empty bank.
    #[must_use]
    pub fn for_day(bank: &WordBank, now_ms: i64) -> Option<Self> {
        schedule::answer_for(bank, now_ms).cloned().map(Self::new)
    }

    /// Start a game against today's scheduled answer
    ///
    /// # Examples
    /// ```
    /// use verba::session::{GameStatus, Session};
    /// use verba::wordbank::WordBank;
    ///
    /// let bank = WordBank::embedded();
    /// let session = Session::today(&bank).unwrap();
    /// assert_eq!(session.status(), GameStatus::Playing);
    /// ```
    #[must_use]
    pub fn today(bank: &WordBank) -> Option<Self> {
        schedule::answer_for_today(bank).cloned().map(Self::new)
    }

    /// Submit a guess for scoring
    ///
    /// The guess is lowercased first, matching the bank's canonical form.
    /// An accepted guess is evaluated, appended as a [`Row`], and drives the
    /// status: an all-`Match` result wins the game; the `MAX_GUESSES`th
    /// scored row without a win loses it.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` without scoring anything if the game is over,
    /// the guess has the wrong length, or the guess is not in the bank.
    ///
    /// # Panics
    /// Will not panic - the `expect()` calls are guaranteed safe by the
    /// bank membership check and the preceding push.
    pub fn submit(&mut self, guess: &str, bank: &WordBank) -> Result<&Row, SubmitError> {
        if self.status != GameStatus::Playing {
            return Err(SubmitError::GameOver);
        }

        let guess = guess.to_lowercase();
        let len = guess.chars().count();
        if len != WORD_LENGTH {
            return Err(SubmitError::WrongLength(len));
        }

        if !bank.is_valid(&guess) {
            return Err(SubmitError::UnknownWord(guess));
        }

        // Bank entries are canonical, so this cannot fail after membership
        let word = Word::new(&guess).expect("bank entries are canonical words");
        let result = evaluate(word.text(), self.answer.text());

        if result.is_win() {
            self.status = GameStatus::Won;
        } else if self.rows.len() + 1 >= MAX_GUESSES {
            self.status = GameStatus::Lost;
        }

        self.rows.push(Row {
            guess: word,
            result,
        });

        Ok(self.rows.last().expect("row just pushed"))
    }

    /// The target word for this game
    #[inline]
    #[must_use]
    pub fn answer(&self) -> &Word {
        &self.answer
    }

    /// All scored rows, oldest first
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Current game status
    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game is won or lost
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.rows.len())
    }

    /// True when the schedule has moved past this session's answer
    ///
    /// The caller checks this on its own cadence (a render tick or timer)
    /// and starts a fresh session when it returns true.
    #[must_use]
    pub fn is_stale(&self, bank: &WordBank, now_ms: i64) -> bool {
        schedule::answer_for(bank, now_ms).is_some_and(|scheduled| *scheduled != self.answer)
    }

    /// True when the schedule has moved past this session's answer, per the
    /// system clock
    #[must_use]
    pub fn is_stale_today(&self, bank: &WordBank) -> bool {
        schedule::answer_for_today(bank).is_some_and(|scheduled| *scheduled != self.answer)
    }

    /// Build the shareable result grid
    ///
    /// A `#verba {rows}/{MAX_GUESSES}` header followed by one emoji row per
    /// scored guess, newest last. Contains no letters, so it never spoils
    /// the answer.
    #[must_use]
    pub fn share_text(&self) -> String {
        let mut out = format!("#verba {}/{MAX_GUESSES}", self.rows.len());
        for row in &self.rows {
            out.push('\n');
            out.push_str(&row.result.to_emoji());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;
    use crate::schedule::{DAY_MS, EPOCH_MS};
    fn bank() -> WordBank {
        WordBank::from_lines([
            "terra", "aquae", "lumen", "umbra", "ignis", "herba", "arbor", "silva",
        ])
    }

    fn session_for(answer: &str) -> Session {
        Session::new(Word::new(answer).unwrap())
    }

    #[test]
    fn winning_guess_ends_the_game() {
        let bank = bank();
        let mut session = session_for("terra");

        let row = session.submit("terra", &bank).unwrap();
        assert!(row.result().is_win());
        assert_eq!(session.status(), GameStatus::Won);
        assert!(session.is_over());
        assert_eq!(session.rows().len(), 1);
    }

    #[test]
    fn submission_is_case_normalized() {
        let bank = bank();
        let mut session = session_for("terra");

        session.submit("TeRrA", &bank).unwrap();
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.rows()[0].guess().text(), "terra");
    }

    #[test]
    fn wrong_guess_is_scored_and_game_continues() {
        let bank = bank();
        let mut session = session_for("terra");

        let row = session.submit("lumen", &bank).unwrap();
        assert!(!row.result().is_win());
        assert_eq!(row.result().len(), WORD_LENGTH);
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.guesses_remaining(), MAX_GUESSES - 1);
    }

    #[test]
    fn scored_row_matches_evaluator() {
        let bank = bank();
        let mut session = session_for("terra");

        // AQUAE vs TERRA: the first 'a' spends the single-'a' budget, so
        // the second is demoted; the 'e' is present elsewhere
        let row = session.submit("aquae", &bank).unwrap();
        assert_eq!(
            row.result().states(),
            [
                LetterState::Present,
                LetterState::Miss,
                LetterState::Miss,
                LetterState::Miss,
                LetterState::Present,
            ]
        );
    }

    #[test]
    fn unknown_word_is_rejected_without_scoring() {
        let bank = bank();
        let mut session = session_for("terra");

        let err = session.submit("zzzzz", &bank).unwrap_err();
        assert_eq!(err, SubmitError::UnknownWord("zzzzz".to_string()));
        assert!(session.rows().is_empty());
        assert_eq!(session.status(), GameStatus::Playing);
    }

    #[test]
    fn wrong_length_is_rejected_without_scoring() {
        let bank = bank();
        let mut session = session_for("terra");

        let err = session.submit("aqua", &bank).unwrap_err();
        assert_eq!(err, SubmitError::WrongLength(4));
        assert!(session.rows().is_empty());
    }

    #[test]
    fn six_misses_lose_the_game() {
        let bank = bank();
        let mut session = session_for("terra");

        for guess in ["aquae", "lumen", "umbra", "ignis", "herba", "arbor"] {
            session.submit(guess, &bank).unwrap();
        }

        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.guesses_remaining(), 0);
        assert_eq!(session.rows().len(), MAX_GUESSES);
    }

    #[test]
    fn win_on_final_guess_beats_loss() {
        let bank = bank();
        let mut session = session_for("terra");

        for guess in ["aquae", "lumen", "umbra", "ignis", "herba"] {
            session.submit(guess, &bank).unwrap();
        }
        session.submit("terra", &bank).unwrap();

        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn finished_game_rejects_further_guesses() {
        let bank = bank();
        let mut session = session_for("terra");

        session.submit("terra", &bank).unwrap();
        let err = session.submit("lumen", &bank).unwrap_err();
        assert_eq!(err, SubmitError::GameOver);
        assert_eq!(session.rows().len(), 1);
    }

    #[test]
    fn for_day_uses_the_schedule() {
        let bank = bank();
        let session = Session::for_day(&bank, EPOCH_MS + DAY_MS).unwrap();
        assert_eq!(session.answer().text(), "aquae");
    }

    #[test]
    fn for_day_empty_bank_is_none() {
        let empty = WordBank::new(Vec::new());
        assert!(Session::for_day(&empty, EPOCH_MS).is_none());
    }

    #[test]
    fn session_goes_stale_at_day_rollover() {
        let bank = bank();
        let session = Session::for_day(&bank, EPOCH_MS).unwrap();

        assert!(!session.is_stale(&bank, EPOCH_MS));
        assert!(!session.is_stale(&bank, EPOCH_MS + DAY_MS - 1));
        assert!(session.is_stale(&bank, EPOCH_MS + DAY_MS));
    }

    #[test]
    fn todays_session_is_fresh() {
        let bank = WordBank::embedded();
        let session = Session::today(&bank).unwrap();
        assert_eq!(session.status(), GameStatus::Playing);
        assert!(bank.is_valid(session.answer().text()));
    }

    #[test]
    fn share_text_has_header_and_one_line_per_row() {
        let bank = bank();
        let mut session = session_for("terra");
        session.submit("lumen", &bank).unwrap();
        session.submit("terra", &bank).unwrap();

        let share = session.share_text();
        let mut lines = share.lines();

        assert_eq!(lines.next(), Some("#verba 2/6"));
        assert_eq!(lines.next(), Some("⬛️⬛️⬛️🟨⬛️"));
        assert_eq!(lines.next(), Some("🟩🟩🟩🟩🟩"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn share_text_before_any_guess_is_just_the_header() {
        let session = session_for("terra");
        assert_eq!(session.share_text(), "#verba 0/6");
    }
}
