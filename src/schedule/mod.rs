//! Daily answer scheduling
//!
//! Derives "today's answer" deterministically from the clock: the whole
//! number of days elapsed since the epoch indexes the word bank. All
//! arithmetic is raw UTC milliseconds, so the answer changes exactly at the
//! millisecond day boundary rather than at local midnight.
//!
//! The day index is reduced modulo the bank length, so the schedule cycles
//! once the list is exhausted (and tolerates clocks set before the epoch).

use crate::core::Word;
use crate::wordbank::WordBank;
use std::time::{SystemTime, UNIX_EPOCH};

/// Schedule epoch: 2022-02-07T00:00:00Z. Day zero of the word bank.
pub const EPOCH_MS: i64 = 1_644_192_000_000;

/// Milliseconds per schedule day
pub const DAY_MS: i64 = 86_400_000;

/// Whole days elapsed between the epoch and `now_ms`
///
/// Computed as `floor((now_ms - EPOCH_MS) / DAY_MS)`; negative before the
/// epoch. Non-decreasing in `now_ms` and increases by exactly 1 every
/// `DAY_MS` milliseconds.
///
/// # Examples
/// ```
/// use verba::schedule::{day_index, DAY_MS, EPOCH_MS};
///
/// assert_eq!(day_index(EPOCH_MS), 0);
/// assert_eq!(day_index(EPOCH_MS + DAY_MS - 1), 0);
/// assert_eq!(day_index(EPOCH_MS + DAY_MS), 1);
/// ```
#[must_use]
pub fn day_index(now_ms: i64) -> i64 {
    (now_ms - EPOCH_MS).div_euclid(DAY_MS)
}

/// Whole days elapsed between the epoch and the current system time
#[must_use]
pub fn today_index() -> i64 {
    day_index(now_ms())
}

/// The answer scheduled for the instant `now_ms`
///
/// The day index wraps modulo the bank length. Returns `None` only for an
/// empty bank. The answer is already in canonical lowercase form.
#[must_use]
pub fn answer_for(bank: &WordBank, now_ms: i64) -> Option<&Word> {
    if bank.is_empty() {
        return None;
    }

    let slot = day_index(now_ms).rem_euclid(bank.len() as i64) as usize;
    bank.word_at(slot)
}

/// The answer scheduled for the current system time
///
/// # Examples
/// ```
/// use verba::schedule::answer_for_today;
/// use verba::wordbank::WordBank;
///
/// let bank = WordBank::embedded();
/// let answer = answer_for_today(&bank).unwrap();
/// assert!(bank.is_valid(answer.text()));
/// ```
#[must_use]
pub fn answer_for_today(bank: &WordBank) -> Option<&Word> {
    answer_for(bank, now_ms())
}

/// Current system time as UTC milliseconds
///
/// A clock set before 1970 reads as the Unix epoch itself; the modulo
/// wrap in [`answer_for`] keeps the resulting negative day index usable.
fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as i64)
}
