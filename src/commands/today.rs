//! Daily puzzle inspection
//!
//! Reports which puzzle the schedule has reached, without spoiling the
//! answer unless explicitly asked.

use crate::schedule;
use crate::wordbank::WordBank;

/// Snapshot of the scheduled puzzle at one instant
pub struct TodayReport {
    /// Whole days since the schedule epoch
    pub day_index: i64,
    /// Size of the active word bank
    pub bank_size: usize,
    /// The scheduled answer, populated only on request
    pub answer: Option<String>,
}

/// Build the puzzle report for the instant `now_ms`
#[must_use]
pub fn report_for(bank: &WordBank, now_ms: i64, reveal: bool) -> TodayReport {
    let answer = if reveal {
        schedule::answer_for(bank, now_ms).map(|w| w.text().to_string())
    } else {
        None
    };

    TodayReport {
        day_index: schedule::day_index(now_ms),
        bank_size: bank.len(),
        answer,
    }
}

/// Build the puzzle report for the current system time
#[must_use]
pub fn today_report(bank: &WordBank, reveal: bool) -> TodayReport {
    let answer = if reveal {
        schedule::answer_for_today(bank).map(|w| w.text().to_string())
    } else {
        None
    };

    TodayReport {
        day_index: schedule::today_index(),
        bank_size: bank.len(),
        answer,
    }
}
