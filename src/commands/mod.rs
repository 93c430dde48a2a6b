//! Command implementations

pub mod check;
pub mod eval;
pub mod today;

pub use check::{CheckReport, check_word};
pub use eval::{EvalReport, eval_words};
pub use today::{TodayReport, report_for, today_report};
