//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterState};
use colored::Colorize;

/// Render a scored row as uppercase letters on classification colors
///
/// Letters beyond the scored positions are dropped, so an empty result
/// renders as an empty string.
#[must_use]
pub fn colorize_row(word: &str, result: &GuessResult) -> String {
    word.chars()
        .zip(result.states())
        .map(|(letter, state)| {
            let cell = format!(" {} ", letter.to_ascii_uppercase());
            match state {
                LetterState::Match => cell.black().on_green().to_string(),
                LetterState::Present => cell.black().on_yellow().to_string(),
                LetterState::Miss => cell.white().on_bright_black().to_string(),
            }
        })
        .collect()
}
