//! Display functions for command results

use super::formatters::colorize_row;
use crate::commands::{CheckReport, EvalReport, TodayReport};
use colored::Colorize;

/// Print the daily puzzle report
pub fn print_today_report(report: &TodayReport) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Puzzle {}",
        format!("#{}", report.day_index).bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("Word bank: {} words", report.bank_size);

    if let Some(answer) = &report.answer {
        println!("Answer:    {}", answer.to_uppercase().bright_green().bold());
    } else {
        println!("Answer:    {}", "(hidden, use --reveal)".bright_black());
    }
}

/// Print the result of a validity check
pub fn print_check_report(report: &CheckReport) {
    if report.valid {
        println!(
            "{} {}",
            report.word.to_uppercase().bold(),
            "is an accepted guess".green()
        );
    } else {
        println!(
            "{} {}",
            report.word.to_uppercase().bold(),
            "is not in the word list".red()
        );
    }
}

/// Print the scored comparison of a guess against an answer
pub fn print_eval_report(report: &EvalReport) {
    if report.result.is_empty() {
        println!(
            "{}",
            format!(
                "'{}' and '{}' differ in length - nothing to score",
                report.guess, report.answer
            )
            .yellow()
        );
        return;
    }

    println!("\n{}", colorize_row(&report.guess, &report.result));
    println!("{}", report.result.to_emoji());

    if report.result.is_win() {
        println!("\n{}", "Exact match!".green().bold());
    }
}
