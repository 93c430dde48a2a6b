//! Verba - CLI
//!
//! Inspection tools for the daily Latin word game core: today's puzzle,
//! guess validity, and one-shot scoring.

use anyhow::Result;
use clap::{Parser, Subcommand};
use verba::{
    commands::{check_word, eval_words, today_report},
    output::{print_check_report, print_eval_report, print_today_report},
    wordbank::WordBank,
};

#[derive(Parser)]
#[command(
    name = "verba",
    about = "Daily word-guessing game for Latin words - core inspection tools",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's puzzle number (default)
    Today {
        /// Reveal today's answer
        #[arg(short, long)]
        reveal: bool,
    },

    /// Check whether a word is an accepted guess
    Check {
        /// The candidate word
        word: String,
    },

    /// Score a guess against an answer
    Eval {
        /// The guessed word
        guess: String,

        /// The target word
        answer: String,
    },
}

/// Load the word bank based on the -w flag
///
/// "embedded" uses the list compiled into the binary; anything else is
/// treated as a path to a word list file.
fn load_wordbank(mode: &str) -> Result<WordBank> {
    match mode {
        "embedded" => Ok(WordBank::embedded()),
        path => Ok(WordBank::load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let bank = load_wordbank(&cli.wordlist)?;

    // Default to Today if no command given
    let command = cli.command.unwrap_or(Commands::Today { reveal: false });

    match command {
        Commands::Today { reveal } => print_today_report(&today_report(&bank, reveal)),
        Commands::Check { word } => print_check_report(&check_word(&bank, &word)),
        Commands::Eval { guess, answer } => print_eval_report(&eval_words(&guess, &answer)),
    }

    Ok(())
}
