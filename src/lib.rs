//! Verba
//!
//! Core of a daily word-guessing game for Latin words: deterministic daily
//! answer selection, guess validity, per-letter guess classification, and an
//! explicit per-game session. Rendering, input handling, and persistence
//! belong to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use verba::session::Session;
//! use verba::wordbank::WordBank;
//!
//! let bank = WordBank::embedded();
//! let mut session = Session::today(&bank).unwrap();
//!
//! let row = session.submit("terra", &bank).unwrap();
//! println!("{}", row.result().to_emoji());
//! ```

// Core domain types
pub mod core;

// Daily answer schedule
pub mod schedule;

// Game session state
pub mod session;

// Word bank
pub mod wordbank;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
