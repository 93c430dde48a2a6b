//! Build script to embed the word bank
//!
//! Turns data/words.txt into a generated source file with a const array.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const WORD_LIST: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let content = fs::read_to_string(WORD_LIST)
        .unwrap_or_else(|e| panic!("Failed to read {WORD_LIST}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut generated = String::from(
        "// Generated word bank\n\
         \n\
         /// Five-letter Latin words in schedule order\n\
         pub const WORDS: &[&str] = &[\n",
    );
    for word in &words {
        writeln!(generated, "    \"{word}\",").unwrap();
    }
    generated.push_str("];\n\n/// Number of words in WORDS\n");
    writeln!(generated, "pub const WORDS_COUNT: usize = {};", words.len()).unwrap();

    let out_path = Path::new(&out_dir).join("words.rs");
    fs::write(&out_path, generated)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", out_path.display()));

    // Rebuild if the word list changes
    println!("cargo:rerun-if-changed={WORD_LIST}");
}
