#![doc = "Command-line tokenizer turning one raw input line into shell words."]

pub mod lexer;

pub use lexer::{tokenize, LexError};

/// Split a raw line into a command name and its arguments.
///
/// Returns `Ok(None)` for an empty or whitespace-only line.
pub fn split_command(input: &str) -> Result<Option<(String, Vec<String>)>, LexError> {
    let mut words = tokenize(input)?.into_iter();
    Ok(words.next().map(|name| (name, words.collect())))
}
