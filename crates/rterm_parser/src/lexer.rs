//! Shell-style word splitter.
//!
//! Recognises whitespace separation, single quotes, double quotes and
//! backslash escapes the way a POSIX shell splits words. Only space, tab,
//! CR and LF separate words; other Unicode spaces are word characters.
//! Nothing else is special: `|`, `>`, `$`, `*` and friends are ordinary
//! characters here.

use std::iter::Peekable;
use std::str::CharIndices;

/// Errors produced while splitting a line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A quote was opened and never closed.
    #[error("No closing quotation ({quote} opened at offset {offset})")]
    UnterminatedQuote { quote: char, offset: usize },
    /// The line ends with a lone backslash.
    #[error("No escaped character (trailing backslash at offset {offset})")]
    DanglingEscape { offset: usize },
}

/// Tokenize input and return the words in order.
pub fn tokenize(input: &str) -> Result<Vec<String>, LexError> {
    let mut chars = input.char_indices().peekable();
    let mut words = Vec::new();

    loop {
        skip_whitespace(&mut chars);
        if chars.peek().is_none() {
            break;
        }
        words.push(read_word(&mut chars)?);
    }

    Ok(words)
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn skip_whitespace(chars: &mut Peekable<CharIndices<'_>>) {
    while let Some(&(_, c)) = chars.peek() {
        if !is_separator(c) {
            break;
        }
        chars.next();
    }
}

/// Read one word; quoted and unquoted pieces that touch are concatenated.
fn read_word(chars: &mut Peekable<CharIndices<'_>>) -> Result<String, LexError> {
    let mut word = String::new();

    while let Some(&(idx, c)) = chars.peek() {
        match c {
            c if is_separator(c) => break,
            '\'' => {
                chars.next();
                read_single_quoted(chars, idx, &mut word)?;
            }
            '"' => {
                chars.next();
                read_double_quoted(chars, idx, &mut word)?;
            }
            '\\' => {
                chars.next();
                match chars.next() {
                    Some((_, escaped)) => word.push(escaped),
                    None => return Err(LexError::DanglingEscape { offset: idx }),
                }
            }
            _ => {
                chars.next();
                word.push(c);
            }
        }
    }

    Ok(word)
}

fn read_single_quoted(
    chars: &mut Peekable<CharIndices<'_>>,
    open: usize,
    word: &mut String,
) -> Result<(), LexError> {
    for (_, c) in chars.by_ref() {
        if c == '\'' {
            return Ok(());
        }
        word.push(c);
    }
    Err(LexError::UnterminatedQuote { quote: '\'', offset: open })
}

fn read_double_quoted(
    chars: &mut Peekable<CharIndices<'_>>,
    open: usize,
    word: &mut String,
) -> Result<(), LexError> {
    while let Some((idx, c)) = chars.next() {
        match c {
            '"' => return Ok(()),
            '\\' => match chars.peek() {
                // Only the quote and the backslash itself are escapable inside "..."
                Some(&(_, next @ ('"' | '\\'))) => {
                    chars.next();
                    word.push(next);
                }
                Some(_) => word.push('\\'),
                None => return Err(LexError::DanglingEscape { offset: idx }),
            },
            _ => word.push(c),
        }
    }
    Err(LexError::UnterminatedQuote { quote: '"', offset: open })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> Vec<String> {
        tokenize(input).unwrap()
    }

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(words("echo  hello\tworld"), vec!["echo", "hello", "world"]);
    }

    #[test]
    fn empty_line_has_no_tokens() {
        assert!(words("").is_empty());
        assert!(words("   \t \n").is_empty());
    }

    #[test]
    fn single_quotes_are_literal() {
        assert_eq!(words(r#"echo 'a "b" \c'"#), vec!["echo", r#"a "b" \c"#]);
    }

    #[test]
    fn double_quotes_escape_only_quote_and_backslash() {
        assert_eq!(words(r#""say \"hi\" \n \\""#), vec![r#"say "hi" \n \"#]);
    }

    #[test]
    fn backslash_outside_quotes_escapes_next_char() {
        assert_eq!(words(r"touch my\ file.txt"), vec!["touch", "my file.txt"]);
    }

    #[test]
    fn adjacent_pieces_concatenate() {
        assert_eq!(words(r#"a"b c"'d e'f"#), vec!["ab cd ef"]);
    }

    #[test]
    fn empty_quotes_give_empty_word() {
        assert_eq!(words(r#"find """#), vec!["find", ""]);
    }

    #[test]
    fn unterminated_quotes_fail() {
        assert_eq!(
            tokenize("echo 'oops"),
            Err(LexError::UnterminatedQuote { quote: '\'', offset: 5 })
        );
        assert_eq!(
            tokenize("echo \"oops"),
            Err(LexError::UnterminatedQuote { quote: '"', offset: 5 })
        );
    }

    #[test]
    fn trailing_backslash_fails() {
        assert_eq!(tokenize("echo \\"), Err(LexError::DanglingEscape { offset: 5 }));
    }

    #[test]
    fn trailing_backslash_inside_double_quotes_fails() {
        assert_eq!(tokenize("echo \"abc\\"), Err(LexError::DanglingEscape { offset: 9 }));
    }

    #[test]
    fn only_ascii_blanks_separate_words() {
        assert_eq!(words("a\u{a0}b c"), vec!["a\u{a0}b", "c"]);
        assert_eq!(words("x\u{2003}y"), vec!["x\u{2003}y"]);
        assert_eq!(words("a\r\nb"), vec!["a", "b"]);
        assert_eq!(words("\u{a0}"), vec!["\u{a0}"]);
    }

    #[test]
    fn shell_operators_are_plain_characters() {
        assert_eq!(words("echo a|b > c $HOME *"), vec!["echo", "a|b", ">", "c", "$HOME", "*"]);
    }
}
