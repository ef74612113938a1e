//! `grep` command – print lines containing a literal substring.
//!
//! `grep <pattern> <file>...` matches case-sensitively, without regular
//! expressions. With more than one file every match is prefixed by the
//! file name as given. No match at all prints a marker line.

use rterm_core::output::NO_MATCHES;
use rterm_core::{Builtin, Context, ShellError, ShellResult};

use crate::common::read_text;

pub struct GrepCommand;

impl Builtin for GrepCommand {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn synopsis(&self) -> &'static str {
        "Search for text in files"
    }

    fn usage(&self) -> &'static str {
        "grep <pattern> <file>"
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<String> {
        let (pattern, files) = match args {
            [pattern, files @ ..] if !files.is_empty() => (pattern.as_str(), files),
            _ => return Err(ShellError::usage(self.usage())),
        };
        let prefix = files.len() > 1;

        let mut matches = Vec::new();
        for file in files {
            let text = read_text("grep", &ctx.resolve(file), file)?;
            for line in text.lines().filter(|line| line.contains(pattern)) {
                if prefix {
                    matches.push(format!("{file}:{line}"));
                } else {
                    matches.push(line.to_string());
                }
            }
        }

        if matches.is_empty() {
            return Ok(NO_MATCHES.to_string());
        }
        Ok(matches.join("\n"))
    }
}
