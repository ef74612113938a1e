//! `tail` command – last lines of a file.

use rterm_core::{Builtin, Context, ShellResult};

use crate::common::{read_text, require_args};

/// Number of lines shown.
pub const TAIL_LINES: usize = 10;

pub struct TailCommand;

impl Builtin for TailCommand {
    fn name(&self) -> &'static str {
        "tail"
    }

    fn synopsis(&self) -> &'static str {
        "Show last 10 lines of a file"
    }

    fn usage(&self) -> &'static str {
        "tail <file>"
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<String> {
        let [file] = require_args::<1>(self.usage(), args)?;
        let text = read_text("tail", &ctx.resolve(file), file)?;
        let lines: Vec<&str> = text.lines().collect();
        let start = lines.len().saturating_sub(TAIL_LINES);
        Ok(lines[start..].join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testutils::Sandbox;

    #[test]
    fn shows_last_ten_lines() {
        let mut sb = Sandbox::new();
        let body: String = (1..=25).map(|i| format!("line{i}\n")).collect();
        sb.write("f.txt", &body);
        let out = sb.run(&TailCommand, &["f.txt"]).unwrap();
        assert_eq!(out.lines().count(), 10);
        assert!(out.starts_with("line16\n"));
        assert!(out.ends_with("line25"));
    }

    #[test]
    fn empty_file_gives_empty_output() {
        let mut sb = Sandbox::new();
        sb.write("empty", "");
        assert_eq!(sb.run(&TailCommand, &["empty"]).unwrap(), "");
    }
}
