//! `head` command – first lines of a file.

use rterm_core::{Builtin, Context, ShellResult};

use crate::common::{read_text, require_args};

/// Number of lines shown.
pub const HEAD_LINES: usize = 10;

pub struct HeadCommand;

impl Builtin for HeadCommand {
    fn name(&self) -> &'static str {
        "head"
    }

    fn synopsis(&self) -> &'static str {
        "Show first 10 lines of a file"
    }

    fn usage(&self) -> &'static str {
        "head <file>"
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<String> {
        let [file] = require_args::<1>(self.usage(), args)?;
        let text = read_text("head", &ctx.resolve(file), file)?;
        Ok(text.lines().take(HEAD_LINES).collect::<Vec<_>>().join("\n"))
    }
}
