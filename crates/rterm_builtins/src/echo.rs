//! `echo` builtin – print arguments joined by single spaces.

use rterm_core::{Builtin, Context, ShellResult};

pub struct EchoCommand;

impl Builtin for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn synopsis(&self) -> &'static str {
        "Print text to terminal"
    }

    fn usage(&self) -> &'static str {
        "echo [text]..."
    }

    fn execute(&self, _ctx: &mut Context<'_>, args: &[String]) -> ShellResult<String> {
        Ok(args.join(" "))
    }
}
