//! `pwd` builtin – print the interpreter's working directory.

use rterm_core::{Builtin, Context, ShellResult};

pub struct PwdCommand;

impl Builtin for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn synopsis(&self) -> &'static str {
        "Print working directory"
    }

    fn usage(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, ctx: &mut Context<'_>, _args: &[String]) -> ShellResult<String> {
        Ok(ctx.cwd.path().display().to_string())
    }
}
