//! `cd` builtin – change the interpreter's working directory.
//!
//! * `cd` with no operand goes to the home directory
//! * `cd ..` goes up one level (a no-op at the root)
//! * anything else is resolved against the current directory
//!
//! A failed change leaves the working directory exactly as it was.

use rterm_core::{Builtin, Context, DirTarget, ErrorKind, ShellError, ShellResult};

pub struct CdCommand;

impl Builtin for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn synopsis(&self) -> &'static str {
        "Change directory (cd .. to go up)"
    }

    fn usage(&self) -> &'static str {
        "cd [dir]"
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<String> {
        if args.len() > 1 {
            return Err(ShellError::new(ErrorKind::Usage, "cd: too many arguments"));
        }

        let target = match args.first().map(String::as_str) {
            None => DirTarget::Home,
            Some("..") => DirTarget::Parent,
            Some(path) => DirTarget::Path(path),
        };

        let new = ctx.cwd.change(target)?.display().to_string();
        Ok(match target {
            DirTarget::Home => format!("Changed to home directory: {new}"),
            DirTarget::Parent => format!("Changed to parent directory: {new}"),
            DirTarget::Path(_) => format!("Changed to: {new}"),
        })
    }
}
