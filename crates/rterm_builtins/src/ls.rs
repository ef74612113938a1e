//! `ls` command – list directory contents.
//!
//! Prints the entry names of the current directory (or of the directory
//! given as the first operand), sorted, one per line. Hidden entries are
//! included. An empty directory prints a marker line instead of nothing.

use std::fs;

use rterm_core::output::EMPTY_DIRECTORY;
use rterm_core::{Builtin, Context, ShellError, ShellResult};

pub struct LsCommand;

impl Builtin for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn synopsis(&self) -> &'static str {
        "List directory contents"
    }

    fn usage(&self) -> &'static str {
        "ls [dir]"
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<String> {
        let (dir, shown) = match args.first() {
            Some(arg) => (ctx.resolve(arg), arg.as_str()),
            None => (ctx.cwd.path().to_path_buf(), "."),
        };

        let mut names = Vec::new();
        let entries = fs::read_dir(&dir).map_err(|e| ShellError::io("ls", "cannot access", shown, &e))?;
        for entry in entries {
            let entry = entry.map_err(|e| ShellError::io("ls", "cannot read", shown, &e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        if names.is_empty() {
            return Ok(EMPTY_DIRECTORY.to_string());
        }
        names.sort();
        Ok(names.join("\n"))
    }
}
