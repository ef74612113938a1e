//! `rm` command – remove a single file.
//!
//! Directories are refused; use `rmdir`. A symbolic link is removed
//! itself, never its target.

use std::fs;

use rterm_core::{Builtin, Context, ErrorKind, ShellError, ShellResult};

use crate::common::require_operand;

pub struct RmCommand;

impl Builtin for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn synopsis(&self) -> &'static str {
        "Remove a file"
    }

    fn usage(&self) -> &'static str {
        "rm <file>"
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<String> {
        let name = require_operand("rm", args)?;
        let path = ctx.resolve(name);

        let meta = fs::symlink_metadata(&path).map_err(|e| ShellError::io("rm", "cannot remove", name, &e))?;
        if meta.is_dir() {
            return Err(ShellError::new(
                ErrorKind::IsADirectory,
                format!("rm: {name} is a directory (use rmdir or rm -r)"),
            ));
        }

        fs::remove_file(&path).map_err(|e| ShellError::io("rm", "cannot remove", name, &e))?;
        Ok(format!("Removed file: {name}"))
    }
}
