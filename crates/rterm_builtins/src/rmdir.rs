//! `rmdir` command – remove an empty directory.

use std::fs;

use rterm_core::{Builtin, Context, ErrorKind, ShellError, ShellResult};

use crate::common::require_operand;

pub struct RmdirCommand;

impl Builtin for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn synopsis(&self) -> &'static str {
        "Remove an empty directory"
    }

    fn usage(&self) -> &'static str {
        "rmdir <dir>"
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<String> {
        let name = require_operand("rmdir", args)?;
        let path = ctx.resolve(name);

        let meta =
            fs::symlink_metadata(&path).map_err(|e| ShellError::io("rmdir", "failed to remove", name, &e))?;
        if !meta.is_dir() {
            return Err(ShellError::new(
                ErrorKind::NotADirectory,
                format!("rmdir: failed to remove '{name}': Not a directory"),
            ));
        }

        fs::remove_dir(&path).map_err(|e| ShellError::io("rmdir", "failed to remove", name, &e))?;
        Ok(format!("Removed directory: {name}"))
    }
}
