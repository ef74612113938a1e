//! `touch` command – create an empty file or bump its timestamps.

use std::fs::OpenOptions;

use filetime::FileTime;
use rterm_core::{Builtin, Context, ErrorKind, ShellError, ShellResult};

use crate::common::require_operand;

pub struct TouchCommand;

impl Builtin for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn synopsis(&self) -> &'static str {
        "Create or update a file"
    }

    fn usage(&self) -> &'static str {
        "touch <file>"
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<String> {
        let name = require_operand("touch", args)?;
        let path = ctx.resolve(name);
        let cannot_touch = |e: std::io::Error| match e.kind() {
            std::io::ErrorKind::PermissionDenied => ShellError::new(
                ErrorKind::PermissionDenied,
                format!("touch: cannot touch '{name}': Permission denied"),
            ),
            _ => ShellError::io("touch", "cannot touch", name, &e),
        };

        if path.exists() {
            let now = FileTime::now();
            filetime::set_file_times(&path, now, now).map_err(cannot_touch)?;
        } else {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(cannot_touch)?;
        }

        Ok(format!("Created/updated file: {name}"))
    }
}
