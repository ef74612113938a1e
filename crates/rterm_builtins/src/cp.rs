//! `cp` command – copy a single file.

use std::fs;

use rterm_core::{Builtin, Context, ErrorKind, ShellError, ShellResult};

use crate::mv::into_directory;

pub struct CpCommand;

impl Builtin for CpCommand {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn synopsis(&self) -> &'static str {
        "Copy files"
    }

    fn usage(&self) -> &'static str {
        "cp <src> <dest>"
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<String> {
        let [src_arg, dst_arg] = args else {
            return Err(ShellError::usage(self.usage()));
        };
        let src = ctx.resolve(src_arg);

        let meta = fs::metadata(&src).map_err(|e| ShellError::io("cp", "cannot stat", src_arg, &e))?;
        if meta.is_dir() {
            return Err(ShellError::new(
                ErrorKind::IsADirectory,
                format!("cp: -r not specified; omitting directory '{src_arg}'"),
            ));
        }

        let target = into_directory(&src, ctx.resolve(dst_arg), src_arg)?;
        // Copying a file onto itself would truncate it.
        if let (Ok(a), Ok(b)) = (src.canonicalize(), target.canonicalize()) {
            if a == b {
                return Err(ShellError::new(
                    ErrorKind::InvalidArgument,
                    format!("cp: '{src_arg}' and '{dst_arg}' are the same file"),
                ));
            }
        }

        fs::copy(&src, &target).map_err(|e| ShellError::io("cp", "cannot copy", src_arg, &e))?;
        Ok(format!("Copied '{src_arg}' to '{dst_arg}'"))
    }
}
