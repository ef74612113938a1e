//! `mkdir` command – create a directory, including missing parents.

use std::fs;

use rterm_core::{Builtin, Context, ErrorKind, ShellError, ShellResult};

use crate::common::require_operand;

pub struct MkdirCommand;

impl Builtin for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn synopsis(&self) -> &'static str {
        "Create a new directory"
    }

    fn usage(&self) -> &'static str {
        "mkdir <dir>"
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<String> {
        let name = require_operand("mkdir", args)?;
        let path = ctx.resolve(name);

        if fs::symlink_metadata(&path).is_ok() {
            return Err(ShellError::new(
                ErrorKind::AlreadyExists,
                format!("Directory already exists: {name}"),
            ));
        }

        fs::create_dir_all(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => ShellError::new(
                ErrorKind::PermissionDenied,
                format!("Permission denied: cannot create directory {name}"),
            ),
            _ => ShellError::io("mkdir", "cannot create directory", name, &e),
        })?;

        Ok(format!("Created directory: {name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testutils::Sandbox;

    #[test]
    fn creates_nested_directories() {
        let mut sb = Sandbox::new();
        assert_eq!(sb.run(&MkdirCommand, &["a/b/c"]).unwrap(), "Created directory: a/b/c");
        assert!(sb.path("a/b/c").is_dir());
    }

    #[test]
    fn second_create_reports_already_exists() {
        let mut sb = Sandbox::new();
        sb.run(&MkdirCommand, &["foo"]).unwrap();
        let err = sb.run(&MkdirCommand, &["foo"]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyExists);
        assert_eq!(err.message, "Directory already exists: foo");
    }

    #[test]
    fn existing_file_also_blocks() {
        let mut sb = Sandbox::new();
        sb.write("foo", "x");
        assert!(sb.run(&MkdirCommand, &["foo"]).unwrap_err().is(ErrorKind::AlreadyExists));
    }

    #[test]
    fn missing_operand() {
        let mut sb = Sandbox::new();
        let err = sb.run(&MkdirCommand, &[]).unwrap_err();
        assert_eq!(err.message, "mkdir: missing operand");
    }
}
