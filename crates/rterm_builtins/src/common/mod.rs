//! Helpers shared by the command modules.

use std::fs;
use std::path::Path;

use rterm_core::error::describe_io;
use rterm_core::{ErrorKind, ShellError, ShellResult};

#[cfg(test)]
pub(crate) mod testutils;

/// First operand, or `<command>: missing operand`.
pub fn require_operand<'a>(command: &str, args: &'a [String]) -> ShellResult<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or_else(|| ShellError::missing_operand(command))
}

/// First `N` operands, or `Usage: <usage>` when fewer were given.
/// Anything past `N` is ignored.
pub fn require_args<'a, const N: usize>(usage: &str, args: &'a [String]) -> ShellResult<[&'a str; N]> {
    if args.len() < N {
        return Err(ShellError::usage(usage));
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

/// Read a whole file as text, replacing invalid UTF-8.
pub fn read_text(command: &str, path: &Path, shown: &str) -> ShellResult<String> {
    if path.is_dir() {
        return Err(ShellError::new(
            ErrorKind::IsADirectory,
            format!("{command}: {shown}: Is a directory"),
        ));
    }
    let bytes = fs::read(path).map_err(|e| {
        ShellError::new(
            ErrorKind::from_io(e.kind()),
            format!("{command}: {shown}: {}", describe_io(&e)),
        )
        .with_context("path", path.display().to_string())
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
