//! `mv` command – move or rename a file or directory.
//!
//! `mv SRC DST` renames `SRC`; when `DST` is an existing directory the
//! source is moved into it under its own name. A rename across file
//! systems falls back to copy then remove, recreating symbolic links
//! rather than following them; if the copy lands but the source cannot be
//! removed the command fails and says so.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rterm_core::error::describe_io;
use rterm_core::{rterm_log_debug, Builtin, Context, ErrorKind, ShellError, ShellResult};

pub struct MvCommand;

impl Builtin for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn synopsis(&self) -> &'static str {
        "Move or rename files"
    }

    fn usage(&self) -> &'static str {
        "mv <src> <dest>"
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<String> {
        let [src_arg, dst_arg] = args else {
            return Err(ShellError::usage(self.usage()));
        };
        let src = ctx.resolve(src_arg);
        let dst = ctx.resolve(dst_arg);

        fs::symlink_metadata(&src).map_err(|e| ShellError::io("mv", "cannot stat", src_arg, &e))?;
        let target = into_directory(&src, dst, src_arg)?;

        rename_or_copy(&src, &target).map_err(|failure| move_error(failure, src_arg, dst_arg))?;

        Ok(format!("Moved '{src_arg}' to '{dst_arg}'"))
    }
}

/// If `dst` is an existing directory, the real destination is inside it.
pub(crate) fn into_directory(src: &Path, dst: PathBuf, shown: &str) -> ShellResult<PathBuf> {
    if !dst.is_dir() {
        return Ok(dst);
    }
    let name = src.file_name().ok_or_else(|| {
        ShellError::new(ErrorKind::InvalidArgument, format!("cannot use '{shown}' as a source name"))
    })?;
    Ok(dst.join(name))
}

#[derive(Debug)]
enum MoveFailure {
    Move(io::Error),
    /// The data reached its destination but the original is still there.
    RemoveSource(io::Error),
}

fn move_error(failure: MoveFailure, src_arg: &str, dst_arg: &str) -> ShellError {
    match failure {
        MoveFailure::Move(e) => ShellError::io("mv", "cannot move", src_arg, &e),
        MoveFailure::RemoveSource(e) => ShellError::new(
            ErrorKind::from_io(e.kind()),
            format!("mv: copied '{src_arg}' to '{dst_arg}' but cannot remove source: {}", describe_io(&e)),
        )
        .with_context("io_error", e.to_string()),
    }
}

fn rename_or_copy(src: &Path, dst: &Path) -> Result<(), MoveFailure> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(e) if is_cross_device(&e) => {
            rterm_log_debug!(src = %src.display(), dst = %dst.display(), "cross-device move, copying");
            move_by_copy(src, dst)
        }
        Err(e) => Err(MoveFailure::Move(e)),
    }
}

/// Copy `src` to `dst`, then remove `src`. Symbolic links are recreated,
/// never followed.
fn move_by_copy(src: &Path, dst: &Path) -> Result<(), MoveFailure> {
    let file_type = fs::symlink_metadata(src).map_err(MoveFailure::Move)?.file_type();
    if file_type.is_dir() {
        copy_dir_recursively(src, dst).map_err(MoveFailure::Move)?;
        fs::remove_dir_all(src).map_err(MoveFailure::RemoveSource)
    } else {
        copy_entry(src, dst, file_type).map_err(MoveFailure::Move)?;
        fs::remove_file(src).map_err(MoveFailure::RemoveSource)
    }
}

#[cfg(unix)]
fn is_cross_device(err: &io::Error) -> bool {
    err.raw_os_error() == Some(libc::EXDEV)
}

#[cfg(not(unix))]
fn is_cross_device(_err: &io::Error) -> bool {
    false
}

fn copy_dir_recursively(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            copy_dir_recursively(&from, &to)?;
        } else {
            copy_entry(&from, &to, file_type)?;
        }
    }
    Ok(())
}

fn copy_entry(from: &Path, to: &Path, file_type: fs::FileType) -> io::Result<()> {
    if file_type.is_symlink() {
        copy_symlink(from, to)
    } else {
        fs::copy(from, to).map(drop)
    }
}

#[cfg(unix)]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(fs::read_link(from)?, to)
}

#[cfg(not(unix))]
fn copy_symlink(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to).map(drop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testutils::Sandbox;

    #[test]
    fn renames_file() {
        let mut sb = Sandbox::new();
        sb.write("a.txt", "hello");
        assert_eq!(sb.run(&MvCommand, &["a.txt", "b.txt"]).unwrap(), "Moved 'a.txt' to 'b.txt'");
        assert!(!sb.path("a.txt").exists());
        assert_eq!(fs::read_to_string(sb.path("b.txt")).unwrap(), "hello");
    }

    #[test]
    fn moves_into_existing_directory() {
        let mut sb = Sandbox::new();
        sb.write("a.txt", "x");
        sb.mkdir("dest");
        sb.run(&MvCommand, &["a.txt", "dest"]).unwrap();
        assert!(sb.path("dest/a.txt").is_file());
    }

    #[test]
    fn moves_directories() {
        let mut sb = Sandbox::new();
        sb.write("src/inner.txt", "x");
        sb.run(&MvCommand, &["src", "renamed"]).unwrap();
        assert!(sb.path("renamed/inner.txt").is_file());
        assert!(!sb.path("src").exists());
    }

    #[test]
    fn missing_source() {
        let mut sb = Sandbox::new();
        let err = sb.run(&MvCommand, &["ghost", "b"]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "mv: cannot stat 'ghost': No such file or directory");
    }

    #[test]
    fn wrong_arity_is_usage() {
        let mut sb = Sandbox::new();
        for args in [&["a"][..], &["a", "b", "c"][..]] {
            let err = sb.run(&MvCommand, args).unwrap_err();
            assert_eq!(err.message, "Usage: mv <src> <dest>");
        }
    }

    #[test]
    fn move_by_copy_moves_file() {
        let sb = Sandbox::new();
        sb.write("a.txt", "data");
        move_by_copy(&sb.path("a.txt"), &sb.path("b.txt")).unwrap();
        assert!(!sb.path("a.txt").exists());
        assert_eq!(fs::read_to_string(sb.path("b.txt")).unwrap(), "data");
    }

    #[test]
    fn move_by_copy_moves_directory_tree() {
        let sb = Sandbox::new();
        sb.write("tree/a/b.txt", "deep");
        sb.write("tree/top.txt", "top");
        move_by_copy(&sb.path("tree"), &sb.path("moved")).unwrap();
        assert!(!sb.path("tree").exists());
        assert_eq!(fs::read_to_string(sb.path("moved/a/b.txt")).unwrap(), "deep");
        assert_eq!(fs::read_to_string(sb.path("moved/top.txt")).unwrap(), "top");
    }

    #[cfg(unix)]
    #[test]
    fn move_by_copy_keeps_links_inside_tree() {
        use std::os::unix::fs::symlink;

        let sb = Sandbox::new();
        sb.write("outside/keep.txt", "keep");
        sb.mkdir("tree");
        symlink("nowhere", sb.path("tree/dangling")).unwrap();
        symlink(sb.path("outside"), sb.path("tree/dirlink")).unwrap();

        move_by_copy(&sb.path("tree"), &sb.path("moved")).unwrap();

        assert!(!sb.path("tree").exists());
        assert_eq!(fs::read_link(sb.path("moved/dangling")).unwrap(), Path::new("nowhere"));
        assert_eq!(fs::read_link(sb.path("moved/dirlink")).unwrap(), sb.path("outside"));
        // Removing the source tree must not reach through the link.
        assert_eq!(fs::read_to_string(sb.path("outside/keep.txt")).unwrap(), "keep");
    }

    #[cfg(unix)]
    #[test]
    fn move_by_copy_moves_link_not_target() {
        use std::os::unix::fs::symlink;

        let sb = Sandbox::new();
        sb.write("target/inner.txt", "x");
        symlink(sb.path("target"), sb.path("link")).unwrap();

        move_by_copy(&sb.path("link"), &sb.path("moved")).unwrap();

        assert!(fs::symlink_metadata(sb.path("link")).is_err());
        assert!(fs::symlink_metadata(sb.path("moved")).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_link(sb.path("moved")).unwrap(), sb.path("target"));
        assert!(sb.path("target/inner.txt").is_file());
    }

    #[test]
    fn failed_source_removal_is_reported() {
        let failure = MoveFailure::RemoveSource(io::Error::from(io::ErrorKind::PermissionDenied));
        let err = move_error(failure, "a", "b");
        assert_eq!(err.kind, ErrorKind::PermissionDenied);
        assert_eq!(err.message, "mv: copied 'a' to 'b' but cannot remove source: Permission denied");
        assert!(err.context.contains_key("io_error"));
    }

    #[test]
    fn failed_copy_is_a_plain_move_error() {
        let failure = MoveFailure::Move(io::Error::from(io::ErrorKind::NotFound));
        let err = move_error(failure, "a", "b");
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "mv: cannot move 'a': No such file or directory");
    }

    #[test]
    fn copy_dir_recursively_copies_tree() {
        let sb = Sandbox::new();
        sb.write("tree/a/b.txt", "deep");
        copy_dir_recursively(&sb.path("tree"), &sb.path("copy")).unwrap();
        assert_eq!(fs::read_to_string(sb.path("copy/a/b.txt")).unwrap(), "deep");
    }
}
