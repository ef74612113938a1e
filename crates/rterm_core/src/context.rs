//! Working-directory state and the per-invocation context handed to builtins.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{describe_io, ErrorKind, ShellError, ShellResult};
use crate::registry::Registry;

/// Where a directory change should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirTarget<'a> {
    /// The caller's home directory.
    Home,
    /// The parent of the current directory; a no-op at the filesystem root.
    Parent,
    /// A path resolved against the current directory.
    Path(&'a str),
}

/// The interpreter's virtual current directory.
///
/// Always holds a canonical absolute path that was an existing, readable
/// directory when it became current. Updates are all-or-nothing: the new
/// path is validated first and committed only on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDirectory {
    path: PathBuf,
}

impl WorkingDirectory {
    /// Start at `path`, which must be an existing directory.
    pub fn new(path: impl AsRef<Path>) -> ShellResult<Self> {
        let path = path.as_ref();
        let validated = validate_directory("cd", path, &path.display().to_string())?;
        Ok(Self { path: validated })
    }

    /// Start at the process's own current directory.
    pub fn from_process_cwd() -> ShellResult<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| ShellError::internal_error(format!("Failed to get current directory: {e}")))?;
        Self::new(cwd)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve an argument against the current directory. Absolute
    /// arguments replace it entirely.
    pub fn resolve(&self, arg: impl AsRef<Path>) -> PathBuf {
        self.path.join(arg)
    }

    /// Change directory. On error the current path is left untouched.
    pub fn change(&mut self, target: DirTarget<'_>) -> ShellResult<&Path> {
        let candidate = match target {
            DirTarget::Home => {
                let home = dirs::home_dir()
                    .ok_or_else(|| ShellError::new(ErrorKind::NotFound, "cd: HOME not set"))?;
                let shown = home.display().to_string();
                validate_directory("cd", &home, &shown)?
            }
            DirTarget::Parent => match self.path.parent() {
                Some(parent) => {
                    let shown = parent.display().to_string();
                    validate_directory("cd", parent, &shown)?
                }
                None => self.path.clone(),
            },
            DirTarget::Path(arg) => validate_directory("cd", &self.resolve(arg), arg)?,
        };

        self.path = candidate;
        Ok(&self.path)
    }

    /// Re-establish the invariant if the directory vanished underneath us:
    /// walk up to the nearest ancestor that still is a directory.
    /// Returns `true` when the path had to move.
    pub fn revalidate(&mut self) -> bool {
        if self.path.is_dir() {
            return false;
        }
        let mut candidate = self.path.as_path();
        while let Some(parent) = candidate.parent() {
            candidate = parent;
            if candidate.is_dir() {
                break;
            }
        }
        self.path = candidate.to_path_buf();
        true
    }
}

/// Canonicalize `path` and check it is a readable directory. `shown` is the
/// name reported back to the user, usually the argument as typed.
fn validate_directory(command: &str, path: &Path, shown: &str) -> ShellResult<PathBuf> {
    let canonical = path.canonicalize().map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            ShellError::new(ErrorKind::NotFound, format!("Directory not found: {shown}"))
        }
        io::ErrorKind::NotADirectory => not_a_directory(command, shown),
        _ => ShellError::new(
            ErrorKind::from_io(e.kind()),
            format!("{command}: {shown}: {}", describe_io(&e)),
        ),
    })?;

    if !canonical.is_dir() {
        return Err(not_a_directory(command, shown));
    }

    fs::read_dir(&canonical).map_err(|e| {
        ShellError::new(
            ErrorKind::from_io(e.kind()),
            format!("{command}: {shown}: {}", describe_io(&e)),
        )
    })?;

    Ok(canonical)
}

fn not_a_directory(command: &str, shown: &str) -> ShellError {
    ShellError::new(ErrorKind::NotADirectory, format!("{command}: {shown}: Not a directory"))
}

/// Everything a builtin may touch during one invocation.
pub struct Context<'a> {
    pub cwd: &'a mut WorkingDirectory,
    pub registry: &'a Registry,
}

impl Context<'_> {
    /// Resolve a path argument against the working directory.
    pub fn resolve(&self, arg: impl AsRef<Path>) -> PathBuf {
        self.cwd.resolve(arg)
    }
}
