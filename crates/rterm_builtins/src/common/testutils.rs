//! Scratch directories for exercising one builtin at a time.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rterm_core::{Builtin, Context, Registry, ShellResult, WorkingDirectory};
use tempfile::TempDir;

use crate::registry::{registry, RegistryProfile};

pub(crate) struct Sandbox {
    dir: TempDir,
    pub cwd: WorkingDirectory,
    registry: Arc<Registry>,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let cwd = WorkingDirectory::new(dir.path()).unwrap();
        Self {
            dir,
            cwd,
            registry: registry(RegistryProfile::Core),
        }
    }

    /// Canonical root of the scratch directory.
    pub fn root(&self) -> PathBuf {
        self.dir.path().canonicalize().unwrap()
    }

    pub fn path(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root().join(rel)
    }

    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    pub fn run(&mut self, builtin: &dyn Builtin, args: &[&str]) -> ShellResult<String> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut ctx = Context {
            cwd: &mut self.cwd,
            registry: &self.registry,
        };
        builtin.execute(&mut ctx, &args)
    }
}
