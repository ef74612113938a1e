//! Command execution: tokenize, dispatch, invoke, normalize.
//!
//! [`Interpreter::execute`] is the only entry point clients see. It always
//! returns one string; handler errors and panics are turned into text here
//! and nowhere else.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::context::{Context, WorkingDirectory};
use crate::error::{ErrorKind, ShellError, ShellResult};
use crate::registry::Registry;
use crate::{rterm_log_debug, rterm_log_error, rterm_log_info, rterm_log_warn};

/// A command implementation.
pub trait Builtin: Send + Sync {
    /// Name the command is registered under
    fn name(&self) -> &'static str;

    /// One-line summary
    fn synopsis(&self) -> &'static str;

    /// Usage line, e.g. `grep <pattern> <file>...`
    fn usage(&self) -> &'static str;

    /// Run the command against `ctx` with the already-split arguments.
    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<String>;
}

/// One parsed invocation. Produced per call and dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Lowercased command name
    pub name: String,
    pub args: Vec<String>,
}

impl Command {
    /// Parse a raw line. `Ok(None)` means there was nothing to run.
    pub fn parse(line: &str) -> ShellResult<Option<Self>> {
        let parsed = rterm_parser::split_command(line)?;
        Ok(parsed.map(|(name, args)| Self {
            name: name.to_lowercase(),
            args,
        }))
    }
}

/// A remote command-line interpreter bound to one working directory.
pub struct Interpreter {
    cwd: WorkingDirectory,
    registry: Arc<Registry>,
}

impl Interpreter {
    pub fn new(registry: Arc<Registry>, cwd: WorkingDirectory) -> Self {
        rterm_log_info!(cwd = %cwd.path().display(), commands = registry.len(), "interpreter initialized");
        Self { cwd, registry }
    }

    /// Start in `root`, which must be an existing directory.
    pub fn with_root(registry: Arc<Registry>, root: impl AsRef<Path>) -> ShellResult<Self> {
        Ok(Self::new(registry, WorkingDirectory::new(root)?))
    }

    pub fn cwd(&self) -> &Path {
        self.cwd.path()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Execute one command line and return its output text.
    pub fn execute(&mut self, line: &str) -> String {
        self.ensure_cwd();
        let output = self.execute_line(line);
        // A handler may have removed the directory we are standing in.
        self.ensure_cwd();
        output
    }

    fn ensure_cwd(&mut self) {
        if self.cwd.revalidate() {
            rterm_log_warn!(cwd = %self.cwd.path().display(), "working directory vanished, moved to nearest ancestor");
        }
    }

    fn execute_line(&mut self, line: &str) -> String {
        let command = match Command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return String::new(),
            Err(err) => return self.normalize("", err),
        };

        let started = Instant::now();
        let result = self.run(&command);
        let elapsed_us = started.elapsed().as_micros() as u64;

        match result {
            Ok(output) => {
                rterm_log_debug!(command = %command.name, elapsed_us, "command succeeded");
                metrics::counter!("rterm_commands_total", "outcome" => "ok").increment(1);
                output
            }
            Err(err) => {
                rterm_log_debug!(command = %command.name, elapsed_us, kind = %err.kind, "command failed");
                metrics::counter!("rterm_commands_total", "outcome" => err.kind.as_str()).increment(1);
                self.normalize(&command.name, err)
            }
        }
    }

    fn run(&mut self, command: &Command) -> ShellResult<String> {
        let builtin = self.registry.dispatch(&command.name)?;
        let mut ctx = Context {
            cwd: &mut self.cwd,
            registry: &self.registry,
        };

        panic::catch_unwind(AssertUnwindSafe(|| builtin.execute(&mut ctx, &command.args)))
            .unwrap_or_else(|payload| Err(ShellError::internal_error(panic_message(payload.as_ref()))))
    }

    /// Render an error for the client. `Internal` failures are logged for
    /// the operator; everything else is an expected outcome.
    fn normalize(&self, command: &str, err: ShellError) -> String {
        match err.kind {
            ErrorKind::Internal => {
                rterm_log_error!(command, error = %err, context = ?err.context, "command failed unexpectedly");
                format!("Error running {command}: {}", err.message)
            }
            _ => err.message,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}
