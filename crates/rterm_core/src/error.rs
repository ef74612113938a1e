//! Structured error type for interpreter operations.
//!
//! Handlers never build user-facing strings from ad hoc formats; they
//! return a [`ShellError`] carrying an [`ErrorKind`] plus a message that
//! already names the operation and the offending argument. The interpreter
//! turns it into text only at its outer boundary.

use std::collections::BTreeMap;
use std::fmt;
use std::io;

use rterm_hal::{HalError, ProcessFailure};
use rterm_parser::LexError;

/// Result type for all interpreter operations
pub type ShellResult<T> = Result<T, ShellError>;

/// Main error type for interpreter operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellError {
    pub kind: ErrorKind,
    pub message: String,
    /// Extra key/value diagnostics for logs; not shown to clients.
    pub context: BTreeMap<String, String>,
}

/// Categories of errors a command can end in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The line could not be split into words (unbalanced quote, dangling escape).
    MalformedInput,
    /// The command name is not in the registry.
    Unsupported,
    /// The command is declared in the registry but has no handler.
    Unimplemented,
    /// A required operand is absent.
    MissingOperand,
    /// Wrong number or shape of arguments.
    Usage,
    NotFound,
    NotADirectory,
    IsADirectory,
    AlreadyExists,
    NotEmpty,
    PermissionDenied,
    InvalidArgument,
    ProcessNotFound,
    ProcessAccessDenied,
    /// Anything a handler did not anticipate.
    Internal,
}

impl ErrorKind {
    /// Stable snake_case name, used for log fields and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MalformedInput => "malformed_input",
            ErrorKind::Unsupported => "unsupported",
            ErrorKind::Unimplemented => "unimplemented",
            ErrorKind::MissingOperand => "missing_operand",
            ErrorKind::Usage => "usage",
            ErrorKind::NotFound => "not_found",
            ErrorKind::NotADirectory => "not_a_directory",
            ErrorKind::IsADirectory => "is_a_directory",
            ErrorKind::AlreadyExists => "already_exists",
            ErrorKind::NotEmpty => "not_empty",
            ErrorKind::PermissionDenied => "permission_denied",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::ProcessNotFound => "process_not_found",
            ErrorKind::ProcessAccessDenied => "process_access_denied",
            ErrorKind::Internal => "internal",
        }
    }

    /// Classify a host I/O failure.
    pub fn from_io(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            io::ErrorKind::AlreadyExists => ErrorKind::AlreadyExists,
            io::ErrorKind::NotADirectory => ErrorKind::NotADirectory,
            io::ErrorKind::IsADirectory => ErrorKind::IsADirectory,
            io::ErrorKind::DirectoryNotEmpty => ErrorKind::NotEmpty,
            io::ErrorKind::InvalidInput => ErrorKind::InvalidArgument,
            _ => ErrorKind::Internal,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ShellError {
    /// Create a new shell error
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    /// Add context information to the error
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Unknown command name
    pub fn command_not_found(command: &str) -> Self {
        Self::new(
            ErrorKind::Unsupported,
            format!("Command not found: {command}. Type 'help' for available commands."),
        )
    }

    /// Registered command without a handler
    pub fn not_implemented(command: &str) -> Self {
        Self::new(
            ErrorKind::Unimplemented,
            format!("Handler for '{command}' not implemented yet."),
        )
    }

    /// `<command>: missing operand`
    pub fn missing_operand(command: &str) -> Self {
        Self::new(ErrorKind::MissingOperand, format!("{command}: missing operand"))
    }

    /// `Usage: <synopsis>`
    pub fn usage(synopsis: &str) -> Self {
        Self::new(ErrorKind::Usage, format!("Usage: {synopsis}"))
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Wrap an I/O failure of `command` on `target`, e.g. `rm: cannot remove 'x': Permission denied`.
    pub fn io(command: &str, action: &str, target: &str, err: &io::Error) -> Self {
        let kind = ErrorKind::from_io(err.kind());
        Self::new(kind, format!("{command}: {action} '{target}': {}", describe_io(err)))
            .with_context("io_error", err.to_string())
    }
}

/// The short, shell-style reason for an I/O failure.
pub fn describe_io(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "No such file or directory".to_string(),
        io::ErrorKind::PermissionDenied => "Permission denied".to_string(),
        io::ErrorKind::AlreadyExists => "File exists".to_string(),
        io::ErrorKind::NotADirectory => "Not a directory".to_string(),
        io::ErrorKind::IsADirectory => "Is a directory".to_string(),
        io::ErrorKind::DirectoryNotEmpty => "Directory not empty".to_string(),
        _ => err.to_string(),
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ShellError {}

impl From<io::Error> for ShellError {
    fn from(err: io::Error) -> Self {
        Self::new(ErrorKind::from_io(err.kind()), format!("I/O error: {err}"))
    }
}

impl From<LexError> for ShellError {
    fn from(err: LexError) -> Self {
        Self::new(ErrorKind::MalformedInput, format!("Parse error: {err}"))
    }
}

impl From<HalError> for ShellError {
    fn from(err: HalError) -> Self {
        let kind = match err.process_failure() {
            Some(ProcessFailure::NotFound) => ErrorKind::ProcessNotFound,
            Some(ProcessFailure::AccessDenied) => ErrorKind::ProcessAccessDenied,
            Some(ProcessFailure::Other) => ErrorKind::Internal,
            None => match err {
                HalError::Invalid(_) => ErrorKind::InvalidArgument,
                _ => ErrorKind::Internal,
            },
        };
        Self::new(kind, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_are_classified() {
        let err = io::Error::from(io::ErrorKind::NotFound);
        let shell = ShellError::io("rm", "cannot remove", "ghost.txt", &err);
        assert_eq!(shell.kind, ErrorKind::NotFound);
        assert_eq!(shell.message, "rm: cannot remove 'ghost.txt': No such file or directory");
        assert!(shell.context.contains_key("io_error"));
    }

    #[test]
    fn lex_errors_are_malformed_input() {
        let err: ShellError = LexError::DanglingEscape { offset: 3 }.into();
        assert!(err.is(ErrorKind::MalformedInput));
        assert!(err.message.starts_with("Parse error: No escaped character"));
    }

    #[test]
    fn hal_process_failures_map_to_process_kinds() {
        let missing = HalError::process_error("terminate", Some(7), ProcessFailure::NotFound, "No such process");
        let denied = HalError::process_error("terminate", Some(1), ProcessFailure::AccessDenied, "Operation not permitted");
        assert_eq!(ShellError::from(missing).kind, ErrorKind::ProcessNotFound);
        assert_eq!(ShellError::from(denied).kind, ErrorKind::ProcessAccessDenied);
        assert_eq!(ShellError::from(HalError::invalid("pid 0")).kind, ErrorKind::InvalidArgument);
    }

    #[test]
    fn unsupported_and_unimplemented_differ() {
        let unknown = ShellError::command_not_found("frobnicate");
        let declared = ShellError::not_implemented("wc");
        assert_ne!(unknown.kind, declared.kind);
        assert!(unknown.message.contains("Type 'help'"));
        assert_eq!(declared.message, "Handler for 'wc' not implemented yet.");
    }
}
