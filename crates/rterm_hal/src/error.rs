//! Error handling for the rterm HAL
//!
//! Host failures are classified here so callers can branch on what went
//! wrong without parsing OS error strings.

use std::fmt;

/// Result type for HAL operations
pub type HalResult<T> = Result<T, HalError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HalError {
    /// Process operation failed
    Process(ProcessError),
    /// Invalid operation or argument
    Invalid(String),
    /// Operation not supported on this platform
    Unsupported(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessError {
    pub operation: String,
    pub pid: Option<u32>,
    pub failure: ProcessFailure,
    pub message: String,
}

/// Why a process operation was refused by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessFailure {
    NotFound,
    AccessDenied,
    Other,
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalError::Process(err) => match err.pid {
                Some(pid) => write!(f, "Process error in {} (pid {pid}): {}", err.operation, err.message),
                None => write!(f, "Process error in {}: {}", err.operation, err.message),
            },
            HalError::Invalid(msg) => write!(f, "Invalid operation: {msg}"),
            HalError::Unsupported(msg) => write!(f, "Unsupported operation: {msg}"),
        }
    }
}

impl std::error::Error for HalError {}

impl HalError {
    pub fn process_error(operation: &str, pid: Option<u32>, failure: ProcessFailure, message: &str) -> Self {
        HalError::Process(ProcessError {
            operation: operation.to_string(),
            pid,
            failure,
            message: message.to_string(),
        })
    }

    pub fn unsupported(message: &str) -> Self {
        HalError::Unsupported(message.to_string())
    }

    pub fn invalid(message: &str) -> Self {
        HalError::Invalid(message.to_string())
    }

    /// The process failure class, if this is a process error.
    pub fn process_failure(&self) -> Option<ProcessFailure> {
        match self {
            HalError::Process(err) => Some(err.failure),
            _ => None,
        }
    }
}
