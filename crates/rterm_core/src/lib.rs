//! rterm Core Library
//!
//! The interpreter behind the rterm remote command line: structured
//! errors, the working-directory state machine, the command registry and
//! the [`Interpreter`] that ties them together. Command implementations
//! live in `rterm_builtins`.

// Re-export commonly used types and functions
pub use context::{Context, DirTarget, WorkingDirectory};
pub use error::{ErrorKind, ShellError, ShellResult};
pub use executor::{Builtin, Command, Interpreter};
pub use registry::{Registry, RegistryEntry};

// Public modules
pub mod context;
pub mod error;
pub mod executor;
pub mod output;
pub mod registry;

// Lightweight logging facade macros – keep call sites but allow stripping them in minimal builds
#[cfg(feature = "minimal-logging")]
#[macro_export]
macro_rules! rterm_log_debug { ($($tt:tt)*) => { /* stripped in minimal build */ }; }
#[cfg(not(feature = "minimal-logging"))]
#[macro_export]
macro_rules! rterm_log_debug { ($($tt:tt)*) => { tracing::debug!($($tt)*); }; }

#[cfg(feature = "minimal-logging")]
#[macro_export]
macro_rules! rterm_log_info { ($($tt:tt)*) => { /* stripped */ }; }
#[cfg(not(feature = "minimal-logging"))]
#[macro_export]
macro_rules! rterm_log_info { ($($tt:tt)*) => { tracing::info!($($tt)*); }; }

#[cfg(feature = "minimal-logging")]
#[macro_export]
macro_rules! rterm_log_warn { ($($tt:tt)*) => { /* stripped */ }; }
#[cfg(not(feature = "minimal-logging"))]
#[macro_export]
macro_rules! rterm_log_warn { ($($tt:tt)*) => { tracing::warn!($($tt)*); }; }

#[cfg(feature = "minimal-logging")]
#[macro_export]
macro_rules! rterm_log_error { ($($tt:tt)*) => { /* stripped */ }; }
#[cfg(not(feature = "minimal-logging"))]
#[macro_export]
macro_rules! rterm_log_error { ($($tt:tt)*) => { tracing::error!($($tt)*); }; }
