//! rterm built-in commands.
//!
//! One module per command, each a unit struct implementing
//! [`rterm_core::Builtin`]. [`registry`] assembles them into the tables the
//! interpreter dispatches through.

pub mod common;

pub mod cat;
pub mod cd;
pub mod clear;
pub mod cp;
pub mod date;
pub mod echo;
pub mod find;
pub mod grep;
pub mod head;
pub mod help;
pub mod kill;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod ps;
pub mod pwd;
pub mod registry;
pub mod rm;
pub mod rmdir;
pub mod tail;
pub mod touch;
pub mod whoami;

pub use registry::{interpreter, registry, RegistryProfile};
