//! Reserved output strings shared between the interpreter and its clients.
//!
//! These are not filesystem results; a client may match on them verbatim.

/// Returned by `ls` for a directory with no entries.
pub const EMPTY_DIRECTORY: &str = "(empty directory)";

/// Returned by searches (`grep`, `find`) that found nothing.
pub const NO_MATCHES: &str = "(no matches)";

/// Returned by `clear`; tells the client to wipe its display.
pub const CLEAR_SCREEN: &str = "<CLEAR_SCREEN>";
