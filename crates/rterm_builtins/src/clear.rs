//! `clear` builtin – ask the client to wipe its display.
//!
//! The interpreter has no screen; it returns a sentinel the client
//! recognises instead.

use rterm_core::output::CLEAR_SCREEN;
use rterm_core::{Builtin, Context, ShellResult};

pub struct ClearCommand;

impl Builtin for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn synopsis(&self) -> &'static str {
        "Clear the terminal screen"
    }

    fn usage(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, _ctx: &mut Context<'_>, _args: &[String]) -> ShellResult<String> {
        Ok(CLEAR_SCREEN.to_string())
    }
}
