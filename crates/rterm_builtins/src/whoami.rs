//! `whoami` builtin – print the user the server runs as.

use rterm_core::{Builtin, Context, ShellError, ShellResult};

pub struct WhoamiCommand;

impl Builtin for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn synopsis(&self) -> &'static str {
        "Show current user"
    }

    fn usage(&self) -> &'static str {
        "whoami"
    }

    fn execute(&self, _ctx: &mut Context<'_>, _args: &[String]) -> ShellResult<String> {
        whoami::fallible::username()
            .map_err(|e| ShellError::internal_error(format!("cannot determine current user: {e}")))
    }
}
