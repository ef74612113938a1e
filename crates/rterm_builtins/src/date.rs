//! `date` builtin – print the local date and time in `date(1)` style.

use chrono::Local;
use rterm_core::{Builtin, Context, ShellResult};

/// `Thu Oct 16 14:03:07 +02:00 2026`
pub const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Z %Y";

pub struct DateCommand;

impl Builtin for DateCommand {
    fn name(&self) -> &'static str {
        "date"
    }

    fn synopsis(&self) -> &'static str {
        "Show current date and time"
    }

    fn usage(&self) -> &'static str {
        "date"
    }

    fn execute(&self, _ctx: &mut Context<'_>, _args: &[String]) -> ShellResult<String> {
        Ok(Local::now().format(DATE_FORMAT).to_string())
    }
}
