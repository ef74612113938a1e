//! `ps` builtin – a short process listing.

use rterm_core::{Builtin, Context, ShellResult};

/// Most rows returned.
pub const MAX_PROCESSES: usize = 30;

pub struct PsCommand;

impl Builtin for PsCommand {
    fn name(&self) -> &'static str {
        "ps"
    }

    fn synopsis(&self) -> &'static str {
        "Show running processes"
    }

    fn usage(&self) -> &'static str {
        "ps"
    }

    fn execute(&self, _ctx: &mut Context<'_>, _args: &[String]) -> ShellResult<String> {
        let processes = rterm_hal::list_processes()?;
        let rows: Vec<String> = processes
            .iter()
            .take(MAX_PROCESSES)
            .map(|p| format!("{}\t{}", p.pid, p.name))
            .collect();
        Ok(rows.join("\n"))
    }
}
