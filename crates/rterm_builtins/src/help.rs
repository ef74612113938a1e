//! `help` builtin – list every registered command.
//!
//! Output is built from the registry the interpreter was created with, so
//! it always agrees with what dispatch accepts. Commands that are declared
//! but have no handler are marked.

use std::fmt::Write as _;

use rterm_core::{Builtin, Context, ShellResult};

pub const USAGE_HINT: &str = "Tip: Use 'cd ..' to go up one directory level";

pub struct HelpCommand;

impl Builtin for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn synopsis(&self) -> &'static str {
        "Show this help message"
    }

    fn usage(&self) -> &'static str {
        "help"
    }

    fn execute(&self, ctx: &mut Context<'_>, _args: &[String]) -> ShellResult<String> {
        let width = ctx
            .registry
            .entries()
            .iter()
            .map(|e| e.name.len())
            .max()
            .unwrap_or(0);

        let mut out = String::from("Available commands:\n");
        for entry in ctx.registry.entries() {
            let _ = write!(out, "  {:<width$} — {}", entry.name, entry.description);
            if !entry.is_implemented() {
                out.push_str(" (not implemented)");
            }
            out.push('\n');
        }
        out.push('\n');
        out.push_str(USAGE_HINT);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testutils::Sandbox;

    #[test]
    fn lists_every_entry_once() {
        let mut sb = Sandbox::new();
        let out = sb.run(&HelpCommand, &[]).unwrap();
        assert!(out.starts_with("Available commands:\n"));
        assert!(out.ends_with(USAGE_HINT));

        let registry = crate::registry(crate::RegistryProfile::Core);
        let body: Vec<&str> = out.lines().filter(|l| l.starts_with("  ")).collect();
        assert_eq!(body.len(), registry.len());
        for entry in registry.entries() {
            assert_eq!(
                body.iter().filter(|l| l.split_whitespace().next() == Some(entry.name)).count(),
                1,
                "{}",
                entry.name
            );
        }
    }

    #[test]
    fn line_format() {
        let mut sb = Sandbox::new();
        let out = sb.run(&HelpCommand, &[]).unwrap();
        assert!(out.contains("  ls     — List directory contents\n"));
        assert!(out.contains("— Show this help message"));
    }
}
