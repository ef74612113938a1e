//! `find` command – recursive name search below the working directory.
//!
//! `find [term]` walks the tree rooted at the current directory and prints
//! the full path of every entry whose file name contains `term`, in a
//! stable order. No term matches everything. Entries that cannot be read
//! are skipped.

use rterm_core::output::NO_MATCHES;
use rterm_core::{rterm_log_debug, Builtin, Context, ShellResult};
use walkdir::WalkDir;

pub struct FindCommand;

impl Builtin for FindCommand {
    fn name(&self) -> &'static str {
        "find"
    }

    fn synopsis(&self) -> &'static str {
        "Find files by name"
    }

    fn usage(&self) -> &'static str {
        "find [name]"
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<String> {
        let term = args.first().map(String::as_str).unwrap_or("");

        let mut found = Vec::new();
        for entry in WalkDir::new(ctx.cwd.path()).min_depth(1).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    rterm_log_debug!(error = %err, "find: skipping unreadable entry");
                    continue;
                }
            };
            if entry.file_name().to_string_lossy().contains(term) {
                found.push(entry.path().display().to_string());
            }
        }

        if found.is_empty() {
            return Ok(NO_MATCHES.to_string());
        }
        Ok(found.join("\n"))
    }
}
