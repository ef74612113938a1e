//! `cat` command – print a file's contents.

use rterm_core::{Builtin, Context, ShellResult};

use crate::common::{read_text, require_args};

pub struct CatCommand;

impl Builtin for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn synopsis(&self) -> &'static str {
        "Display file contents"
    }

    fn usage(&self) -> &'static str {
        "cat <file>"
    }

    fn execute(&self, ctx: &mut Context<'_>, args: &[String]) -> ShellResult<String> {
        let [file] = require_args::<1>(self.usage(), args)?;
        read_text("cat", &ctx.resolve(file), file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testutils::Sandbox;
    use rterm_core::ErrorKind;

    #[test]
    fn prints_contents_verbatim() {
        let mut sb = Sandbox::new();
        sb.write("notes.txt", "line one\nline two\n");
        assert_eq!(sb.run(&CatCommand, &["notes.txt"]).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn usage_without_operand() {
        let mut sb = Sandbox::new();
        assert_eq!(sb.run(&CatCommand, &[]).unwrap_err().message, "Usage: cat <file>");
    }

    #[test]
    fn missing_file() {
        let mut sb = Sandbox::new();
        assert!(sb.run(&CatCommand, &["ghost"]).unwrap_err().is(ErrorKind::NotFound));
    }
}
