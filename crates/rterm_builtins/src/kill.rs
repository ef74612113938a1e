//! `kill` builtin – send SIGTERM to a process.
//!
//! Only positive integer process ids are accepted; zero and negative ids
//! would address process groups and are rejected.

use rterm_core::{rterm_log_info, Builtin, Context, ErrorKind, ShellError, ShellResult};
use rterm_hal::ProcessFailure;

use crate::common::require_operand;

pub struct KillCommand;

impl Builtin for KillCommand {
    fn name(&self) -> &'static str {
        "kill"
    }

    fn synopsis(&self) -> &'static str {
        "Terminate a process by PID"
    }

    fn usage(&self) -> &'static str {
        "kill <pid>"
    }

    fn execute(&self, _ctx: &mut Context<'_>, args: &[String]) -> ShellResult<String> {
        let arg = require_operand("kill", args)?;
        let pid = parse_pid(arg)?;

        match rterm_hal::terminate(pid) {
            Ok(()) => {
                rterm_log_info!(pid, "process terminated on request");
                Ok(format!("Terminated process {pid}"))
            }
            Err(err) => Err(match err.process_failure() {
                Some(ProcessFailure::NotFound) => ShellError::new(
                    ErrorKind::ProcessNotFound,
                    format!("kill: process {pid} not found"),
                ),
                Some(ProcessFailure::AccessDenied) => ShellError::new(
                    ErrorKind::ProcessAccessDenied,
                    format!("kill: permission denied for process {pid}"),
                ),
                _ => ShellError::from(err).with_context("pid", pid.to_string()),
            }),
        }
    }
}

fn parse_pid(arg: &str) -> ShellResult<u32> {
    match arg.trim().parse::<u32>() {
        Ok(pid) if pid > 0 && pid <= i32::MAX as u32 => Ok(pid),
        _ => Err(ShellError::new(
            ErrorKind::InvalidArgument,
            format!("kill: invalid process id '{arg}'"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::testutils::Sandbox;

    #[test]
    fn rejects_non_numeric_and_non_positive_ids() {
        for bad in ["abc", "0", "-1", "1.5", "", "4294967295"] {
            let err = parse_pid(bad).unwrap_err();
            assert_eq!(err.kind, ErrorKind::InvalidArgument, "{bad}");
        }
        assert_eq!(parse_pid("42").unwrap(), 42);
    }

    #[test]
    fn missing_operand() {
        let mut sb = Sandbox::new();
        let err = sb.run(&KillCommand, &[]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingOperand);
        assert_eq!(err.message, "kill: missing operand");
    }

    #[test]
    fn unknown_pid_is_process_not_found() {
        let mut sb = Sandbox::new();
        let err = sb.run(&KillCommand, &["999999999"]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ProcessNotFound);
        assert_eq!(err.message, "kill: process 999999999 not found");
    }

    #[cfg(unix)]
    #[test]
    fn terminates_child() {
        let mut child = std::process::Command::new("sleep").arg("30").spawn().unwrap();
        let pid = child.id().to_string();
        let mut sb = Sandbox::new();
        assert_eq!(sb.run(&KillCommand, &[&pid]).unwrap(), format!("Terminated process {pid}"));
        child.wait().unwrap();
    }
}
