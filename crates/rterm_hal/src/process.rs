//! Process management abstraction for the rterm HAL
//!
//! Listing goes through `sysinfo` on every platform. Termination sends
//! SIGTERM through `nix` on Unix so "no such process" and "permission
//! denied" can be told apart; other platforms fall back to `sysinfo`.

use crate::error::{HalError, HalResult, ProcessFailure};
use sysinfo::{PidExt, ProcessExt, System, SystemExt};

/// Process identifier type
pub type ProcessId = u32;

/// Minimal process information structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: ProcessId,
    pub name: String,
}

/// Snapshot the running processes, ordered by ascending pid.
pub fn list_processes() -> HalResult<Vec<ProcessInfo>> {
    if !System::IS_SUPPORTED {
        return Err(HalError::unsupported("process listing is not supported on this platform"));
    }

    let mut sys = System::new();
    sys.refresh_processes();

    let mut processes: Vec<ProcessInfo> = sys
        .processes()
        .iter()
        .map(|(pid, process)| ProcessInfo {
            pid: pid.as_u32(),
            name: process.name().to_string(),
        })
        .collect();
    processes.sort_by_key(|p| p.pid);

    tracing::debug!(count = processes.len(), "process snapshot taken");
    Ok(processes)
}

/// Ask a process to terminate (SIGTERM on Unix).
pub fn terminate(pid: ProcessId) -> HalResult<()> {
    if pid == 0 {
        return Err(HalError::invalid("pid 0 does not name a single process"));
    }
    send_terminate(pid)
}

#[cfg(unix)]
fn send_terminate(pid: ProcessId) -> HalResult<()> {
    use nix::errno::Errno;
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    let raw = i32::try_from(pid).map_err(|_| HalError::invalid("pid out of range"))?;

    match kill(Pid::from_raw(raw), Signal::SIGTERM) {
        Ok(()) => Ok(()),
        Err(Errno::ESRCH) => Err(HalError::process_error(
            "terminate",
            Some(pid),
            ProcessFailure::NotFound,
            "No such process",
        )),
        Err(Errno::EPERM) => Err(HalError::process_error(
            "terminate",
            Some(pid),
            ProcessFailure::AccessDenied,
            "Operation not permitted",
        )),
        Err(errno) => Err(HalError::process_error(
            "terminate",
            Some(pid),
            ProcessFailure::Other,
            errno.desc(),
        )),
    }
}

#[cfg(not(unix))]
fn send_terminate(pid: ProcessId) -> HalResult<()> {
    use sysinfo::Pid;

    let mut sys = System::new();
    let sys_pid = Pid::from_u32(pid);
    if !sys.refresh_process(sys_pid) {
        return Err(HalError::process_error(
            "terminate",
            Some(pid),
            ProcessFailure::NotFound,
            "No such process",
        ));
    }
    match sys.process(sys_pid) {
        Some(process) if process.kill() => Ok(()),
        Some(_) => Err(HalError::process_error(
            "terminate",
            Some(pid),
            ProcessFailure::AccessDenied,
            "Operation not permitted",
        )),
        None => Err(HalError::process_error(
            "terminate",
            Some(pid),
            ProcessFailure::NotFound,
            "No such process",
        )),
    }
}
