use std::fmt;
use std::io::{self, Write};

use crate::core::{ExitStatus, Pid};

/// A background child collected by [`reap_finished`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reaped {
    pub pid: Pid,
    pub status: ExitStatus,
}

impl fmt::Display for Reaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "background pid {} is done: {}", self.pid, self.status)
    }
}

/// Collects every child that has already terminated without blocking.
///
/// Stops at the first `waitpid` that reports nothing ready (0) or fails
/// (-1, typically ECHILD once no children remain).
pub fn reap_finished() -> Vec<Reaped> {
    let mut reaped = Vec::new();
    loop {
        let mut raw: libc::c_int = 0;
        // SAFETY: raw is a valid out-pointer for the duration of the call.
        let pid = unsafe { libc::waitpid(-1, &mut raw, libc::WNOHANG) };
        if pid <= 0 {
            break;
        }
        match ExitStatus::from_raw(raw) {
            Some(status) => {
                tracing::debug!(pid, %status, "reaped background child");
                reaped.push(Reaped { pid, status });
            }
            None => tracing::debug!(pid, raw, "ignoring non-terminal wait status"),
        }
    }
    reaped
}

/// Prints one completion line per reaped child, exit and signal deaths alike.
pub fn report(out: &mut dyn Write, reaped: &[Reaped]) -> io::Result<()> {
    for child in reaped {
        writeln!(out, "{}", child)?;
    }
    out.flush()
}
