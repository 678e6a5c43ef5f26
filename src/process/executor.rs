use std::ffi::CString;
use std::io::{self, Write};
use std::ptr;

use libc::c_char;

use super::redirect::{Redirect, Stream, OPEN_FAILED};
use super::{reap, signal, write_stdout, ProcessError};
use crate::core::{ExitStatus, Pid, ShellState};
use crate::parse::Command;

const EXEC_FAILED: &str = "No such file or directory\n";

/// Argument vector and redirections, fully built before `fork` so the child
/// never allocates.
struct Launch {
    _args: Vec<CString>,
    argv: Vec<*const c_char>,
    input: Option<Redirect>,
    output: Option<Redirect>,
    background: bool,
}

impl Launch {
    fn prepare(command: &Command) -> Result<Self, ProcessError> {
        let args = command
            .arguments
            .iter()
            .map(|arg| {
                CString::new(arg.as_bytes())
                    .map_err(|_| ProcessError::InvalidArgument(arg.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut argv: Vec<*const c_char> = args.iter().map(|a| a.as_ptr()).collect();
        argv.push(ptr::null());

        let background = command.background;
        let input = command
            .input
            .as_deref()
            .map(|path| Redirect::new(Stream::Stdin, path, background))
            .transpose()?;
        let output = command
            .output
            .as_deref()
            .map(|path| Redirect::new(Stream::Stdout, path, background))
            .transpose()?;

        Ok(Self {
            _args: args,
            argv,
            input,
            output,
            background,
        })
    }

    /// Runs in the forked child and never returns.
    ///
    /// # Safety
    /// Only call between `fork` and `exec`. Every call here is
    /// async-signal-safe.
    unsafe fn exec_child(&self) -> ! {
        signal::reset_for_child(!self.background);

        for redirect in [&self.input, &self.output].into_iter().flatten() {
            if !redirect.apply() {
                write_stdout(OPEN_FAILED);
                libc::_exit(1);
            }
        }

        libc::execvp(self.argv[0], self.argv.as_ptr());
        write_stdout(EXEC_FAILED);
        libc::_exit(1)
    }
}

/// Spawns external programs and implements the foreground wait and the
/// background bookkeeping around them.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Forks and execs `command`, recording the child's pid in the process
    /// table whether it runs in the foreground or not.
    ///
    /// Background children are announced and left running. Foreground
    /// children are waited on; their status becomes `state.last_status`.
    /// Unless SIGTSTP arrived during this cycle, a signal death is reported
    /// and finished background children are swept up afterwards, the last
    /// one reaped overriding `state.last_status`.
    pub fn spawn(
        &self,
        command: &Command,
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Pid, ProcessError> {
        if command.is_empty() {
            return Err(ProcessError::InvalidArgument(String::new()));
        }
        let launch = Launch::prepare(command)?;

        // Anything still buffered would otherwise be written twice.
        out.flush()?;
        io::stdout().flush()?;

        // SAFETY: the child branch only runs exec_child.
        let pid = unsafe { libc::fork() };
        match pid {
            -1 => Err(ProcessError::Fork(io::Error::last_os_error())),
            0 => unsafe { launch.exec_child() },
            pid => {
                state.processes.record(pid);
                tracing::debug!(
                    pid,
                    program = %command.arguments[0],
                    background = launch.background,
                    "spawned child"
                );
                if launch.background {
                    writeln!(out, "background pid is {}", pid)?;
                    out.flush()?;
                } else {
                    self.finish_foreground(pid, state, out)?;
                }
                Ok(pid)
            }
        }
    }

    fn finish_foreground(
        &self,
        pid: Pid,
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<(), ProcessError> {
        let status = wait_for(pid)?;
        state.last_status = status;
        tracing::debug!(pid, %status, "foreground child finished");

        if state.modes.suspend_observed() {
            tracing::debug!("SIGTSTP seen this cycle, skipping background sweep");
            return Ok(());
        }

        if status.signal().is_some() {
            writeln!(out, "{}", status)?;
        }
        let reaped = reap::reap_finished();
        if let Some(last) = reaped.last() {
            state.last_status = last.status;
        }
        reap::report(out, &reaped)?;
        Ok(())
    }
}

/// Blocks until `pid` terminates. EINTR is retried; stop notifications are
/// never requested, so only termination ends the wait.
pub fn wait_for(pid: Pid) -> Result<ExitStatus, ProcessError> {
    loop {
        let mut raw: libc::c_int = 0;
        // SAFETY: raw is a valid out-pointer for the duration of the call.
        let rc = unsafe { libc::waitpid(pid, &mut raw, 0) };
        if rc == -1 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(ProcessError::Wait(err));
        }
        if let Some(status) = ExitStatus::from_raw(raw) {
            return Ok(status);
        }
    }
}
