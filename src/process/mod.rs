use std::fmt;
use std::io;

pub mod executor;
pub mod reap;
pub mod redirect;
pub mod signal;

pub use executor::ProcessExecutor;
pub use reap::{reap_finished, Reaped};
pub use signal::SignalController;

#[derive(Debug)]
pub enum ProcessError {
    Fork(io::Error),
    Wait(io::Error),
    InvalidArgument(String),
    SignalError(String),
    Io(io::Error),
}

impl From<io::Error> for ProcessError {
    fn from(e: io::Error) -> Self {
        ProcessError::Io(e)
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Fork(e) => write!(f, "fork() failed!: {}", e),
            ProcessError::Wait(e) => write!(f, "waitpid() failed: {}", e),
            ProcessError::InvalidArgument(arg) => {
                write!(f, "argument contains a NUL byte: {:?}", arg)
            }
            ProcessError::SignalError(msg) => write!(f, "Signal error: {}", msg),
            ProcessError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}

/// Writes straight to fd 1 with `write(2)`, bypassing std's buffered
/// stdout. Usable from a signal handler and from a forked child.
pub(crate) fn write_stdout(msg: &str) {
    // SAFETY: the pointer and length come from a live &str.
    unsafe {
        libc::write(libc::STDOUT_FILENO, msg.as_ptr().cast(), msg.len());
    }
}
