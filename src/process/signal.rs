use std::sync::Arc;

use libc::{signal, SIGINT, SIGTSTP, SIG_DFL, SIG_ERR, SIG_IGN};
use signal_hook::SigId;

use super::{write_stdout, ProcessError};
use crate::core::ModeFlags;

/// Owns the shell's SIGINT and SIGTSTP dispositions.
///
/// SIGINT is ignored by the shell itself; foreground children put it back
/// to the default so Ctrl-C only ends the job in front. SIGTSTP toggles
/// foreground-only mode. The engine never reacts to SIGTSTP directly, it
/// polls the mode flags instead.
pub struct SignalController {
    modes: Arc<ModeFlags>,
    tstp: Option<SigId>,
}

impl SignalController {
    pub fn new(modes: Arc<ModeFlags>) -> Self {
        Self { modes, tstp: None }
    }

    /// Installs both dispositions. Calling it again is a no-op.
    pub fn install(&mut self) -> Result<(), ProcessError> {
        if self.is_installed() {
            return Ok(());
        }

        // SAFETY: SIG_IGN is a valid disposition for SIGINT.
        if unsafe { signal(SIGINT, SIG_IGN) } == SIG_ERR {
            return Err(ProcessError::SignalError(format!(
                "cannot ignore SIGINT: {}",
                std::io::Error::last_os_error()
            )));
        }

        let modes = Arc::clone(&self.modes);
        // SAFETY: the handler only touches atomics and calls write(2).
        // signal-hook installs it with SA_RESTART, so a blocked waitpid or
        // read resumes after the toggle instead of failing with EINTR.
        let id = unsafe {
            signal_hook::low_level::register(SIGTSTP, move || {
                write_stdout(modes.toggle());
            })
        }
        .map_err(|e| ProcessError::SignalError(format!("cannot handle SIGTSTP: {}", e)))?;

        self.tstp = Some(id);
        tracing::debug!("signal handlers installed");
        Ok(())
    }

    pub fn is_installed(&self) -> bool {
        self.tstp.is_some()
    }

    pub fn foreground_only(&self) -> bool {
        self.modes.foreground_only()
    }

    pub fn suspend_observed(&self) -> bool {
        self.modes.suspend_observed()
    }

    pub fn begin_cycle(&self) {
        self.modes.begin_cycle();
    }
}

/// Dispositions for a freshly forked child, applied before any redirection
/// or exec. Foreground children become interruptible again; background
/// children keep the inherited SIGINT ignore across exec. No child may be
/// stopped by the foreground-only toggle.
///
/// # Safety
/// Only call between `fork` and `exec` in the child.
pub(crate) unsafe fn reset_for_child(foreground: bool) {
    if foreground {
        signal(SIGINT, SIG_DFL);
    }
    signal(SIGTSTP, SIG_IGN);
}
