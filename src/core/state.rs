use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::jobs::ProcessTable;
use super::status::ExitStatus;

pub const ENTER_FOREGROUND_ONLY: &str = "Entering foreground-only mode (& is now ignored)\n";
pub const EXIT_FOREGROUND_ONLY: &str = "Exiting foreground-only mode\n";

/// The two flags shared with the SIGTSTP handler.
///
/// Nothing else is reachable from signal context, so plain atomics are
/// enough and no lock is ever taken.
#[derive(Debug, Default)]
pub struct ModeFlags {
    foreground_only: AtomicBool,
    suspend_observed: AtomicBool,
}

impl ModeFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foreground_only(&self) -> bool {
        self.foreground_only.load(Ordering::SeqCst)
    }

    pub fn suspend_observed(&self) -> bool {
        self.suspend_observed.load(Ordering::SeqCst)
    }

    /// Called at the top of every command cycle.
    pub fn begin_cycle(&self) {
        self.suspend_observed.store(false, Ordering::SeqCst);
    }

    /// Flips foreground-only mode, marks the cycle and returns the notice
    /// for the new mode. Async-signal-safe: atomics only, no allocation.
    pub fn toggle(&self) -> &'static str {
        let was_on = self.foreground_only.fetch_xor(true, Ordering::SeqCst);
        self.suspend_observed.store(true, Ordering::SeqCst);
        if was_on {
            EXIT_FOREGROUND_ONLY
        } else {
            ENTER_FOREGROUND_ONLY
        }
    }
}

/// Everything the shell carries between command cycles.
#[derive(Debug, Default)]
pub struct ShellState {
    pub modes: Arc<ModeFlags>,
    pub last_status: ExitStatus,
    pub processes: ProcessTable,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foreground_only(&self) -> bool {
        self.modes.foreground_only()
    }
}
