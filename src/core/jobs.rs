use std::io;

pub type Pid = libc::pid_t;

/// A child the shell has spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessRecord {
    pub pid: Pid,
}

/// Append-only log of every pid the shell has spawned.
///
/// Entries are never removed, not even after a child has been reaped; the
/// whole list is only consulted on shutdown.
#[derive(Debug, Default, Clone)]
pub struct ProcessTable {
    records: Vec<ProcessRecord>,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, pid: Pid) {
        self.records.push(ProcessRecord { pid });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn pids(&self) -> impl Iterator<Item = Pid> + '_ {
        self.records.iter().map(|r| r.pid)
    }

    pub fn contains(&self, pid: Pid) -> bool {
        self.records.iter().any(|r| r.pid == pid)
    }

    /// Sends SIGKILL to every recorded pid and returns how many were still
    /// alive to receive it. Pids that are already gone are skipped silently.
    pub fn kill_all(&self) -> usize {
        let mut delivered = 0;
        for pid in self.pids() {
            if pid <= 0 {
                continue;
            }
            // SAFETY: kill has no memory-safety preconditions.
            if unsafe { libc::kill(pid, libc::SIGKILL) } == 0 {
                delivered += 1;
            } else {
                let err = io::Error::last_os_error();
                if err.raw_os_error() != Some(libc::ESRCH) {
                    tracing::warn!(pid, error = %err, "failed to kill child");
                }
            }
        }
        tracing::debug!(tracked = self.len(), delivered, "killed tracked children");
        delivered
    }
}
