use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::{c_int, mode_t};

use super::ProcessError;
use crate::parse::NULL_DEVICE;

pub(crate) const OPEN_FAILED: &str = "Error could not open file\n";

const OUTPUT_MODE: mode_t = 0o644;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdin,
    Stdout,
}

impl Stream {
    fn fd(self) -> c_int {
        match self {
            Stream::Stdin => libc::STDIN_FILENO,
            Stream::Stdout => libc::STDOUT_FILENO,
        }
    }

    fn open_flags(self) -> c_int {
        match self {
            Stream::Stdin => libc::O_RDONLY,
            Stream::Stdout => libc::O_WRONLY | libc::O_CREAT | libc::O_TRUNC,
        }
    }
}

/// A redirection resolved in the parent and applied in the child.
///
/// Everything that allocates happens in [`Redirect::new`], so
/// [`Redirect::apply`] is safe to run after `fork`.
#[derive(Debug, Clone)]
pub struct Redirect {
    stream: Stream,
    target: CString,
}

impl Redirect {
    /// Background jobs never touch the named file; they get the null device.
    pub fn new(stream: Stream, path: &Path, background: bool) -> Result<Self, ProcessError> {
        let path = if background {
            Path::new(NULL_DEVICE)
        } else {
            path
        };
        let target = CString::new(path.as_os_str().as_bytes())
            .map_err(|_| ProcessError::InvalidArgument(path.display().to_string()))?;
        Ok(Self { stream, target })
    }

    pub fn target(&self) -> &Path {
        Path::new(std::ffi::OsStr::from_bytes(self.target.as_bytes()))
    }

    /// Opens the target and moves it onto the stream's descriptor. The
    /// original descriptor is left close-on-exec.
    ///
    /// # Safety
    /// Only call in a forked child; it rewires the process's stdio.
    pub(crate) unsafe fn apply(&self) -> bool {
        let fd = libc::open(self.target.as_ptr(), self.stream.open_flags(), OUTPUT_MODE as c_int);
        if fd == -1 {
            return false;
        }
        if libc::dup2(fd, self.stream.fd()) == -1 {
            return false;
        }
        libc::fcntl(fd, libc::F_SETFD, libc::FD_CLOEXEC);
        true
    }
}
