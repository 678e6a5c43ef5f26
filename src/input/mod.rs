mod editor;
mod piped;

pub use editor::EditorSource;
pub use piped::PipedSource;

use rustyline::error::ReadlineError;

/// Printed before every read, with no trailing newline.
pub const PROMPT: &str = ": ";

/// Where the command loop gets its lines from.
///
/// End of input is reported as [`ReadlineError::Eof`] and an interrupted
/// read as [`ReadlineError::Interrupted`], whichever source is in use.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError>;
}

/// True when stdin is attached to a terminal.
pub fn stdin_is_terminal() -> bool {
    // SAFETY: isatty only inspects the descriptor.
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}
