use std::io::Write;

use super::{Builtin, CommandError, Flow};
use crate::core::ShellState;

/// `status`: prints how the last foreground process ended.
#[derive(Clone, Default)]
pub struct StatusCommand;

impl StatusCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for StatusCommand {
    fn execute(
        &self,
        _args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        writeln!(out, "{}", state.last_status)?;
        out.flush()?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ExitStatus;

    fn status_output(state: &mut ShellState) -> String {
        let mut out = Vec::new();
        StatusCommand::new()
            .execute(&[], state, &mut out)
            .expect("status");
        String::from_utf8_lossy(&out).into_owned()
    }

    #[test]
    fn test_status_initial() {
        let mut state = ShellState::new();
        assert_eq!(status_output(&mut state), "exit value 0\n");
    }

    #[test]
    fn test_status_forms() {
        let mut state = ShellState::new();
        state.last_status = ExitStatus::Exited(1);
        assert_eq!(status_output(&mut state), "exit value 1\n");

        state.last_status = ExitStatus::Signaled(15);
        assert_eq!(status_output(&mut state), "terminated by signal 15\n");
    }
}
