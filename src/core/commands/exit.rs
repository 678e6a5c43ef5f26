use std::io::Write;

use super::{Builtin, CommandError, Flow};
use crate::core::ShellState;

/// `exit`: SIGKILL every child the shell ever spawned, then leave with 0.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for ExitCommand {
    fn execute(
        &self,
        _args: &[String],
        state: &mut ShellState,
        _out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        state.processes.kill_all();
        Ok(Flow::Exit(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_command() {
        let cmd = ExitCommand::new();
        let mut state = ShellState::new();
        let mut out = Vec::new();
        let flow = cmd
            .execute(&["ignored".to_string()], &mut state, &mut out)
            .expect("exit");
        assert_eq!(flow, Flow::Exit(0));
    }
}
