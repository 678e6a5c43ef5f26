use std::collections::BTreeMap;
use std::io::Write;

mod cd;
mod exit;
mod status;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use status::StatusCommand;

use super::ShellState;
use crate::parse::Command;
use crate::process::{ProcessError, ProcessExecutor};

#[derive(Debug)]
pub enum CommandError {
    ExecutionError(String),
    IoError(std::io::Error),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::ExecutionError(msg) => write!(f, "{}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// What the command loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(i32),
}

pub trait Builtin {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    Status(StatusCommand),
}

impl Builtin for CommandType {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, state, out),
            CommandType::Exit(cmd) => cmd.execute(args, state, out),
            CommandType::Status(cmd) => cmd.execute(args, state, out),
        }
    }
}

/// Routes a parsed command to a built-in or to the process executor.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
    process_executor: ProcessExecutor,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        commands.insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));
        commands.insert(
            "status".to_string(),
            CommandType::Status(StatusCommand::new()),
        );

        Self {
            commands,
            process_executor: ProcessExecutor::new(),
        }
    }

    /// Built-ins match `arguments[0]` exactly and ignore redirection and
    /// `&`. Anything else is spawned. A command with no arguments is a no-op.
    pub fn execute(
        &self,
        command: &Command,
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let Some(name) = command.program() else {
            return Ok(Flow::Continue);
        };

        if let Some(builtin) = self.commands.get(name) {
            builtin.execute(command.args(), state, out)
        } else {
            self.process_executor.spawn(command, state, out)?;
            Ok(Flow::Continue)
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ExitStatus;
    use crate::parse::parse_line;

    fn run(executor: &CommandExecutor, line: &str, state: &mut ShellState) -> (Flow, String) {
        let command = parse_line(line, state.foreground_only()).expect("command");
        let mut out = Vec::new();
        let flow = executor.execute(&command, state, &mut out).expect("execute");
        (flow, String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_builtin_command_detection() {
        let executor = CommandExecutor::new();
        assert!(executor.is_builtin("cd"));
        assert!(executor.is_builtin("exit"));
        assert!(executor.is_builtin("status"));
        assert!(!executor.is_builtin("ls"));
        assert!(!executor.is_builtin("Status"));
        assert!(!executor.is_builtin(""));
    }

    #[test]
    fn test_status_builtin_dispatch() {
        let executor = CommandExecutor::new();
        let mut state = ShellState::new();
        state.last_status = ExitStatus::Signaled(9);

        let (flow, out) = run(&executor, "status > ignored.txt &", &mut state);
        assert_eq!(flow, Flow::Continue);
        assert_eq!(out, "terminated by signal 9\n");
        assert!(state.processes.is_empty());
    }

    #[test]
    fn test_exit_builtin_dispatch() {
        let executor = CommandExecutor::new();
        let mut state = ShellState::new();
        let (flow, out) = run(&executor, "exit", &mut state);
        assert_eq!(flow, Flow::Exit(0));
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_command_is_noop() {
        let executor = CommandExecutor::new();
        let mut state = ShellState::new();
        let (flow, out) = run(&executor, "> out.txt", &mut state);
        assert_eq!(flow, Flow::Continue);
        assert!(out.is_empty());
        assert!(state.processes.is_empty());
    }

    #[test]
    fn test_command_error_display() {
        let errors = vec![
            CommandError::ExecutionError("failed".to_string()),
            CommandError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "io error",
            )),
            CommandError::ProcessError(ProcessError::InvalidArgument("x".to_string())),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
