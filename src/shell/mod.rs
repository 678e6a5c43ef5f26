use std::io::{self, Write};
use std::sync::Arc;

use rustyline::error::ReadlineError;

mod executor;

use crate::{
    core::{commands::CommandExecutor, commands::Flow, ShellState},
    error::ShellError,
    flags::Flags,
    input::{self, EditorSource, LineSource, PipedSource, PROMPT},
    parse::PidExpander,
    process::SignalController,
};

pub use executor::CommandHandler;

pub struct Shell {
    pub(crate) source: Box<dyn LineSource>,
    pub(crate) out: Box<dyn Write>,
    pub(crate) expander: PidExpander,
    pub(crate) executor: CommandExecutor,
    pub(crate) signals: SignalController,
    pub(crate) state: ShellState,
    pub(crate) flags: Flags,
}

impl Shell {
    /// Interactive shell on the process's own stdin/stdout, with signal
    /// dispositions installed.
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let source: Box<dyn LineSource> = if input::stdin_is_terminal() {
            Box::new(EditorSource::new()?)
        } else {
            Box::new(PipedSource::stdin())
        };

        let mut shell = Self::with_io(flags, source, Box::new(io::stdout()));
        shell.signals.install()?;
        Ok(shell)
    }

    /// Shell over arbitrary input and output. Signal dispositions are left
    /// untouched.
    pub fn with_io(flags: Flags, source: Box<dyn LineSource>, out: Box<dyn Write>) -> Self {
        let state = ShellState::new();
        let signals = SignalController::new(Arc::clone(&state.modes));
        Shell {
            source,
            out,
            expander: PidExpander::new(),
            executor: CommandExecutor::new(),
            signals,
            state,
            flags,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Runs until `exit` or end of input and returns the shell's exit code.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        loop {
            self.signals.begin_cycle();

            match self.source.read_line(PROMPT) {
                Ok(line) => match self.execute_line(&line) {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Exit(code)) => {
                        tracing::debug!(code, "exit requested");
                        return Ok(code);
                    }
                    Err(e) => self.report(&e),
                },
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => {
                    tracing::debug!("end of input");
                    self.state.processes.kill_all();
                    return Ok(0);
                }
                Err(e) => {
                    tracing::error!(error = %e, "cannot read input");
                    self.state.processes.kill_all();
                    return Err(e.into());
                }
            }
        }
    }

    fn report(&mut self, error: &ShellError) {
        tracing::warn!(%error, "command failed");
        if !self.flags.is_set("quiet") {
            eprintln!("{}", error);
        }
    }
}
