use std::env;
use std::io::Write;
use std::path::PathBuf;

use super::{Builtin, CommandError, Flow};
use crate::core::ShellState;

/// `cd [path]`: no argument means `$HOME`.
#[derive(Clone, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }

    fn home() -> Result<PathBuf, CommandError> {
        env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .ok_or_else(|| CommandError::ExecutionError("cd: HOME not set".to_string()))
    }
}

impl Builtin for CdCommand {
    fn execute(
        &self,
        args: &[String],
        _state: &mut ShellState,
        _out: &mut dyn Write,
    ) -> Result<Flow, CommandError> {
        let target = match args.first() {
            Some(path) => PathBuf::from(path),
            None => Self::home()?,
        };

        env::set_current_dir(&target).map_err(|e| {
            CommandError::ExecutionError(format!("cd: {}: {}", target.display(), e))
        })?;
        tracing::debug!(dir = %target.display(), "changed directory");
        Ok(Flow::Continue)
    }
}
