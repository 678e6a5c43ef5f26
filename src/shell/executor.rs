use crate::core::commands::Flow;
use crate::error::ShellError;
use crate::parse::parse_line;

pub trait CommandHandler {
    fn execute_line(&mut self, line: &str) -> Result<Flow, ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        let expanded = self.expander.expand(line);

        // Blank and comment lines never reach the executor.
        let Some(command) = parse_line(&expanded, self.signals.foreground_only()) else {
            return Ok(Flow::Continue);
        };

        let flow = self
            .executor
            .execute(&command, &mut self.state, &mut *self.out)?;
        Ok(flow)
    }
}
