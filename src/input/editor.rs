use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};

use super::LineSource;

/// Line editing on a terminal. History is never recorded.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self, ReadlineError> {
        let config = Config::builder().auto_add_history(false).build();
        let editor = DefaultEditor::with_config(config)?;
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        self.editor.readline(prompt)
    }
}
