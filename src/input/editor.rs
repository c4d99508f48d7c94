use std::io::Write;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::{Line, LineSource};
use crate::error::ShellError;

/// Terminal input through rustyline. Nothing is ever added to its history.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self, ShellError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str, _out: &mut dyn Write) -> Result<Line, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Line::Text(line)),
            Err(ReadlineError::Interrupted) => Ok(Line::Interrupted),
            Err(ReadlineError::Eof) => Ok(Line::Eof),
            #[cfg(unix)]
            Err(ReadlineError::Utf8Error) => Ok(Line::InvalidUtf8),
            Err(e) => Err(e.into()),
        }
    }
}
