use std::io::Write;

use crate::error::ShellError;

mod editor;
mod reader;

pub use editor::EditorSource;
pub use reader::ReaderSource;

/// Result of asking a [`LineSource`] for the next line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    /// The user pressed Ctrl-C at the prompt; the partial line is discarded.
    Interrupted,
    /// The terminal delivered bytes that are not UTF-8; nothing is run.
    InvalidUtf8,
    Eof,
}

/// Where the interpreter gets its input from.
pub trait LineSource {
    /// Shows `prompt` and reads one line. Sources that draw their own prompt
    /// ignore `out`.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Line, ShellError>;
}
