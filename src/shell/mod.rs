use std::env;
use std::io::Write;

mod executor;
mod tokenize;

pub use executor::Flow;
pub use tokenize::tokenize;

use crate::{
    core::commands::CommandExecutor,
    error::ShellError,
    highlight::Highlighter,
    input::{Line, LineSource},
};

use executor::CommandHandler;

/// Shown when the working directory cannot be determined.
pub const FALLBACK_PROMPT: &str = "myshell> ";

const INVALID_UTF8_MESSAGE: &str = "myshell: input is not valid UTF-8";

/// The read-tokenize-dispatch loop.
///
/// Normal output (prompts, listings) goes to `out`, diagnostics to `err`.
/// External programs write straight to the inherited process streams.
pub struct Shell<S, O, E> {
    pub(crate) source: S,
    pub(crate) out: O,
    pub(crate) err: E,
    pub(crate) executor: CommandExecutor,
    pub(crate) highlighter: Highlighter,
}

impl<S: LineSource, O: Write, E: Write> Shell<S, O, E> {
    pub fn new(source: S, out: O, err: E, highlighter: Highlighter) -> Self {
        Self {
            source,
            out,
            err,
            executor: CommandExecutor::new(),
            highlighter,
        }
    }

    /// Runs until `exit` or end of input.
    ///
    /// Command failures are reported and never end the loop; only a failure of
    /// the interpreter's own input or output is returned.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = prompt();
            match self.source.read_line(&prompt, &mut self.out)? {
                Line::Text(line) => {
                    if self.execute_line(&line)? == Flow::Exit {
                        break;
                    }
                }
                Line::Interrupted => continue,
                Line::InvalidUtf8 => {
                    writeln!(
                        self.err,
                        "{}",
                        self.highlighter.highlight_diagnostic(INVALID_UTF8_MESSAGE)
                    )?;
                    self.err.flush()?;
                }
                Line::Eof => {
                    writeln!(self.out)?;
                    self.out.flush()?;
                    break;
                }
            }
        }
        Ok(())
    }

    pub fn into_streams(self) -> (O, E) {
        (self.out, self.err)
    }
}

/// The absolute working directory followed by `> `.
pub fn prompt() -> String {
    match env::current_dir() {
        Ok(dir) => format!("{}> ", dir.display()),
        Err(_) => FALLBACK_PROMPT.to_string(),
    }
}
