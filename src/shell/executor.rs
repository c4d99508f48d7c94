use std::io::Write;

use log::{debug, trace};

use super::{tokenize, Shell};
use crate::error::ShellError;
use crate::input::LineSource;

const EXIT_COMMAND: &str = "exit";

/// What the loop does after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub(crate) trait CommandHandler {
    fn execute_line(&mut self, line: &str) -> Result<Flow, ShellError>;
}

impl<S: LineSource, O: Write, E: Write> CommandHandler for Shell<S, O, E> {
    fn execute_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        let tokens = tokenize(line);
        trace!("tokens: {:?}", tokens);

        let Some(command) = tokens.first() else {
            return Ok(Flow::Continue);
        };
        // Checked before the registry; extra tokens are ignored.
        if command == EXIT_COMMAND {
            return Ok(Flow::Exit);
        }

        match self.executor.execute(&tokens, &mut self.out) {
            Ok(true) => {}
            // A non-zero exit is the child's business; nothing is printed.
            Ok(false) => debug!("{} did not succeed", command),
            Err(e) => {
                let diagnostic = self.highlighter.highlight_diagnostic(&e.to_string());
                writeln!(self.err, "{}", diagnostic)?;
                self.err.flush()?;
            }
        }
        self.out.flush()?;

        Ok(Flow::Continue)
    }
}
