use std::process::{Command, Stdio};

use log::debug;

use super::ProcessError;

/// Launches external programs and blocks until they finish.
///
/// The child inherits the environment, the working directory and the three
/// standard streams of the interpreter; nothing else is passed down.
#[derive(Clone, Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Runs `program` with `args` as its argument vector.
    ///
    /// Returns `Ok(true)` only when the child exited with status code 0. A
    /// non-zero exit or termination by a signal is `Ok(false)` and is not an
    /// error: the caller decides whether to say anything about it.
    pub fn spawn_process(&self, program: &str, args: &[String]) -> Result<bool, ProcessError> {
        debug!("spawning {}", display_command_line(program, args));

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                program: program.to_owned(),
                source,
            })?;

        // `child` owns the process handle; it is released when it goes out of
        // scope, whichever way this function returns.
        let status = child.wait().map_err(|source| ProcessError::Wait {
            program: program.to_owned(),
            source,
        })?;

        debug!("{} exited with {}", program, status);
        Ok(status.code() == Some(0))
    }
}

/// Renders the invocation as a single command line with every word wrapped in
/// double quotes. Embedded quotes are not escaped, so the result is only meant
/// for logs; the child always receives the structured argument vector.
pub fn display_command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(|word| format!("\"{}\"", word))
        .collect::<Vec<_>>()
        .join(" ")
}
