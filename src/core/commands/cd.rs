use super::{check_arity, Command, CommandError};
use std::env;
use std::io::Write;

/// `cd <directory>`: changes the process working directory.
///
/// The working directory is process-wide state; the interpreter is single
/// threaded, so nothing else observes it changing mid-command.
#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], _out: &mut dyn Write) -> Result<(), CommandError> {
        check_arity(args, 2..=2, "<directory>")?;
        let path = &args[1];

        env::set_current_dir(path).map_err(|source| CommandError::ChangeDir {
            path: path.clone(),
            source,
        })
    }
}
