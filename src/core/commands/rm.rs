use super::{check_arity, Command, CommandError};
use std::fs;
use std::io::Write;

/// `rm <file|directory>`: removes a file, or failing that an empty directory.
///
/// When both attempts fail only the directory removal error is reported.
#[derive(Clone)]
pub struct RemoveCommand;

impl Default for RemoveCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoveCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for RemoveCommand {
    fn execute(&self, args: &[String], _out: &mut dyn Write) -> Result<(), CommandError> {
        check_arity(args, 2..=2, "<file|directory>")?;
        let path = &args[1];

        fs::remove_file(path)
            .or_else(|_| fs::remove_dir(path))
            .map_err(|source| CommandError::Remove {
                path: path.clone(),
                source,
            })
    }
}
