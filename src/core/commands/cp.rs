use super::{check_arity, Command, CommandError};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// `cp <source> <destination>`: copies a file's contents and permissions,
/// overwriting the destination if it exists.
#[derive(Clone)]
pub struct CopyCommand;

impl Default for CopyCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyCommand {
    pub fn new() -> Self {
        Self
    }

    fn copy_file(src: &Path, dst: &Path) -> io::Result<()> {
        // fs::copy onto the source itself would truncate it.
        if let (Ok(a), Ok(b)) = (fs::canonicalize(src), fs::canonicalize(dst)) {
            if a == b {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "source and destination are the same file",
                ));
            }
        }
        fs::copy(src, dst).map(|_| ())
    }
}

impl Command for CopyCommand {
    fn execute(&self, args: &[String], _out: &mut dyn Write) -> Result<(), CommandError> {
        check_arity(args, 3..=3, "<source> <destination>")?;
        let (src, dst) = (&args[1], &args[2]);

        Self::copy_file(Path::new(src), Path::new(dst)).map_err(|source| CommandError::Copy {
            src: src.clone(),
            dst: dst.clone(),
            source,
        })
    }
}
