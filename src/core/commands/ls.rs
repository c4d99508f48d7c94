use super::{check_arity, Command, CommandError};
use crate::path::Pattern;
use std::fs;
use std::io::{self, Write};

const DEFAULT_PATTERN: &str = "*";

/// `ls [pattern]`: prints the names of entries matching a wildcard pattern.
///
/// Names come out in whatever order the directory enumeration yields them.
#[derive(Clone)]
pub struct ListCommand;

impl Default for ListCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ListCommand {
    pub fn new() -> Self {
        Self
    }

    fn matching_names(pattern: &Pattern<'_>) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(pattern.dir())? {
            let name = entry?.file_name().to_string_lossy().into_owned();
            if pattern.matches(&name) {
                names.push(name);
            }
        }
        Ok(names)
    }
}

impl Command for ListCommand {
    fn execute(&self, args: &[String], out: &mut dyn Write) -> Result<(), CommandError> {
        check_arity(args, 1..=2, "[pattern]")?;
        let raw = args.get(1).map(String::as_str).unwrap_or(DEFAULT_PATTERN);
        let pattern = Pattern::parse(raw);

        // Everything is collected before printing so a failure prints nothing.
        let names = Self::matching_names(&pattern).map_err(|source| CommandError::List {
            source: Some(source),
        })?;
        if names.is_empty() {
            return Err(CommandError::List { source: None });
        }

        for name in names {
            writeln!(out, "{}", name).map_err(|source| CommandError::Output {
                command: args[0].clone(),
                source,
            })?;
        }
        Ok(())
    }
}
