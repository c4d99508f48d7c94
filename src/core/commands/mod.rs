use std::collections::BTreeMap;
use std::io::{self, Write};
use std::ops::RangeInclusive;

use log::debug;

mod cd;
mod cp;
mod ls;
mod mv;
mod rm;

pub use cd::CdCommand;
pub use cp::CopyCommand;
pub use ls::ListCommand;
pub use mv::MoveCommand;
pub use rm::RemoveCommand;

use crate::process::{ProcessError, ProcessExecutor};

/// Failure of a single dispatched command.
///
/// The `Display` form is the complete diagnostic line, prefixed with the
/// command name, ready to be written to the error stream.
#[derive(Debug)]
pub enum CommandError {
    Usage {
        command: String,
        usage: &'static str,
    },
    ChangeDir {
        path: String,
        source: io::Error,
    },
    List {
        source: Option<io::Error>,
    },
    Copy {
        src: String,
        dst: String,
        source: io::Error,
    },
    Remove {
        path: String,
        source: io::Error,
    },
    Move {
        command: String,
        src: String,
        dst: String,
        source: io::Error,
    },
    Output {
        command: String,
        source: io::Error,
    },
    ProcessError(ProcessError),
}

impl CommandError {
    /// Underlying OS error, if the failure came from one.
    pub fn os_error(&self) -> Option<&io::Error> {
        match self {
            CommandError::ChangeDir { source, .. }
            | CommandError::Copy { source, .. }
            | CommandError::Remove { source, .. }
            | CommandError::Move { source, .. }
            | CommandError::Output { source, .. } => Some(source),
            CommandError::List { source, .. } => source.as_ref(),
            CommandError::ProcessError(ProcessError::Spawn { source, .. })
            | CommandError::ProcessError(ProcessError::Wait { source, .. }) => Some(source),
            CommandError::Usage { .. } => None,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Usage { command, usage } => {
                write!(f, "{}: usage: {} {}", command, command, usage)
            }
            CommandError::ChangeDir { path, source } => {
                write!(f, "cd: cannot change to '{}': {}", path, source)
            }
            CommandError::List { .. } => write!(f, "ls: failed to list directory or no match"),
            CommandError::Copy { src, dst, source } => {
                write!(f, "cp: error copying '{}' to '{}': {}", src, dst, source)
            }
            CommandError::Remove { path, source } => {
                write!(f, "rm: failed to remove '{}': {}", path, source)
            }
            CommandError::Move {
                command,
                src,
                dst,
                source,
            } => write!(
                f,
                "{}: error moving '{}' to '{}': {}",
                command, src, dst, source
            ),
            CommandError::Output { command, source } => {
                write!(f, "{}: write error: {}", command, source)
            }
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::ProcessError(err) => Some(err),
            _ => self.os_error().map(|e| e as &(dyn std::error::Error + 'static)),
        }
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// A builtin. `args` is the whole token list, command name included.
pub trait Command {
    fn execute(&self, args: &[String], out: &mut dyn Write) -> Result<(), CommandError>;
}

/// Rejects `args` whose length (command name included) is outside `allowed`.
pub(crate) fn check_arity(
    args: &[String],
    allowed: RangeInclusive<usize>,
    usage: &'static str,
) -> Result<(), CommandError> {
    if allowed.contains(&args.len()) {
        Ok(())
    } else {
        Err(CommandError::Usage {
            command: args.first().cloned().unwrap_or_default(),
            usage,
        })
    }
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    List(ListCommand),
    Copy(CopyCommand),
    Remove(RemoveCommand),
    Move(MoveCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], out: &mut dyn Write) -> Result<(), CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, out),
            CommandType::List(cmd) => cmd.execute(args, out),
            CommandType::Copy(cmd) => cmd.execute(args, out),
            CommandType::Remove(cmd) => cmd.execute(args, out),
            CommandType::Move(cmd) => cmd.execute(args, out),
        }
    }
}

/// The builtin registry plus the fallback launcher for everything else.
///
/// The table is filled once in [`CommandExecutor::new`] and never changes.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    process_executor: ProcessExecutor,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();

        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("ls", CommandType::List(ListCommand::new()));
        commands.insert("cp", CommandType::Copy(CopyCommand::new()));
        commands.insert("rm", CommandType::Remove(RemoveCommand::new()));
        commands.insert("move", CommandType::Move(MoveCommand::new()));
        commands.insert("mv", CommandType::Move(MoveCommand::new()));

        Self {
            commands,
            process_executor: ProcessExecutor::new(),
        }
    }

    /// Dispatches a non-empty token list.
    ///
    /// Builtins report `Ok(true)` on success. Anything else is launched as an
    /// external program and reports whether it exited with status 0.
    pub fn execute(&self, tokens: &[String], out: &mut dyn Write) -> Result<bool, CommandError> {
        let Some(name) = tokens.first() else {
            return Ok(true);
        };

        if let Some(cmd) = self.commands.get(name.as_str()) {
            debug!("builtin: {}", name);
            cmd.execute(tokens, out)?;
            Ok(true)
        } else {
            debug!("external: {}", name);
            Ok(self.process_executor.spawn_process(name, &tokens[1..])?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{strings, TempDir};
    use std::fs;

    #[test]
    fn test_builtin_command_detection() {
        let executor = CommandExecutor::new();

        for name in ["cd", "ls", "cp", "rm", "move", "mv"] {
            assert!(executor.commands.contains_key(name), "{} should be a builtin", name);
        }
        assert!(!executor.commands.contains_key("exit"));
        assert!(!executor.commands.contains_key("CD"));
        assert!(!executor.commands.contains_key(""));
    }

    #[test]
    fn test_registry_contents_are_fixed() {
        let executor = CommandExecutor::new();
        let names: Vec<_> = executor.commands.keys().copied().collect();

        assert_eq!(names, vec!["cd", "cp", "ls", "move", "mv", "rm"]);
    }

    #[test]
    fn test_move_aliases_share_behavior() {
        let temp = TempDir::new("registry_mv_alias");
        let executor = CommandExecutor::new();
        let a = temp.write("a.txt", "a");
        let b = temp.path().join("b.txt");
        let c = temp.path().join("c.txt");

        let mut out = Vec::new();
        assert!(executor
            .execute(&strings(&["mv", &a, b.to_str().unwrap()]), &mut out)
            .unwrap());
        assert!(executor
            .execute(
                &strings(&["move", b.to_str().unwrap(), c.to_str().unwrap()]),
                &mut out
            )
            .unwrap());

        assert_eq!(fs::read_to_string(&c).unwrap(), "a");
        assert!(out.is_empty());
    }

    #[test]
    fn test_builtin_error_is_propagated() {
        let executor = CommandExecutor::new();
        let result = executor.execute(&strings(&["rm"]), &mut Vec::new());

        assert!(matches!(result, Err(CommandError::Usage { .. })));
    }

    #[test]
    fn test_unknown_command_goes_to_launcher() {
        let executor = CommandExecutor::new();
        let result = executor.execute(
            &strings(&["myshell-test-no-such-binary-7c1f", "arg1", "arg2"]),
            &mut Vec::new(),
        );

        match result {
            Err(CommandError::ProcessError(ProcessError::Spawn { program, .. })) => {
                assert_eq!(program, "myshell-test-no-such-binary-7c1f")
            }
            other => panic!("expected spawn failure, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_external_exit_status_is_reported() {
        let executor = CommandExecutor::new();

        assert!(executor.execute(&strings(&["true"]), &mut Vec::new()).unwrap());
        assert!(!executor.execute(&strings(&["false"]), &mut Vec::new()).unwrap());
    }

    #[test]
    fn test_empty_tokens_do_nothing() {
        let executor = CommandExecutor::new();
        assert!(executor.execute(&[], &mut Vec::new()).unwrap());
    }

    #[test]
    fn test_check_arity() {
        assert!(check_arity(&strings(&["cp", "a", "b"]), 3..=3, "<source> <destination>").is_ok());

        let err = check_arity(&strings(&["cp", "a"]), 3..=3, "<source> <destination>")
            .unwrap_err();
        assert_eq!(err.to_string(), "cp: usage: cp <source> <destination>");
        assert!(err.os_error().is_none());
    }

    #[test]
    fn test_command_error_display() {
        let not_found = || io::Error::new(io::ErrorKind::NotFound, "not found");
        let errors = vec![
            (
                CommandError::ChangeDir {
                    path: "nowhere".to_string(),
                    source: not_found(),
                },
                "cd: cannot change to 'nowhere': not found",
            ),
            (
                CommandError::List { source: None },
                "ls: failed to list directory or no match",
            ),
            (
                CommandError::Copy {
                    src: "a".to_string(),
                    dst: "b".to_string(),
                    source: not_found(),
                },
                "cp: error copying 'a' to 'b': not found",
            ),
            (
                CommandError::Remove {
                    path: "a".to_string(),
                    source: not_found(),
                },
                "rm: failed to remove 'a': not found",
            ),
            (
                CommandError::Move {
                    command: "mv".to_string(),
                    src: "a".to_string(),
                    dst: "b".to_string(),
                    source: not_found(),
                },
                "mv: error moving 'a' to 'b': not found",
            ),
        ];

        for (error, expected) in errors {
            assert_eq!(error.to_string(), expected);
        }
    }
}
