use std::fmt;

pub mod executor;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    /// The child could not be created at all (missing executable, permissions).
    Spawn {
        program: String,
        source: std::io::Error,
    },
    /// The child started but waiting for it failed.
    Wait {
        program: String,
        source: std::io::Error,
    },
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Spawn { program, source } => {
                write!(f, "myshell: {}: failed to start: {}", program, source)
            }
            ProcessError::Wait { program, source } => {
                write!(f, "myshell: {}: failed to wait: {}", program, source)
            }
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::Spawn { source, .. } | ProcessError::Wait { source, .. } => Some(source),
        }
    }
}
