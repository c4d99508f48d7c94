//! A minimal interactive command interpreter.
//!
//! Each input line is split on whitespace and dispatched either to one of a
//! handful of filesystem builtins (`cd`, `ls`, `cp`, `rm`, `move`/`mv`) or to
//! an external program, which runs to completion before the next prompt.

pub mod error;
pub mod shell;

pub mod core;
pub mod highlight;
pub mod input;
pub mod path;
pub mod process;

#[cfg(test)]
mod test_support;

pub use shell::Shell;
