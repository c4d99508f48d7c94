use super::{check_arity, Command, CommandError};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// `move|mv <source> <destination>`: renames a file or directory.
///
/// Never replaces an existing destination, unlike `cp`.
#[derive(Clone)]
pub struct MoveCommand;

impl Default for MoveCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveCommand {
    pub fn new() -> Self {
        Self
    }

    /// Renames without replacing. On glibc Linux the kernel enforces this
    /// atomically through `renameat2(RENAME_NOREPLACE)`.
    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    fn rename(src: &Path, dst: &Path) -> io::Result<()> {
        use std::ffi::CString;
        use std::os::unix::ffi::OsStrExt;

        let c_src = CString::new(src.as_os_str().as_bytes())?;
        let c_dst = CString::new(dst.as_os_str().as_bytes())?;

        // SAFETY: both pointers are NUL-terminated and outlive the call.
        let rc = unsafe {
            libc::renameat2(
                libc::AT_FDCWD,
                c_src.as_ptr(),
                libc::AT_FDCWD,
                c_dst.as_ptr(),
                libc::RENAME_NOREPLACE,
            )
        };
        if rc == 0 {
            return Ok(());
        }

        let err = io::Error::last_os_error();
        match err.raw_os_error() {
            // Old kernels and some filesystems do not support the flag.
            Some(libc::ENOSYS) | Some(libc::EINVAL) => Self::rename_checked(src, dst),
            _ => Err(err),
        }
    }

    #[cfg(not(all(target_os = "linux", target_env = "gnu")))]
    fn rename(src: &Path, dst: &Path) -> io::Result<()> {
        Self::rename_checked(src, dst)
    }

    /// Portable fallback. A destination created between the check and the
    /// rename is still replaced.
    fn rename_checked(src: &Path, dst: &Path) -> io::Result<()> {
        if fs::symlink_metadata(dst).is_ok() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "destination already exists",
            ));
        }
        fs::rename(src, dst)
    }
}

impl Command for MoveCommand {
    fn execute(&self, args: &[String], _out: &mut dyn Write) -> Result<(), CommandError> {
        check_arity(args, 3..=3, "<source> <destination>")?;
        let (src, dst) = (&args[1], &args[2]);

        Self::rename(Path::new(src), Path::new(dst)).map_err(|source| CommandError::Move {
            command: args[0].clone(),
            src: src.clone(),
            dst: dst.clone(),
            source,
        })
    }
}
