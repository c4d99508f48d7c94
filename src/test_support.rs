//! Helpers shared by the unit tests.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

pub fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

/// The working directory is process-wide; every test that reads or changes
/// it, or that uses relative paths, holds this lock.
pub fn cwd_lock() -> MutexGuard<'static, ()> {
    static MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
    MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Holds the cwd lock and switches into a directory; the previous working
/// directory is restored on drop.
pub struct CwdGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CwdGuard {
    pub fn locked() -> Self {
        let lock = cwd_lock();
        let original = env::current_dir().expect("current dir");
        Self {
            original,
            _lock: lock,
        }
    }

    pub fn enter(dir: &Path) -> Self {
        let guard = Self::locked();
        env::set_current_dir(dir).expect("enter test dir");
        guard
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original);
    }
}

/// A uniquely named directory under the system temp dir, removed on drop.
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(label: &str) -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let path = env::temp_dir().join(format!(
            "myshell_{}_{}_{}_{}",
            label,
            std::process::id(),
            nanos,
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(&path).expect("create temp dir");
        let path = fs::canonicalize(&path).expect("canonicalize temp dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute path of `name` inside the directory, as a token.
    pub fn join(&self, name: &str) -> String {
        self.path.join(name).to_string_lossy().into_owned()
    }

    pub fn write(&self, name: &str, contents: &str) -> String {
        let path = self.join(name);
        fs::write(&path, contents).expect("write test file");
        path
    }

    pub fn mkdir(&self, name: &str) -> String {
        let path = self.join(name);
        fs::create_dir_all(&path).expect("create test subdir");
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
