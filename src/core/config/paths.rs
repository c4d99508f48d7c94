use std::path::PathBuf;

const RC_FILE: &str = ".myshellrc";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// `None` when the home directory cannot be determined.
    pub rc_path: Option<PathBuf>,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigPaths {
    pub fn new() -> Self {
        Self {
            rc_path: dirs::home_dir().map(|home| home.join(RC_FILE)),
        }
    }
}
